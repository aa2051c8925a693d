use std::path::PathBuf;

use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::http::header;
use actix_web::{HttpResponse, web};
use log::debug;

/// Client-side pages that must load the application shell.
pub const APP_ROUTES: [&str; 3] = ["/examchecker", "/about", "/contact"];

#[derive(Clone)]
struct FrontendDir(PathBuf);

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: PathBuf) {
    cfg.app_data(web::Data::new(FrontendDir(frontend_dir.clone())));

    for route in APP_ROUTES {
        cfg.route(route, web::get().to(serve_index));
    }

    cfg.service(
        Files::new("/", frontend_dir)
            .index_file("index.html")
            .default_handler(fn_service(|req: ServiceRequest| async move {
                debug!("Unknown path {}, redirecting home", req.path());
                let (req, _) = req.into_parts();
                let res = HttpResponse::Found()
                    .insert_header((header::LOCATION, "/"))
                    .finish();
                Ok(ServiceResponse::new(req, res))
            })),
    );
}

async fn serve_index(dir: web::Data<FrontendDir>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open_async(dir.0.join("index.html")).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use std::fs;
    use tempfile::TempDir;

    fn bundle() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html>shell</html>").unwrap();
        fs::write(dir.path().join("examcheck-frontend.js"), "init()").unwrap();
        dir
    }

    #[actix_web::test]
    async fn app_routes_serve_the_shell() {
        let dir = bundle();
        let app = test::init_service(
            App::new().configure(|cfg| configure_routes(cfg, dir.path().to_path_buf())),
        )
        .await;

        for path in ["/", "/examchecker", "/about", "/contact"] {
            let req = test::TestRequest::get().uri(path).to_request();
            let body = test::call_and_read_body(&app, req).await;
            assert_eq!(body, "<html>shell</html>", "path {}", path);
        }
    }

    #[actix_web::test]
    async fn assets_are_served() {
        let dir = bundle();
        let app = test::init_service(
            App::new().configure(|cfg| configure_routes(cfg, dir.path().to_path_buf())),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/examcheck-frontend.js")
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "init()");
    }

    #[actix_web::test]
    async fn unknown_paths_redirect_home() {
        let dir = bundle();
        let app = test::init_service(
            App::new().configure(|cfg| configure_routes(cfg, dir.path().to_path_buf())),
        )
        .await;

        let req = test::TestRequest::get().uri("/grades/42").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/");
    }
}
