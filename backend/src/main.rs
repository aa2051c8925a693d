mod config;
mod error;
mod routes;

use actix_web::{App, HttpServer, middleware::Logger};
use config::ServerConfig;
use error::ServerError;
use routes::configure_routes;
use std::env;

#[actix_web::main]
async fn main() -> Result<(), ServerError> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Ok(current_dir) = env::current_dir() {
        log::info!("Current working directory: {}", current_dir.display());
    } else {
        log::error!("Failed to get the current working directory.");
    }

    let config = ServerConfig::from_env()?;

    if !config.frontend_dir.join("index.html").is_file() {
        return Err(ServerError::MissingFrontend(config.frontend_dir));
    }

    let bind_address = config.bind_address();
    let frontend_dir = config.frontend_dir.clone();

    log::info!("Serving frontend from {}", frontend_dir.display());
    log::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
