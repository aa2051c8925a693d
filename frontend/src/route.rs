/// Screens reachable by path. The server hands every one of them the same shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Landing,
    Checker,
    About,
    Contact,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/examchecker" => Page::Checker,
            "/about" => Page::About,
            "/contact" => Page::Contact,
            _ => Page::Landing,
        }
    }

    pub fn current() -> Self {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .map(|path| Self::from_path(&path))
            .unwrap_or(Page::Landing)
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Landing => "/",
            Page::Checker => "/examchecker",
            Page::About => "/about",
            Page::Contact => "/contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_map_to_their_screens() {
        assert_eq!(Page::from_path("/"), Page::Landing);
        assert_eq!(Page::from_path("/examchecker"), Page::Checker);
        assert_eq!(Page::from_path("/examchecker/"), Page::Checker);
        assert_eq!(Page::from_path("/about"), Page::About);
        assert_eq!(Page::from_path("/contact"), Page::Contact);
    }

    #[test]
    fn unknown_paths_fall_back_to_landing() {
        assert_eq!(Page::from_path("/grades/42"), Page::Landing);
        assert_eq!(Page::from_path(""), Page::Landing);
    }

    #[test]
    fn paths_round_trip() {
        for page in [Page::Landing, Page::Checker, Page::About, Page::Contact] {
            assert_eq!(Page::from_path(page.path()), page);
        }
    }
}
