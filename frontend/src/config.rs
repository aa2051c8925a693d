pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Where the evaluation service lives.
///
/// Fixed for a given build; `EXAMCHECK_API_BASE` at compile time overrides
/// the default.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(option_env!("EXAMCHECK_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::client::{DOCUMENT_ENDPOINT, MANUAL_ENDPOINT};

    #[test]
    fn endpoints_join_base_and_path() {
        let config = ApiConfig::new("http://localhost:5000/");
        assert_eq!(config.endpoint(DOCUMENT_ENDPOINT), "http://localhost:5000/evaluate-pdf");
        assert_eq!(config.endpoint(MANUAL_ENDPOINT), "http://localhost:5000/evaluate");
    }
}
