use std::env;
use std::path::PathBuf;

use crate::error::ServerError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8081;

/// Settings for the static host, read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub frontend_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ServerError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        let host = lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let frontend_dir = lookup("FRONTEND_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_frontend_dir);

        Ok(Self {
            host,
            port,
            frontend_dir,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_frontend_dir() -> PathBuf {
    if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        PathBuf::from(format!("{}/../frontend/dist", manifest_dir))
    } else {
        PathBuf::from("/usr/src/app/frontend/dist")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup_in(&[])).unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.bind_address(), "0.0.0.0:8081");
        assert!(config.frontend_dir.ends_with("dist"));
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup_in(&[
            ("PORT", "3000"),
            ("BIND_ADDRESS", "127.0.0.1"),
            ("FRONTEND_DIR", "/srv/examcheck"),
        ]))
        .unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.frontend_dir, PathBuf::from("/srv/examcheck"));
    }

    #[test]
    fn rejects_bad_port() {
        let err = ServerConfig::from_lookup(lookup_in(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ServerError::InvalidPort { .. }));
        assert!(err.to_string().contains("eighty"));
    }
}
