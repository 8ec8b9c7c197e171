//! Server configuration.
//!
//! Values come from the environment (a `.env` file is loaded by the CLI
//! through `dotenvy`) and can be overridden by command-line flags.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `MAILBLAST_PORT` | `3000` |
//! | `MAILBLAST_MAX_UPLOAD_BYTES` | `10485760` (10 MiB) |
//! | `MAILBLAST_STATIC_DIR` | unset (API only) |

use std::path::PathBuf;

use crate::error::{ServerError, ServerResult};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default upload limit for recipient files.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Maximum number of invalid lines echoed back to clients.
pub const MAX_INVALID_SAMPLES: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub max_upload_bytes: usize,
    /// Directory with the built dashboard, served at `/`
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            static_dir: None,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> ServerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup (the environment, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> ServerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(port) = lookup("MAILBLAST_PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ServerError::Config(format!("MAILBLAST_PORT: '{}'", port)))?;
        }

        if let Some(limit) = lookup("MAILBLAST_MAX_UPLOAD_BYTES") {
            config.max_upload_bytes = limit.trim().parse().map_err(|_| {
                ServerError::Config(format!("MAILBLAST_MAX_UPLOAD_BYTES: '{}'", limit))
            })?;
        }

        config.static_dir = lookup("MAILBLAST_STATIC_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }

    pub fn with_port(mut self, port: Option<u16>) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("MAILBLAST_PORT", "8080"),
            ("MAILBLAST_MAX_UPLOAD_BYTES", "1024"),
            ("MAILBLAST_STATIC_DIR", "frontend/dist"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_upload_bytes, 1024);
        assert_eq!(config.static_dir, Some(PathBuf::from("frontend/dist")));

        assert_eq!(config.with_port(Some(9000)).port, 9000);
    }

    #[test]
    fn test_bad_port() {
        let err = ServerConfig::from_lookup(lookup(&[("MAILBLAST_PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("MAILBLAST_PORT"));
    }
}
