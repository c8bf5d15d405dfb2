//! Configuration for the HTTP transport.
//!
//! Configuration can be loaded from a JSON file or from the environment:
//!
//! ```no_run
//! use ladle_colors::ServerConfig;
//!
//! // Load from file
//! let config = ServerConfig::load("ladle.json")?;
//!
//! // Or defaults with LADLE_* overrides
//! let config = ServerConfig::from_env()?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Every field is optional in the file; missing fields take their defaults.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address (e.g., "0.0.0.0:8080").
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// CORS origins (empty = allow all).
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Largest palette a single request may ask for.
    #[serde(default = "default_max_palette_count")]
    pub max_palette_count: usize,

    /// Maximum request body size in bytes.
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_max_palette_count() -> usize {
    64
}

fn default_max_body_size() -> usize {
    64 * 1024 // 64KB
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            cors_origins: Vec::new(),
            max_palette_count: default_max_palette_count(),
            max_body_size: default_max_body_size(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    /// Defaults overridden by `LADLE_*` environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(addr) = lookup("LADLE_LISTEN_ADDR") {
            config.listen_addr = addr;
        }

        if let Some(origins) = lookup("LADLE_CORS_ORIGINS") {
            config.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(max) = lookup("LADLE_MAX_PALETTE_COUNT") {
            config.max_palette_count = max
                .parse()
                .with_context(|| format!("LADLE_MAX_PALETTE_COUNT={max:?} is not a count"))?;
        }

        Ok(config)
    }

    /// Save configuration to a JSON file that [`ServerConfig::load`] reads back
    pub fn to_json_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("writing config file {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.max_palette_count, 64);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ServerConfig =
            serde_json::from_str(r#"{"listen_addr": "127.0.0.1:9000"}"#).unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.max_body_size, 64 * 1024);
    }

    #[test]
    fn test_env_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("LADLE_LISTEN_ADDR", "127.0.0.1:3000"),
            ("LADLE_CORS_ORIGINS", "http://a.test, http://b.test,"),
            ("LADLE_MAX_PALETTE_COUNT", "12"),
        ]))
        .unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:3000");
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.max_palette_count, 12);
    }

    #[test]
    fn test_env_invalid_count() {
        let result = ServerConfig::from_lookup(lookup(&[("LADLE_MAX_PALETTE_COUNT", "many")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_file_roundtrip() {
        let path = std::env::temp_dir().join(format!("ladle-config-{}.json", std::process::id()));
        let config = ServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..ServerConfig::default()
        };

        config.to_json_file(&path).unwrap();
        let loaded = ServerConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let err = ServerConfig::default()
            .to_json_file("/nonexistent/dir/ladle.json")
            .unwrap_err();
        assert!(err.to_string().contains("writing config file"));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(ServerConfig::load("/nonexistent/ladle.json").is_err());
    }
}
