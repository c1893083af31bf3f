//! Configuration loading for PaperLens.
//! Reads paperlens.toml from the current directory or the path in the
//! PAPERLENS_CONFIG env var. Every field has a default, so a missing file
//! yields a fully usable configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PaperlensError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub openalex: OpenAlexConfig,
    #[serde(default)]
    pub model: ModelConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 5000 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAlexConfig {
    /// Contact address sent in the User-Agent for the OpenAlex polite pool.
    #[serde(default = "default_mailto")]
    pub mailto: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_mailto() -> String { "paperlens@example.com".to_string() }
fn default_timeout_secs() -> u64 { 45 }

impl Default for OpenAlexConfig {
    fn default() -> Self {
        Self { mailto: default_mailto(), timeout_secs: default_timeout_secs() }
    }
}

/// Predictive-model wiring. Model deserialization is an external integration
/// concern; this only records whether a backend is expected to be linked in.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ModelConfig {
    #[serde(default)]
    pub enabled: bool,
    pub path: Option<String>,
}

impl Config {
    /// Load from PAPERLENS_CONFIG or ./paperlens.toml, defaulting when absent.
    pub fn load() -> Result<Self> {
        let path = std::env::var("PAPERLENS_CONFIG")
            .unwrap_or_else(|_| "paperlens.toml".to_string());
        Self::from_path(Path::new(&path))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .map_err(|e| PaperlensError::Config(format!("read {}: {}", path.display(), e)))?;
        toml::from_str(&raw)
            .map_err(|e| PaperlensError::Config(format!("parse {}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let cfg = Config::from_path(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(cfg.server.port, 5000);
        assert_eq!(cfg.openalex.timeout_secs, 45);
        assert!(!cfg.model.enabled);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            [server]
            port = 8080

            [openalex]
            mailto = "editor@journal.org"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.openalex.mailto, "editor@journal.org");
        assert_eq!(cfg.openalex.timeout_secs, 45);
    }
}
