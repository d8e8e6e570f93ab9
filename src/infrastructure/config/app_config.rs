use std::path::PathBuf;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};
use crate::domain::llm_config::LLMConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Optional CSV to load at startup instead of the embedded sample.
    pub csv_path: Option<PathBuf>,
}

/// Application configuration: `lapprice.toml` overlaid with `LAPPRICE_*`
/// environment variables (nested keys via `__`, e.g. `LAPPRICE_SERVER__PORT`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub llm: LLMConfig,
    pub dataset: DatasetConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::from_figment(
            Figment::from(Serialized::defaults(AppConfig::default()))
                .merge(Toml::file("lapprice.toml"))
                .merge(Env::prefixed("LAPPRICE_").split("__")),
        )
    }

    fn from_figment(figment: Figment) -> Result<Self> {
        let mut config: AppConfig = figment
            .extract()
            .map_err(|e| AppError::ConfigError(e.to_string()))?;

        // The provider key can also come from the conventional env var.
        if config.llm.api_key.is_none() {
            config.llm.api_key = std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.is_empty());
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.llm.model, "gemini-2.5-flash");
        assert!(config.dataset.csv_path.is_none());
    }

    #[test]
    fn test_toml_overlay() {
        let figment = Figment::from(Serialized::defaults(AppConfig::default())).merge(
            Toml::string("[server]\nport = 4020\n\n[llm]\nmodel = \"gemini-2.0-flash\"\n"),
        );
        let config = AppConfig::from_figment(figment).unwrap();

        assert_eq!(config.server.port, 4020);
        assert_eq!(config.llm.model, "gemini-2.0-flash");
        assert_eq!(config.server.host, "127.0.0.1");
    }
}
