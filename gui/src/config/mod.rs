// GUI configuration module
pub mod theme;

use anyhow::{Context, Result};
use engine::config::EngineSettings;
use serde::Deserialize;

// Default configuration shipped inside the binary so the app always has a
// complete config to start from.
const DEFAULT_CONFIG_JSON: &str = include_str!("../../assets/config/default.json");

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub version: String,
    pub window: WindowSettings,
    pub app: AppSettings,
    pub engine: EngineSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WindowSettings {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    /// "dark" or "light"
    pub theme: String,
}

impl AppConfig {
    pub fn load_default() -> Result<AppConfig> {
        serde_json::from_str(DEFAULT_CONFIG_JSON)
            .context("Embedded default configuration is malformed")
    }

    /// Loads the embedded default; on failure logs and falls back to the
    /// hardcoded values so a bad asset never takes the whole app down.
    pub fn load_or_default() -> AppConfig {
        match AppConfig::load_default() {
            Ok(cfg) => {
                tracing::info!("Loaded default configuration version {}", cfg.version);
                cfg
            }
            Err(e) => {
                tracing::error!("Failed to load default configuration: {:#}", e);
                AppConfig::fallback()
            }
        }
    }

    fn fallback() -> AppConfig {
        AppConfig {
            version: "0.0.0".to_string(),
            window: WindowSettings {
                title: "Used car price calculator".to_string(),
                width: 1100.0,
                height: 720.0,
            },
            app: AppSettings {
                theme: "dark".to_string(),
            },
            engine: EngineSettings::default(),
        }
    }
}
