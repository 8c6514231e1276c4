use std::fs;
use std::path::Path;
use std::time::Duration;

use dashscan_engine::ClientSettings;
use engine_logging::{engine_info, engine_warn};
use serde::Deserialize;

pub const DEFAULT_SETTINGS_FILE: &str = "dashscan.ron";

/// Optional transport overrides read from a RON file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub api_base_url: Option<String>,
    pub user_agent: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

impl Settings {
    pub fn client_settings(&self) -> ClientSettings {
        let defaults = ClientSettings::default();
        ClientSettings {
            base_url: self.api_base_url.clone().unwrap_or(defaults.base_url),
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Reads settings from `path`. Any problem falls back to defaults.
pub fn load(path: &Path) -> Settings {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Settings::default();
        }
        Err(err) => {
            engine_warn!("Failed to read settings from {:?}: {}", path, err);
            return Settings::default();
        }
    };

    match ron::from_str(&content) {
        Ok(settings) => {
            engine_info!("Loaded settings from {:?}", path);
            settings
        }
        Err(err) => {
            engine_warn!("Failed to parse settings from {:?}: {}", path, err);
            Settings::default()
        }
    }
}
