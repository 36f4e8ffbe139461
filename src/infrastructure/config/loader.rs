use include_dir::{include_dir, Dir};
use serde::de::DeserializeOwned;
use std::path::Path;

use super::paths::settings_path;
use super::{AppConfig, UserSettings};

// Embed the entire configs directory at compile time
static CONFIGS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/resources/configs");

/// Load a YAML configuration file from disk
pub fn load_yaml<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)?;
    parse_yaml(&content)
}

/// Parse YAML from string
pub fn parse_yaml<T: DeserializeOwned>(content: &str) -> anyhow::Result<T> {
    let config: T = serde_yaml::from_str(content)?;
    Ok(config)
}

/// Load embedded configuration by name from the configs directory
pub fn load_embedded_config<T: DeserializeOwned + Default>(name: &str) -> T {
    let file_name = format!("{}.yaml", name);

    let Some(content) = CONFIGS_DIR.get_file(&file_name).and_then(|f| f.contents_utf8()) else {
        tracing::warn!("Embedded config {} not found, using defaults", name);
        return T::default();
    };

    match parse_yaml::<T>(content) {
        Ok(config) => {
            tracing::debug!("Loaded embedded config: {}", name);
            config
        }
        Err(e) => {
            tracing::error!("Failed to parse embedded config {}: {}", name, e);
            T::default()
        }
    }
}

/// Load user settings from settings.yaml in user config directory
/// Returns default settings if file doesn't exist or is invalid
pub fn load_user_settings() -> UserSettings {
    let path = settings_path();

    if !path.exists() {
        tracing::debug!("No settings.yaml found, using defaults");
        return UserSettings::default();
    }

    match load_yaml::<UserSettings>(&path) {
        Ok(settings) => {
            tracing::info!("Loaded user settings from {:?}", path);
            settings
        }
        Err(e) => {
            tracing::warn!("Failed to parse settings.yaml: {}, using defaults", e);
            UserSettings::default()
        }
    }
}

/// Embedded app.yaml with user settings laid over it
pub fn load_app_config() -> AppConfig {
    let mut config: AppConfig = load_embedded_config("app");
    load_user_settings().apply(&mut config);
    config
}
