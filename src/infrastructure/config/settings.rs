use serde::{Deserialize, Serialize};

use super::app_config::{AppConfig, StorageType};

/// User settings stored in settings.yaml in user config directory.
/// All fields are optional - missing values keep the embedded defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UserSettings {
    pub listen_addr: Option<String>,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageSettings {
    #[serde(rename = "type")]
    pub storage_type: Option<StorageType>,
    pub sqlite_path: Option<String>,
    pub mongodb_uri: Option<String>,
    pub mongodb_database: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingSettings {
    pub production: Option<bool>,
}

impl UserSettings {
    /// Overlay these settings on top of `config`.
    pub fn apply(self, config: &mut AppConfig) {
        if let Some(addr) = self.listen_addr {
            config.server.listen_addr = addr;
        }
        if let Some(storage_type) = self.storage.storage_type {
            config.storage.storage_type = storage_type;
        }
        if let Some(path) = self.storage.sqlite_path {
            config.storage.sqlite.path = path;
        }
        if let Some(uri) = self.storage.mongodb_uri {
            config.storage.mongodb.uri = uri;
        }
        if let Some(database) = self.storage.mongodb_database {
            config.storage.mongodb.database = database;
        }
        if let Some(production) = self.logging.production {
            config.logging.production = production;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overrides_only_present_fields() {
        let settings: UserSettings = serde_yaml::from_str(
            "listen_addr: \"0.0.0.0:50051\"\nstorage:\n  type: mongodb\n  mongodb_database: bank\n",
        )
        .unwrap();

        let mut config = AppConfig::default();
        settings.apply(&mut config);

        assert_eq!(config.server.listen_addr, "0.0.0.0:50051");
        assert_eq!(config.storage.storage_type, StorageType::Mongodb);
        assert_eq!(config.storage.mongodb.database, "bank");
        assert_eq!(config.storage.mongodb.uri, "mongodb://localhost:27017");
        assert!(config.storage.sqlite.path.is_empty());
        assert!(!config.logging.production);
    }

    #[test]
    fn test_apply_logging_production() {
        let settings: UserSettings = serde_yaml::from_str("logging:\n  production: true\n").unwrap();

        let mut config = AppConfig::default();
        settings.apply(&mut config);

        assert!(config.logging.production);
        assert_eq!(config.server.listen_addr, "127.0.0.1:9090");
    }
}
