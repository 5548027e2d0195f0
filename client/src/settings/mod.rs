//! Client settings persisted next to the executable as YAML.
//!
//! Every section tolerates partially written files: missing fields fall
//! back to their defaults, and an unreadable file degrades to a full
//! default configuration instead of blocking startup.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const SETTINGS_FILE_PATH: &str = "./melio.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL of the Melio API, without a trailing path.
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            timeout_ms: 5_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Where the session vault file lives.
    pub vault_path: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            vault_path: "./melio_vault.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupSettings {
    /// The loading screen stays up at least this long, even when session
    /// restoration finishes sooner.
    pub min_loading_ms: u64,
}

impl Default for StartupSettings {
    fn default() -> Self {
        Self { min_loading_ms: 400 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub api: ApiSettings,
    pub storage: StorageSettings,
    pub startup: StartupSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api: ApiSettings::default(),
            storage: StorageSettings::default(),
            startup: StartupSettings::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsIoError {
    #[error("failed to read settings file: {0}")]
    Read(std::io::Error),
    #[error("failed to write settings file: {0}")]
    Write(std::io::Error),
    #[error("failed to decode YAML settings: {0}")]
    Deserialize(serde_yaml::Error),
    #[error("failed to encode YAML settings: {0}")]
    Serialize(serde_yaml::Error),
}

pub fn load_settings_or_default() -> AppSettings {
    let path = Path::new(SETTINGS_FILE_PATH);

    if !path.exists() {
        return AppSettings::default();
    }

    match load_settings_from_path(path) {
        Ok(settings) => settings,
        Err(error) => {
            log::warn!(
                "Failed to load settings from '{}': {}. Falling back to defaults.",
                SETTINGS_FILE_PATH,
                error
            );
            AppSettings::default()
        }
    }
}

pub fn ensure_settings_file_exists(settings: &AppSettings) -> Result<(), SettingsIoError> {
    let path = Path::new(SETTINGS_FILE_PATH);
    if path.exists() {
        return Ok(());
    }

    write_settings_to_path(settings, path)
}

fn load_settings_from_path(path: &Path) -> Result<AppSettings, SettingsIoError> {
    let raw = fs::read_to_string(path).map_err(SettingsIoError::Read)?;
    serde_yaml::from_str::<AppSettings>(&raw).map_err(SettingsIoError::Deserialize)
}

fn write_settings_to_path(settings: &AppSettings, path: &Path) -> Result<(), SettingsIoError> {
    let encoded = serde_yaml::to_string(settings).map_err(SettingsIoError::Serialize)?;
    fs::write(path, encoded).map_err(SettingsIoError::Write)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_settings_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("melio-settings-{}-{}.yaml", tag, std::process::id()))
    }

    #[test]
    fn defaults_point_at_local_api() {
        let settings = AppSettings::default();
        assert_eq!(settings.api.base_url, "http://127.0.0.1:8080");
        assert_eq!(settings.api.timeout_ms, 5_000);
        assert_eq!(settings.storage.vault_path, "./melio_vault.json");
        assert_eq!(settings.startup.min_loading_ms, 400);
    }

    #[test]
    fn partial_yaml_fills_missing_sections_with_defaults() {
        let raw = "api:\n  base_url: \"https://api.melio.example\"\n";
        let settings: AppSettings = serde_yaml::from_str(raw).unwrap();
        assert_eq!(settings.api.base_url, "https://api.melio.example");
        assert_eq!(settings.api.timeout_ms, 5_000);
        assert_eq!(settings.storage, StorageSettings::default());
        assert_eq!(settings.startup, StartupSettings::default());
    }

    #[test]
    fn settings_round_trip_through_disk() {
        let path = temp_settings_path("round-trip");
        let mut settings = AppSettings::default();
        settings.api.base_url = "http://10.0.0.5:9000".to_string();
        settings.startup.min_loading_ms = 1_200;

        write_settings_to_path(&settings, &path).unwrap();
        let loaded = load_settings_from_path(&path).unwrap();
        assert_eq!(loaded, settings);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn malformed_yaml_is_a_deserialize_error() {
        let path = temp_settings_path("malformed");
        fs::write(&path, "api: [not, a, mapping").unwrap();

        match load_settings_from_path(&path) {
            Err(SettingsIoError::Deserialize(_)) => {}
            other => panic!("expected deserialize error, got {:?}", other.map(|_| ())),
        }

        fs::remove_file(&path).ok();
    }
}
