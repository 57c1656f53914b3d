// Settings service
// Reads the TOML config file. The app never writes it back.

use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::settings::Settings;

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// `<config dir>/config.toml` for this platform, if a home directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "YearCalendar", "YearCalendar")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

pub fn parse_settings(text: &str, path: &Path) -> Result<Settings, ConfigError> {
    let settings: Settings = toml::from_str(text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    settings.validate().map_err(|reason| ConfigError::Invalid {
        path: path.to_path_buf(),
        reason,
    })?;
    Ok(settings)
}

/// Load settings from `path`. A missing file yields defaults.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    if !path.exists() {
        log::info!("No config at {}, using defaults", path.display());
        return Ok(Settings::default());
    }

    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = parse_settings(&text, path)?;
    log::info!("Loaded config from {}", path.display());
    Ok(settings)
}

/// Like [`load_settings`] but never fails: errors are logged and defaults used.
pub fn load_settings_or_default(path: Option<&Path>) -> Settings {
    let Some(path) = path else {
        log::warn!("No config directory available, using defaults");
        return Settings::default();
    };
    match load_settings(path) {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("{}, using defaults", err);
            Settings::default()
        }
    }
}
