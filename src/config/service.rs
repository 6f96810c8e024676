//! Process-wide application config.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::types::AppConfig;
use super::validation::validate_config;
use crate::error::ConfigError;

static CONFIG: RwLock<AppConfig> = RwLock::new(AppConfig::default_const());

/// `~/.config/zsettings`
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("zsettings"))
}

/// Path of `config.toml` inside the config directory.
pub fn config_file() -> Result<PathBuf, ConfigError> {
    config_dir()
        .map(|dir| dir.join("config.toml"))
        .ok_or(ConfigError::NoDirFound)
}

/// Read a config file. A missing file yields `Ok(None)`.
pub fn load_config_file(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::ReadFailed {
                path: path.display().to_string(),
                source,
            });
        }
    };

    toml::from_str(&content)
        .map(Some)
        .map_err(ConfigError::ParseFailed)
}

/// Load `config.toml` into the global config. Call once at startup.
///
/// Any failure leaves the defaults in place.
pub fn init_config() {
    let loaded = match config_file().and_then(|path| {
        let config = load_config_file(&path)?;
        Ok((path, config))
    }) {
        Ok((path, Some(config))) => {
            tracing::info!("Loaded app config from {:?}", path);
            config
        }
        Ok((path, None)) => {
            tracing::debug!("Config file not found at {:?}, using defaults", path);
            AppConfig::default()
        }
        Err(e) => {
            tracing::warn!(%e, "Config not loaded, using defaults");
            AppConfig::default()
        }
    };

    for warning in validate_config(&loaded) {
        tracing::warn!("Config validation: {} - {}", warning.field, warning.message);
    }

    match CONFIG.write() {
        Ok(mut config) => *config = loaded,
        Err(poisoned) => *poisoned.into_inner() = loaded,
    }
}

/// Get a clone of the current config.
pub fn config() -> AppConfig {
    match CONFIG.read() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn config_file_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        assert!(load_config_file(&path).unwrap().is_none());
    }

    #[test]
    fn test_load_config_file() {
        let file = config_file_with("notice_duration_ms = 500");
        let config = load_config_file(file.path()).unwrap().unwrap();

        assert_eq!(config.notice_duration_ms, 500);
        assert_eq!(config.window_width, 480.0);
    }

    #[test]
    fn test_invalid_config_file() {
        let file = config_file_with("window_width = \"wide\"");
        let result = load_config_file(file.path());

        assert!(matches!(result, Err(ConfigError::ParseFailed(_))));
    }

    #[test]
    fn test_unreadable_path() {
        // A directory cannot be read as a file
        let dir = TempDir::new().unwrap();
        let result = load_config_file(dir.path());

        assert!(matches!(result, Err(ConfigError::ReadFailed { .. })));
    }
}
