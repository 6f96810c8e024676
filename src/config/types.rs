//! Configuration type definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Window width in pixels.
    pub window_width: f32,
    /// Window height in pixels.
    pub window_height: f32,
    /// Page file to load instead of `~/.config/zsettings/pages.toml`.
    pub pages: Option<PathBuf>,
    /// How long transient notices stay visible, in milliseconds.
    pub notice_duration_ms: u64,
}

impl AppConfig {
    /// Const default for static initialization.
    pub const fn default_const() -> Self {
        Self {
            window_width: 480.0,
            window_height: 560.0,
            pages: None,
            notice_duration_ms: 2000,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::default_const()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = toml::from_str("window_width = 640.0").unwrap();
        assert_eq!(config.window_width, 640.0);
        assert_eq!(config.window_height, 560.0);
        assert_eq!(config.notice_duration_ms, 2000);
        assert!(config.pages.is_none());
    }

    #[test]
    fn test_pages_path() {
        let config: AppConfig = toml::from_str(r#"pages = "/etc/zsettings/pages.toml""#).unwrap();
        assert_eq!(
            config.pages,
            Some(PathBuf::from("/etc/zsettings/pages.toml"))
        );
    }
}
