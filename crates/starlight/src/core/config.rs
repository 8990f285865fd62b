//! # Console Configuration
//!
//! Device paths, palette and logging for a Starlight console. Loaded from
//! TOML or RON through the [`Config`] trait; every section falls back to its
//! defaults when omitted.
//!
//! ```toml
//! [devices]
//! framebuffer = "/Devices/Framebuffer"
//! font = "/Devices/Bizcat"
//! mouse = "/Devices/Mouse/"
//!
//! [theme]
//! edge = 3
//!
//! [logging]
//! level = "debug"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use crate::config::{Config, ConfigError};
use crate::ui::Theme;

/// Where the console devices live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Framebuffer device, opened read-write
    pub framebuffer: PathBuf,
    /// Font device, opened read-only
    pub font: PathBuf,
    /// Mouse device, only read by the frame driver
    pub mouse: PathBuf,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            framebuffer: PathBuf::from("/Devices/Framebuffer"),
            font: PathBuf::from("/Devices/Bizcat"),
            mouse: PathBuf::from("/Devices/Mouse/"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug or trace
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Top-level console configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarlightConfig {
    /// Device paths
    pub devices: DeviceConfig,
    /// Palette and bevel width
    pub theme: Theme,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl StarlightConfig {
    /// Set the framebuffer device path
    #[must_use]
    pub fn with_framebuffer(mut self, path: impl Into<PathBuf>) -> Self {
        self.devices.framebuffer = path.into();
        self
    }

    /// Set the font device path
    #[must_use]
    pub fn with_font(mut self, path: impl Into<PathBuf>) -> Self {
        self.devices.font = path.into();
        self
    }

    /// Set the palette
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let devices = [
            ("framebuffer", &self.devices.framebuffer),
            ("font", &self.devices.font),
            ("mouse", &self.devices.mouse),
        ];
        for (name, path) in devices {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid(format!("{name} device path cannot be empty")));
            }
        }

        self.theme.validate().map_err(ConfigError::Invalid)?;

        if self.logging.level.parse::<log::LevelFilter>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "Unknown log level: {}",
                self.logging.level
            )));
        }

        Ok(())
    }
}

impl Config for StarlightConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("starlight-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_defaults_validate() {
        let config = StarlightConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.devices.framebuffer, PathBuf::from("/Devices/Framebuffer"));
        assert_eq!(config.theme, Theme::CLASSIC);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: StarlightConfig = toml::from_str(
            r#"
            [devices]
            framebuffer = "/tmp/fb"

            [theme]
            edge = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.devices.framebuffer, PathBuf::from("/tmp/fb"));
        assert_eq!(config.devices.font, PathBuf::from("/Devices/Bizcat"));
        assert_eq!(config.theme.edge, 2);
        assert_eq!(config.theme.base, Theme::CLASSIC.base);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_save_and_load_toml_and_ron() {
        let config = StarlightConfig::default()
            .with_framebuffer("/tmp/fb0")
            .with_theme(Theme::AMBER);

        for ext in ["toml", "ron"] {
            let path = temp_path(&format!("config.{ext}"));
            config.save_to_file(&path).unwrap();
            let loaded = StarlightConfig::load_from_file(&path).unwrap();
            std::fs::remove_file(&path).ok();
            assert_eq!(loaded, config);
        }
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = StarlightConfig::default();
        config.logging.level = "loud".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = StarlightConfig::default().with_font("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = StarlightConfig::load_from_file(temp_path("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
