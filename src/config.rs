//! Runtime configuration.
//!
//! The configuration is a small JSON file. Every field is optional and falls back to the values
//! the program has always used, so running without a file gives the stock 600x800 window.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "GLITTER_CONFIG";

/// Window creation options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    /// When set, `width` and `height` are ignored and the desktop resolution is used.
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "OpenGL".to_string(),
            width: 600,
            height: 800,
            resizable: true,
            fullscreen: false,
        }
    }
}

/// OpenGL context options. The context is always a forward compatible core profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlConfig {
    pub major: u8,
    pub minor: u8,
    pub vsync: bool,
}

impl Default for GlConfig {
    fn default() -> Self {
        Self {
            major: 4,
            minor: 0,
            vsync: true,
        }
    }
}

/// The whole configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub gl: GlConfig,
    pub clear_color: [f32; 4],
    pub log_level: log::LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            gl: GlConfig::default(),
            clear_color: [0.25, 0.25, 0.25, 1.0],
            log_level: log::LevelFilter::Info,
        }
    }
}

impl Config {
    /// Returns where the config file is looked up: `$GLITTER_CONFIG` if set, otherwise
    /// `glitter/config.json` inside the platform config directory.
    pub fn path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("glitter").join("config.json"))
    }

    /// Loads and validates the configuration.
    ///
    /// A missing file at the default location yields the defaults. A path given through
    /// `$GLITTER_CONFIG` must exist.
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var_os(CONFIG_ENV).is_some();
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };
        if explicit {
            Self::load_required(&path)
        } else {
            Self::load_from(&path)
        }
    }

    /// Loads and validates the configuration at `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_json(&contents),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Like [`Config::load_from`], but a missing file is an error.
    pub fn load_required(path: &Path) -> Result<Self, ConfigError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Parses and validates a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values the window and the shaders cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.window.fullscreen && (self.window.width == 0 || self.window.height == 0) {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        // the shaders are GLSL 330
        if (self.gl.major, self.gl.minor) < (3, 3) {
            return Err(ConfigError::Invalid(format!(
                "OpenGL {}.{} is too old, 3.3 or newer is required",
                self.gl.major, self.gl.minor
            )));
        }
        if let Some(c) = self
            .clear_color
            .iter()
            .find(|c| !(0.0..=1.0).contains(*c))
        {
            return Err(ConfigError::Invalid(format!(
                "clear color component {c} is outside 0..1"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_window() {
        let config = Config::default();
        assert_eq!(config.window.title, "OpenGL");
        assert_eq!((config.window.width, config.window.height), (600, 800));
        assert!(config.window.resizable);
        assert!(!config.window.fullscreen);
        assert_eq!((config.gl.major, config.gl.minor), (4, 0));
        assert_eq!(config.clear_color, [0.25, 0.25, 0.25, 1.0]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_json(
            r#"{ "window": { "title": "House", "width": 1024 }, "log_level": "debug" }"#,
        )
        .unwrap();
        assert_eq!(config.window.title, "House");
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.window.height, 800);
        assert_eq!(config.gl, GlConfig::default());
        assert_eq!(config.log_level, log::LevelFilter::Debug);
    }

    #[test]
    fn test_malformed_json() {
        let err = Config::from_json("{ \"window\": ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_zero_size() {
        let err = Config::from_json(r#"{ "window": { "height": 0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        // fullscreen ignores the requested size
        let config =
            Config::from_json(r#"{ "window": { "height": 0, "fullscreen": true } }"#).unwrap();
        assert!(config.window.fullscreen);
    }

    #[test]
    fn test_rejects_old_gl() {
        let err = Config::from_json(r#"{ "gl": { "major": 3, "minor": 2 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(Config::from_json(r#"{ "gl": { "major": 3, "minor": 3 } }"#).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_color() {
        let err = Config::from_json(r#"{ "clear_color": [0.1, 1.5, 0.1, 1.0] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("glitter-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let config = Config::load_from(&scratch_path("missing.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let err = Config::load_required(&scratch_path("typo.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(ref e) if e.kind() == ErrorKind::NotFound));
    }

    #[test]
    fn test_load_unreadable_path() {
        let dir = scratch_path("config-dir");
        std::fs::create_dir_all(&dir).unwrap();
        let err = Config::load_from(&dir).unwrap_err();
        std::fs::remove_dir(&dir).unwrap();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_from_file() {
        let path = scratch_path("config.json");
        std::fs::write(&path, r#"{ "window": { "title": "House" }, "gl": { "vsync": false } }"#)
            .unwrap();
        let config = Config::load_from(&path);
        std::fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.window.title, "House");
        assert!(!config.gl.vsync);
        assert_eq!(config.clear_color, Config::default().clear_color);
    }

    #[test]
    fn test_written_config_reads_back() {
        let mut config = Config::default();
        config.window.fullscreen = true;
        config.clear_color = [0.0, 0.5, 1.0, 1.0];
        config.log_level = log::LevelFilter::Trace;

        let json = serde_json::to_string_pretty(&config).unwrap();
        assert_eq!(Config::from_json(&json).unwrap(), config);
    }
}
