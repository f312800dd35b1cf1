//! Harness settings and defaults
//!
//! Stored as JSON. Missing fields fall back to the built-in defaults, so a
//! settings file only needs the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{REVEAL_DELAY_MS, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::ConfigError;
use crate::params::{Layout, RulerColor, ShapeKind};

/// Tool settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Animation ===
    /// Milliseconds between revealed ticks
    pub reveal_delay_ms: u64,

    // === Initial selection ===
    pub default_shape: ShapeKind,
    pub default_color: RulerColor,
    /// Prefilled text of the length field
    pub default_length: String,
    /// Prefilled text of the depth field
    pub default_depth: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            reveal_delay_ms: REVEAL_DELAY_MS,

            default_shape: ShapeKind::Straight,
            default_color: RulerColor::Yellow,
            default_length: "900".to_string(),
            default_depth: "7".to_string(),
        }
    }
}

impl Settings {
    /// Layout area rulers are centered in
    pub fn layout(&self) -> Layout {
        Layout::new(self.screen_width, self.screen_height)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` if given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json_str(r#"{"reveal_delay_ms": 5, "default_shape": "Protractor"}"#).unwrap();
        assert_eq!(settings.reveal_delay_ms, 5);
        assert_eq!(settings.default_shape, ShapeKind::Protractor);
        assert_eq!(settings.screen_width, SCREEN_WIDTH);
        assert_eq!(settings.default_length, "900");
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            default_color: RulerColor::Red,
            ..Default::default()
        };
        let json = settings.to_json_string().unwrap();
        assert_eq!(Settings::from_json_str(&json).unwrap(), settings);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(Settings::from_json_str("{nope"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = Path::new("/definitely/not/here/settings.json");
        assert!(matches!(Settings::load(Some(path)), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_layout_from_settings() {
        let settings = Settings {
            screen_width: 640.0,
            screen_height: 480.0,
            ..Default::default()
        };
        assert_eq!(settings.layout(), Layout::new(640.0, 480.0));
    }
}
