//! Runtime configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all) yields the
//! stock 800x600 titled window and an 11 ms loop delay.

use std::path::Path;
use std::time::Duration;

use mold_api::{KeyChord, WindowStyle};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid window size {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub event_loop: LoopConfig,
    /// Title of the main menu installed at startup.
    pub menu_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            event_loop: LoopConfig::default(),
            menu_title: String::from("Apple"),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let WindowConfig { width, height, .. } = self.window;
        if !(width >= 0.0 && height >= 0.0) {
            return Err(ConfigError::InvalidSize { width, height });
        }
        Ok(())
    }
}

/// Parameters for the single window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
    /// `None` leaves the host's default (empty) title untouched.
    pub title: Option<String>,
    pub style: WindowStyle,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            x: 0.0,
            y: 0.0,
            title: Some(String::from("My Window")),
            style: WindowStyle::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoopConfig {
    /// Pause between iterations.
    pub idle_delay_ms: u64,
    /// Shortcut that stops the loop.
    pub quit: KeyChord,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            idle_delay_ms: 11,
            quit: KeyChord::default(),
        }
    }
}

impl LoopConfig {
    pub fn idle_delay(&self) -> Duration {
        Duration::from_millis(self.idle_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use mold_api::{KeyCode, ModifierFlags};

    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.window.title.as_deref(), Some("My Window"));
        assert_eq!(config.event_loop.idle_delay(), Duration::from_millis(11));
        assert_eq!(config.event_loop.quit.key, KeyCode::Q);
        assert_eq!(config.event_loop.quit.modifiers, ModifierFlags::COMMAND);
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_json(
            r#"{ "window": { "width": 1024, "title": null, "style": ["titled", "closable"] } }"#,
        )
        .unwrap();

        assert_eq!(config.window.width, 1024.0);
        assert_eq!(config.window.height, 600.0);
        assert_eq!(config.window.title, None);
        assert_eq!(config.window.style, WindowStyle::TITLED | WindowStyle::CLOSABLE);
        assert_eq!(config.menu_title, "Apple");
    }

    #[test]
    fn test_untitled_window_otherwise_equal() {
        let titled = WindowConfig::default();
        let untitled = WindowConfig {
            title: None,
            ..WindowConfig::default()
        };
        assert_eq!(titled.width, untitled.width);
        assert_eq!(titled.height, untitled.height);
        assert_eq!(titled.style, untitled.style);
    }

    #[test]
    fn test_negative_size_rejected() {
        let err = AppConfig::from_json(r#"{ "window": { "height": -1 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSize { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = AppConfig::from_json("{ window: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "event_loop": {{ "idle_delay_ms": 0 }}, "menu_title": "Mold" }}"#).unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.event_loop.idle_delay(), Duration::ZERO);
        assert_eq!(config.menu_title, "Mold");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
