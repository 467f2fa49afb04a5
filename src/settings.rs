//! Game settings and preferences
//!
//! Persisted in LocalStorage on the web. Native builds read an optional JSON
//! file named by `PUFFER_REEF_SETTINGS`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::DEFAULT_MAX_BUBBLES;

/// Largest bubble cap accepted from a settings file
pub const MAX_BUBBLE_CAP: usize = 1024;

/// Errors while reading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[cfg(not(target_arch = "wasm32"))]
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Visual Effects ===
    /// Draw swaying plants
    pub decorations: bool,
    /// Draw rising bubbles
    pub bubbles: bool,
    /// Upper bound on live bubbles
    pub max_bubbles: usize,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Determinism ===
    /// Fixed RNG seed; a time-based seed is used when unset
    pub default_seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            decorations: true,
            bubbles: true,
            max_bubbles: DEFAULT_MAX_BUBBLES,
            show_fps: true,
            default_seed: None,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "puffer_reef_settings";

    /// Environment variable naming a JSON settings file (native only)
    pub const ENV_VAR: &'static str = "PUFFER_REEF_SETTINGS";

    /// Parse and validate settings; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.max_bubbles == 0 || self.max_bubbles > MAX_BUBBLE_CAP {
            return Err(SettingsError::Invalid {
                field: "max_bubbles",
                reason: format!("must be between 1 and {}", MAX_BUBBLE_CAP),
            });
        }
        Ok(())
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match self.to_json() {
                Ok(json) => {
                    let _ = storage.set_item(Self::STORAGE_KEY, &json);
                    log::info!("Settings saved");
                }
                Err(e) => log::warn!("Failed to save settings: {}", e),
            }
        }
    }

    /// Load settings from the file named by `PUFFER_REEF_SETTINGS`, falling
    /// back to defaults when unset or unreadable
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            return Self::default();
        };
        match Self::load_file(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path, e);
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: impl AsRef<std::path::Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.decorations);
        assert!(settings.bubbles);
        assert_eq!(settings.max_bubbles, DEFAULT_MAX_BUBBLES);
        assert_eq!(settings.default_seed, None);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "bubbles": false, "default_seed": 42 }"#).unwrap();
        assert!(!settings.bubbles);
        assert!(settings.decorations);
        assert_eq!(settings.default_seed, Some(42));
        assert_eq!(settings.max_bubbles, DEFAULT_MAX_BUBBLES);
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings {
            show_fps: false,
            max_bubbles: 32,
            ..Settings::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_rejects_bad_bubble_cap() {
        let err = Settings::from_json(r#"{ "max_bubbles": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "max_bubbles", .. }));

        let err = Settings::from_json(r#"{ "max_bubbles": 5000 }"#).unwrap_err();
        assert!(err.to_string().contains("max_bubbles"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_load_file_missing_is_io_error() {
        let err = Settings::load_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
