use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

/// App settings persisted in LocalStorage
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    /// Base URL of the placeholder image service
    #[serde(default = "default_photo_source")]
    pub photo_source: String,
    #[serde(default = "default_photo_count")]
    pub photo_count: usize,
    #[serde(default = "default_photo_width")]
    pub photo_width: u32,
    #[serde(default = "default_photo_height")]
    pub photo_height: u32,
    /// How long a non-fatal notice stays on screen
    #[serde(default = "default_notice_timeout_ms")]
    pub notice_timeout_ms: u32,
    #[serde(default)]
    pub version: u32, // Settings schema version
}

fn default_photo_source() -> String {
    "https://source.unsplash.com/random".to_string()
}

fn default_photo_count() -> usize {
    4
}

fn default_photo_width() -> u32 {
    400
}

fn default_photo_height() -> u32 {
    600
}

fn default_notice_timeout_ms() -> u32 {
    4000
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            photo_source: default_photo_source(),
            photo_count: default_photo_count(),
            photo_width: default_photo_width(),
            photo_height: default_photo_height(),
            notice_timeout_ms: default_notice_timeout_ms(),
            version: 1,
        }
    }
}

const STORAGE_KEY: &str = "heartmatch_settings";

/// Global settings state
pub static SETTINGS: GlobalSignal<AppSettings> = Signal::global(AppSettings::default);

/// Load settings from localStorage, keeping defaults when nothing usable is stored
pub fn init_settings() {
    match LocalStorage::get::<AppSettings>(STORAGE_KEY) {
        Ok(settings) => {
            log::info!("Loaded settings from storage: {:?}", settings);
            *SETTINGS.write() = settings;
        }
        Err(e) => {
            log::info!("Using default settings ({})", e);
            *SETTINGS.write() = AppSettings::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_give_four_portrait_photos() {
        let settings = AppSettings::default();
        assert_eq!(settings.photo_count, 4);
        assert_eq!(settings.photo_width, 400);
        assert_eq!(settings.photo_height, 600);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let json = r#"{"photo_count": 6, "version": 1}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.photo_count, 6);
        assert_eq!(settings.photo_source, "https://source.unsplash.com/random");
        assert_eq!(settings.notice_timeout_ms, 4000);
    }

    #[test]
    fn test_roundtrip_keeps_custom_source() {
        let settings = AppSettings {
            photo_source: "https://img.example.com".to_string(),
            ..AppSettings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
