//! Player preferences
//!
//! Persisted in LocalStorage on the web and as a JSON file on native.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === HUD ===
    /// Health and stamina bars
    pub show_bars: bool,
    /// State/position/status text next to the player
    pub debug_overlay: bool,

    // === Input ===
    /// Use the on-screen gamepad even on non-touch devices
    pub force_touch_gamepad: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_bars: true,
            debug_overlay: true,
            force_touch_gamepad: false,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "compy_chase_settings";

    /// Whether the gamepad drives input for this device
    pub fn use_gamepad(&self, is_touch_device: bool) -> bool {
        is_touch_device || self.force_touch_gamepad
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str(&json) {
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
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Load settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Result<Self, crate::ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| crate::ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = serde_json::from_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings to a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), crate::ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| crate::ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
