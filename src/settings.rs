//! Frontend preferences
//!
//! Volumes and overlay options read by frontends; the simulation never
//! looks at these. Persisted as JSON next to the working directory; a
//! missing or unreadable file falls back to defaults and is never fatal.

use serde::{Deserialize, Serialize};

/// Presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Show the FPS counter
    pub show_fps: bool,
    /// Integer upscale applied to the 480x600 surface
    pub window_scale: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 0.2,
            music_volume: 0.4,
            show_fps: false,
            window_scale: 1,
        }
    }
}

impl Settings {
    const FILE: &'static str = "settings.json";

    /// Load from disk, falling back to defaults on any error
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::FILE) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::FILE);
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed {}: {err}", Self::FILE);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Best-effort save; failures are logged and ignored
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(Self::FILE, json) {
                    log::warn!("Could not write {}: {err}", Self::FILE);
                }
            }
            Err(err) => log::warn!("Could not serialize settings: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let settings = Settings::default();
        assert!(settings.master_volume > 0.0 && settings.master_volume <= 1.0);
        assert_eq!(settings.window_scale, 1);
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.show_fps = true;
        settings.sfx_volume = 0.5;
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert!(back.show_fps);
        assert_eq!(back.sfx_volume, 0.5);
    }
}
