//! Runner settings
//!
//! Persisted as JSON next to the binary's working directory. The simulation
//! itself takes no configuration; these only shape the host around it.

use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, TARGET_FPS};
use crate::platform::Viewport;

/// Runner settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Playfield width in pixels
    pub width: f32,
    /// Playfield height in pixels
    pub height: f32,
    /// Frames (and ticks) per second
    pub target_fps: u32,
    /// Fixed RNG seed; random when absent
    pub seed: Option<u64>,

    // === Headless runner ===
    /// Stop after this many frames even if the player survives
    pub max_frames: u64,
    /// Drive the player with the scripted autoplay input
    pub autoplay: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            target_fps: TARGET_FPS,
            seed: None,
            max_frames: 3600,
            autoplay: true,
        }
    }
}

impl Settings {
    /// Settings file name
    const STORAGE_KEY: &'static str = "bullet_barrage_settings.json";

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Seconds per frame
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }

    /// Parse settings; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from the working directory
    ///
    /// Writes the defaults out on first run so there is a file to edit.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::STORAGE_KEY))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No {}, writing default settings", path.display());
                let settings = Self::default();
                settings.save_to(path);
                return settings;
            }
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn save_to(&self, path: &Path) {
        match self.to_json() {
            Ok(json) => match std::fs::write(path, json) {
                Ok(()) => log::info!("Settings saved to {}", path.display()),
                Err(e) => log::warn!("Could not write {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not serialize settings: {}", e),
        }
    }

    /// Web stubs
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }
}
