//! Host presentation preferences
//!
//! None of these touch the simulation. The page may pass them in as JSON;
//! nothing is persisted.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Engine loop volume (0.0 - 1.0)
    pub engine_volume: f32,

    // === HUD ===
    /// Show the speed readout while running
    pub show_speed: bool,

    // === Accessibility ===
    /// Reduced motion (no insane-mode flash)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 1.0,
            engine_volume: 0.3,
            show_speed: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Parse host-provided settings, falling back to defaults
    pub fn from_json_or_default(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => settings.clamped(),
            Err(e) => {
                log::warn!("Using default settings: {}", e);
                Self::default()
            }
        }
    }

    fn clamped(mut self) -> Self {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.engine_volume = self.engine_volume.clamp(0.0, 1.0);
        self
    }

    /// Gain for the engine loop
    pub fn effective_engine_volume(&self) -> f32 {
        self.master_volume * self.engine_volume
    }

    /// Effective insane-mode flash (respects reduced_motion)
    pub fn effective_flash(&self) -> bool {
        !self.reduced_motion
    }
}
