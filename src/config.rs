//! Cursor configuration.
//!
//! Consolidates the cursor tunables into a single typed struct with
//! thread-safe access via RwLock. Hosts can batch-update all settings
//! atomically instead of poking individual values.

use lazy_static::lazy_static;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::coord::{CanvasSpace, Size, ViewportSpace};
use crate::error::CursorResult;

lazy_static! {
    /// Global cursor configuration.
    pub static ref CURSOR_CONFIG: RwLock<CursorConfig> = RwLock::new(CursorConfig::default());
}

/// Centralized cursor configuration.
///
/// All cursor tunables in one place, updated atomically via RwLock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorConfig {
    /// Reference canvas width the proxy cursor is anchored to.
    pub reference_width: f64,

    /// Reference canvas height the proxy cursor is anchored to.
    pub reference_height: f64,

    /// Base reticle speed on the X axis, in canvas units per mouse-delta
    /// unit at the simulated 60Hz tick rate.
    pub target_speed_x: f64,

    /// Base reticle speed on the Y axis.
    pub target_speed_y: f64,

    /// Width of the default cursor sprite, in canvas units.
    pub sprite_width: f64,

    /// Height of the default cursor sprite, in canvas units.
    pub sprite_height: f64,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            reference_width: 1920.0,
            reference_height: 1080.0,
            target_speed_x: 4.0,
            target_speed_y: 2.5,
            sprite_width: 20.0,
            sprite_height: 20.0,
        }
    }
}

impl CursorConfig {
    /// Validate and clamp settings to acceptable ranges.
    pub fn validate(&mut self) {
        self.reference_width = self.reference_width.max(1.0);
        self.reference_height = self.reference_height.max(1.0);
        self.target_speed_x = self.target_speed_x.max(0.0);
        self.target_speed_y = self.target_speed_y.max(0.0);
        self.sprite_width = self.sprite_width.max(1.0);
        self.sprite_height = self.sprite_height.max(1.0);
    }

    /// Reset all settings to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Reference canvas resolution as a typed size.
    pub fn reference_resolution(&self) -> Size<CanvasSpace> {
        Size::new(self.reference_width, self.reference_height)
    }

    /// Reference resolution viewed as a viewport size (for defaults before
    /// the first tick reports the real viewport).
    pub fn reference_viewport(&self) -> Size<ViewportSpace> {
        Size::new(self.reference_width, self.reference_height)
    }

    /// Base reticle speed vector.
    pub fn target_speed(&self) -> (f64, f64) {
        (self.target_speed_x, self.target_speed_y)
    }

    /// Default cursor sprite size.
    pub fn sprite_size(&self) -> Size<CanvasSpace> {
        Size::new(self.sprite_width, self.sprite_height)
    }

    /// Load configuration from a JSON file, clamping out-of-range values.
    pub fn load_from_file(path: &Path) -> CursorResult<Self> {
        let file = std::fs::File::open(path)?;
        let mut config: Self = serde_json::from_reader(file)?;
        config.validate();
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save_to_file(&self, path: &Path) -> CursorResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Snapshot of the current global configuration.
pub fn cursor_config() -> CursorConfig {
    CURSOR_CONFIG.read().clone()
}

/// Replace the global configuration at once (after validation).
pub fn set_cursor_config(mut config: CursorConfig) {
    config.validate();
    log::debug!("[CURSOR_CONFIG] set_cursor_config({:?})", config);
    *CURSOR_CONFIG.write() = config;
}
