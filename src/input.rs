//! Pointer input sampling.
//!
//! The service consumes one [`PointerSample`] per tick: the absolute pointer
//! position (for proxy cursor syncing) and the raw movement delta since the
//! previous tick (for reticle accumulation). [`PointerSource`] is the seam
//! hosts and tests implement; [`DevicePointerSource`] polls the OS pointer
//! via `device_query`.

use device_query::{DeviceQuery, DeviceState};

use crate::coord::{Coord, ViewportSpace};

/// One tick's worth of pointer input.
#[derive(Debug, Clone, Copy)]
pub struct PointerSample {
    /// Absolute pointer position in viewport pixels.
    pub position: Coord<ViewportSpace>,
    /// Raw movement delta since the previous sample, in pointer units.
    pub delta: (f64, f64),
}

impl PointerSample {
    pub fn new(position: Coord<ViewportSpace>, delta: (f64, f64)) -> Self {
        Self { position, delta }
    }

    /// A sample with no movement at the given position.
    pub fn still(position: Coord<ViewportSpace>) -> Self {
        Self {
            position,
            delta: (0.0, 0.0),
        }
    }
}

/// Source of per-tick pointer samples.
pub trait PointerSource {
    /// Sample the pointer once. Called once per tick from the main thread.
    fn sample(&mut self) -> PointerSample;
}

/// Pointer source polling absolute OS coordinates via `device_query`.
///
/// Deltas are derived by differencing consecutive polls; the first sample
/// reports zero movement.
pub struct DevicePointerSource {
    device_state: DeviceState,
    last: Option<(i32, i32)>,
}

impl DevicePointerSource {
    pub fn new() -> Self {
        Self {
            device_state: DeviceState::new(),
            last: None,
        }
    }
}

impl Default for DevicePointerSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerSource for DevicePointerSource {
    fn sample(&mut self) -> PointerSample {
        let coords = self.device_state.get_mouse().coords;

        let delta = match self.last {
            Some((lx, ly)) => ((coords.0 - lx) as f64, (coords.1 - ly) as f64),
            None => (0.0, 0.0),
        };
        self.last = Some(coords);

        PointerSample {
            position: Coord::from_i32(coords.0, coords.1),
            delta,
        }
    }
}
