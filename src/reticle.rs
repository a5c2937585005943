//! Target reticle tracking.
//!
//! The reticle is an optional crosshair that moves under accumulated raw
//! mouse-delta input instead of mirroring the pointer. Accumulation is
//! time-normalized: base speed is expressed per simulated 60Hz tick and
//! scaled by the real frame delta, so reticle speed does not depend on the
//! host's frame rate.

use crate::coord::{CanvasSpace, Coord, Size};
use crate::error::{CursorError, CursorResult};

/// Tick rate the base speed vector is calibrated against.
const SIMULATED_TICK_RATE: f64 = 60.0;

/// Crosshair reticle anchored to a per-scene canvas.
#[derive(Debug)]
pub struct Reticle {
    position: Coord<CanvasSpace>,
    tracking: bool,
    visible: bool,
    canvas: Option<Size<CanvasSpace>>,
    base_speed: (f64, f64),
}

impl Reticle {
    /// Create an idle reticle with the given base speed vector.
    pub fn new(base_speed: (f64, f64)) -> Self {
        Self {
            position: Coord::new(0.0, 0.0),
            tracking: false,
            visible: false,
            canvas: None,
            base_speed,
        }
    }

    /// Anchored position within the reticle's canvas.
    pub fn position(&self) -> Coord<CanvasSpace> {
        self.position
    }

    /// Whether per-tick input currently accumulates into the position.
    pub fn tracking(&self) -> bool {
        self.tracking
    }

    /// Whether the reticle visual is active.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Size of the resolved canvas, if any.
    pub fn canvas(&self) -> Option<Size<CanvasSpace>> {
        self.canvas
    }

    /// Attach the reticle to a (re-)resolved canvas.
    pub fn set_canvas(&mut self, canvas: Size<CanvasSpace>) {
        self.canvas = Some(canvas);
    }

    /// Toggle tracking.
    ///
    /// Enabling requires a resolved canvas and snaps the reticle to `pos`,
    /// or to the canvas center when no position is supplied. Disabling only
    /// drops the tracking and visibility flags; the position is untouched.
    pub fn set_tracking(
        &mut self,
        enabled: bool,
        pos: Option<Coord<CanvasSpace>>,
    ) -> CursorResult<()> {
        if !enabled {
            self.tracking = false;
            self.visible = false;
            return Ok(());
        }

        let canvas = self.canvas.ok_or(CursorError::CanvasNotResolved)?;
        self.tracking = true;
        self.visible = true;
        self.position = pos.unwrap_or_else(|| canvas.center());
        Ok(())
    }

    /// Accumulate one tick of raw pointer delta into the position.
    ///
    /// No-op unless tracking. Movement is `delta * base_speed * multiplier`,
    /// normalized by `dt` against the simulated tick rate.
    pub fn accumulate(&mut self, delta: (f64, f64), multiplier: f64, dt: f64) {
        if !self.tracking {
            return;
        }

        let scale = multiplier * dt * SIMULATED_TICK_RATE;
        self.position = self.position
            + Coord::new(
                delta.0 * self.base_speed.0 * scale,
                delta.1 * self.base_speed.1 * scale,
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn reticle_with_canvas() -> Reticle {
        let mut reticle = Reticle::new((4.0, 2.5));
        reticle.set_canvas(Size::new(1000.0, 800.0));
        reticle
    }

    #[test]
    fn test_enable_without_canvas_fails() {
        let mut reticle = Reticle::new((4.0, 2.5));
        let err = reticle.set_tracking(true, None).unwrap_err();
        assert!(matches!(err, CursorError::CanvasNotResolved));
        assert!(!reticle.tracking());
        assert!(!reticle.visible());
    }

    #[test]
    fn test_enable_defaults_to_canvas_center() {
        let mut reticle = reticle_with_canvas();
        reticle.set_tracking(true, None).unwrap();
        assert!(reticle.tracking());
        assert!(reticle.visible());
        assert_eq!(reticle.position().as_tuple(), (500.0, 400.0));
    }

    #[test]
    fn test_enable_with_explicit_position() {
        let mut reticle = reticle_with_canvas();
        reticle.set_tracking(true, None).unwrap();
        reticle.accumulate((30.0, -12.0), 1.0, FRAME);

        // Re-enabling with an explicit position ignores whatever accumulated.
        reticle.set_tracking(false, None).unwrap();
        reticle
            .set_tracking(true, Some(Coord::new(123.0, 456.0)))
            .unwrap();
        assert_eq!(reticle.position().as_tuple(), (123.0, 456.0));
    }

    #[test]
    fn test_disable_keeps_position() {
        let mut reticle = reticle_with_canvas();
        reticle.set_tracking(true, None).unwrap();
        reticle.accumulate((10.0, 10.0), 1.0, FRAME);
        let pos = reticle.position();

        reticle.set_tracking(false, None).unwrap();
        assert!(!reticle.tracking());
        assert!(!reticle.visible());
        assert_eq!(reticle.position().as_tuple(), pos.as_tuple());
    }

    #[test]
    fn test_accumulation_scales_by_base_speed_and_multiplier() {
        let mut reticle = reticle_with_canvas();
        reticle.set_tracking(true, None).unwrap();

        // One 60Hz frame: scale factor dt * 60 == 1, so movement is exactly
        // delta * base_speed * multiplier.
        reticle.accumulate((2.0, 4.0), 0.5, FRAME);
        assert!((reticle.position().x - (500.0 + 2.0 * 4.0 * 0.5)).abs() < 1e-9);
        assert!((reticle.position().y - (400.0 + 4.0 * 2.5 * 0.5)).abs() < 1e-9);
    }

    #[test]
    fn test_accumulation_scales_with_dt() {
        // Movement is normalized by the frame delta: the same per-tick input
        // at half the frame rate covers twice the distance per tick.
        let mut fast = reticle_with_canvas();
        fast.set_tracking(true, None).unwrap();
        fast.accumulate((1.0, 1.0), 1.0, FRAME);

        let mut slow = reticle_with_canvas();
        slow.set_tracking(true, None).unwrap();
        slow.accumulate((1.0, 1.0), 1.0, FRAME * 2.0);

        let fast_dx = fast.position().x - 500.0;
        let slow_dx = slow.position().x - 500.0;
        assert!((slow_dx - fast_dx * 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_accumulation_while_disabled() {
        let mut reticle = reticle_with_canvas();
        reticle.accumulate((100.0, 100.0), 1.0, FRAME);
        assert_eq!(reticle.position().as_tuple(), (0.0, 0.0));
    }
}
