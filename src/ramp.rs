//! Sensitivity ramp state machine.
//!
//! Smoothly transitions the reticle sensitivity multiplier between two
//! values over a fixed duration. The ramp is advanced by an externally
//! driven `tick(dt)` once per frame; there is no internal clock and no
//! easing - interpolation is strictly linear.
//!
//! The multiplier is owned by the ramp: callers read it through
//! [`SensitivityRamp::multiplier`] and never write it directly, so a manual
//! set can never race an in-flight transition.

/// In-flight transition of the sensitivity multiplier.
#[derive(Debug, Clone, Copy)]
struct ActiveRamp {
    from: f64,
    to: f64,
    duration: f64,
    elapsed: f64,
}

/// Linear sensitivity ramp advanced by frame deltas.
///
/// States: Idle -> Ramping -> Idle. At most one transition is in flight;
/// starting a new one cancels the old one immediately with no
/// partial-completion effects.
#[derive(Debug)]
pub struct SensitivityRamp {
    multiplier: f64,
    active: Option<ActiveRamp>,
}

impl Default for SensitivityRamp {
    fn default() -> Self {
        Self::new()
    }
}

impl SensitivityRamp {
    /// Create an idle ramp with the neutral multiplier of 1.0.
    pub fn new() -> Self {
        Self {
            multiplier: 1.0,
            active: None,
        }
    }

    /// Current sensitivity multiplier.
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Whether a transition is currently in flight.
    pub fn is_ramping(&self) -> bool {
        self.active.is_some()
    }

    /// Start a transition from `from` to `to` over `duration` seconds.
    ///
    /// Cancels any in-flight transition on the spot; the multiplier jumps to
    /// `from` immediately. A non-positive duration completes immediately at
    /// `to` (the degenerate loop in the original shape would divide by zero).
    pub fn start(&mut self, from: f64, to: f64, duration: f64) {
        if duration <= 0.0 {
            self.multiplier = to;
            self.active = None;
            return;
        }

        self.multiplier = from;
        self.active = Some(ActiveRamp {
            from,
            to,
            duration,
            elapsed: 0.0,
        });
    }

    /// Advance the ramp by one frame delta.
    ///
    /// On completion the multiplier is pinned to `to` exactly, avoiding
    /// floating-point under/overshoot from the last interpolation step.
    pub fn tick(&mut self, dt: f64) {
        let Some(ramp) = self.active.as_mut() else {
            return;
        };

        ramp.elapsed += dt;
        if ramp.elapsed >= ramp.duration {
            self.multiplier = ramp.to;
            self.active = None;
        } else {
            let t = t_clamp(ramp.elapsed / ramp.duration);
            self.multiplier = lerp(ramp.from, ramp.to, t);
        }
    }
}

/// Linear interpolation.
fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Clamp value to 0-1 range.
fn t_clamp(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}
