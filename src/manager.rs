//! The cursor service.
//!
//! [`CursorManager`] owns the proxy cursor, the target reticle and the
//! sensitivity ramp, and is driven by a single `tick(...)` per rendered
//! frame on the host's main thread. It is an explicitly constructed,
//! dependency-injected instance: the composition root builds one, hands it
//! a canvas locator and a scene-load subscription, and exposes it to
//! callers by reference. There is no static accessor.

use crossbeam_channel::Receiver;

use crate::config::{cursor_config, CursorConfig};
use crate::coord::{CanvasSpace, Coord, Size, ViewportSpace};
use crate::error::{CursorError, CursorResult};
use crate::input::{PointerSample, PointerSource};
use crate::proxy::ProxyCursor;
use crate::ramp::SensitivityRamp;
use crate::reticle::Reticle;
use crate::scene::{CanvasLocator, SceneLoaded, CURSOR_HOLDER_TAG};
use crate::sprite::CursorSpriteKind;

/// Sprite-proxy cursor and reticle tracking service.
pub struct CursorManager {
    config: CursorConfig,
    proxy: ProxyCursor,
    reticle: Reticle,
    ramp: SensitivityRamp,
    locator: Box<dyn CanvasLocator>,
    scene_rx: Receiver<SceneLoaded>,
    viewport: Size<ViewportSpace>,
}

impl CursorManager {
    /// Build the service from the global configuration snapshot.
    ///
    /// `scene_rx` is the service's one persistent scene-load subscription,
    /// obtained from [`crate::scene::SceneEvents::subscribe`]; it is drained
    /// on every tick for the lifetime of the service.
    pub fn new(locator: Box<dyn CanvasLocator>, scene_rx: Receiver<SceneLoaded>) -> Self {
        Self::with_config(cursor_config(), locator, scene_rx)
    }

    /// Build the service with an explicit configuration.
    pub fn with_config(
        config: CursorConfig,
        locator: Box<dyn CanvasLocator>,
        scene_rx: Receiver<SceneLoaded>,
    ) -> Self {
        let reference = config.reference_resolution();
        let viewport = config.reference_viewport();
        let mut manager = Self {
            proxy: ProxyCursor::new(reference),
            reticle: Reticle::new(config.target_speed()),
            ramp: SensitivityRamp::new(),
            locator,
            scene_rx,
            viewport,
            config,
        };
        // Eager resolution; a scene without the holder just logs and leaves
        // tracking unavailable until a later scene provides one.
        manager.resolve_canvas();
        manager
    }

    /// Advance the service by one frame.
    ///
    /// Drains pending scene loads (re-resolving the reticle canvas), steps
    /// the sensitivity ramp, accumulates reticle movement, and mirrors the
    /// absolute pointer position into the proxy while confined.
    pub fn tick(&mut self, sample: PointerSample, viewport: Size<ViewportSpace>, dt: f64) {
        while let Ok(event) = self.scene_rx.try_recv() {
            log::debug!("[CURSOR] scene '{}' loaded, re-resolving canvas", event.name);
            self.resolve_canvas();
        }

        self.viewport = viewport;
        self.ramp.tick(dt);
        self.reticle
            .accumulate(sample.delta, self.ramp.multiplier(), dt);
        self.proxy.sync_to_pointer(sample.position, viewport);
    }

    /// Sample a pointer source and advance one frame.
    pub fn tick_from(
        &mut self,
        source: &mut dyn PointerSource,
        viewport: Size<ViewportSpace>,
        dt: f64,
    ) {
        let sample = source.sample();
        self.tick(sample, viewport, dt);
    }

    /// Toggle reticle tracking, optionally snapping it to a position.
    ///
    /// Enabling fails (logged, non-fatal) while no canvas is resolved;
    /// tracking stays disabled and the host carries on.
    pub fn set_target_tracking(
        &mut self,
        enabled: bool,
        pos: Option<Coord<CanvasSpace>>,
    ) -> CursorResult<()> {
        let result = self.reticle.set_tracking(enabled, pos);
        if let Err(e) = &result {
            log::error!("[CURSOR] cannot enable reticle tracking: {}", e);
        }
        result
    }

    /// Ramp the reticle sensitivity from `from` to `to` over `over_secs`.
    ///
    /// Replaces any in-flight ramp immediately.
    pub fn change_target_sensitivity(&mut self, from: f64, to: f64, over_secs: f64) {
        self.ramp.start(from, to, over_secs);
    }

    /// Reticle position converted to viewport pixel coordinates.
    pub fn target_pos_on_screen(&self) -> CursorResult<Coord<ViewportSpace>> {
        let canvas = self
            .reticle
            .canvas()
            .ok_or(CursorError::CanvasNotResolved)?;
        Ok(self.reticle.position().to_viewport(self.viewport, canvas))
    }

    /// Show or hide the proxy cursor and apply a sprite kind.
    pub fn set_cursor_visibility(&mut self, visible: bool, sprite: CursorSpriteKind) {
        self.proxy.set_visibility(visible, sprite);
    }

    /// Current sensitivity multiplier.
    pub fn sensitivity(&self) -> f64 {
        self.ramp.multiplier()
    }

    /// Proxy cursor state, for hosts rendering the sprite.
    pub fn proxy(&self) -> &ProxyCursor {
        &self.proxy
    }

    /// Reticle state, for hosts rendering the crosshair.
    pub fn reticle(&self) -> &Reticle {
        &self.reticle
    }

    fn resolve_canvas(&mut self) {
        match self.locator.locate(CURSOR_HOLDER_TAG) {
            Some(size) => {
                log::debug!(
                    "[CURSOR] reticle canvas resolved: {}x{}",
                    size.width,
                    size.height
                );
                self.reticle.set_canvas(size);
            },
            None => {
                let err = CursorError::CanvasHolderNotFound {
                    tag: CURSOR_HOLDER_TAG.to_string(),
                };
                log::error!("[CURSOR] {}", err);
            },
        }
    }

    /// Configuration snapshot the service was built with.
    pub fn config(&self) -> &CursorConfig {
        &self.config
    }
}
