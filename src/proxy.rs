//! Proxy cursor state.
//!
//! The proxy cursor is the sprite that stands in for the hidden OS pointer.
//! While the pointer is confined, the proxy's canvas position mirrors the
//! absolute pointer position scaled into the reference resolution, so the
//! sprite's anchored position is independent of the runtime viewport size.

use crate::coord::{CanvasSpace, Coord, Size, ViewportSpace};
use crate::sprite::CursorSpriteKind;

/// OS pointer lock behavior the host should apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerLockMode {
    /// Pointer moves freely but is visually kept within the window.
    Confined,
    /// Pointer is locked to the window center.
    Locked,
}

/// The sprite-based replacement cursor.
#[derive(Debug)]
pub struct ProxyCursor {
    position: Coord<CanvasSpace>,
    visible: bool,
    sprite: CursorSpriteKind,
    lock_mode: PointerLockMode,
    reference: Size<CanvasSpace>,
}

impl ProxyCursor {
    /// Create a hidden proxy anchored to the given reference canvas.
    pub fn new(reference: Size<CanvasSpace>) -> Self {
        Self {
            position: Coord::new(0.0, 0.0),
            visible: false,
            sprite: CursorSpriteKind::Invalid,
            lock_mode: PointerLockMode::Locked,
            reference,
        }
    }

    /// Anchored position within the reference canvas.
    pub fn position(&self) -> Coord<CanvasSpace> {
        self.position
    }

    /// Whether the proxy sprite is active.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Current sprite kind.
    pub fn sprite_kind(&self) -> CursorSpriteKind {
        self.sprite
    }

    /// Lock mode the host should apply to the OS pointer.
    pub fn lock_mode(&self) -> PointerLockMode {
        self.lock_mode
    }

    /// The native pointer image stays hidden in both lock modes; the proxy
    /// sprite is the only visible indicator.
    pub fn native_pointer_visible(&self) -> bool {
        false
    }

    /// Show or hide the proxy and apply a sprite kind.
    ///
    /// Visible confines the pointer; hidden locks it to the window center.
    pub fn set_visibility(&mut self, visible: bool, sprite: CursorSpriteKind) {
        self.lock_mode = if visible {
            PointerLockMode::Confined
        } else {
            PointerLockMode::Locked
        };
        self.visible = visible;
        self.sprite = sprite;
    }

    /// Sync the proxy to the absolute pointer position.
    ///
    /// Only applies while confined; a locked pointer reports the window
    /// center and must not drag the proxy there.
    pub fn sync_to_pointer(
        &mut self,
        pointer: Coord<ViewportSpace>,
        viewport: Size<ViewportSpace>,
    ) {
        if self.lock_mode == PointerLockMode::Confined {
            self.position = pointer.to_canvas(viewport, self.reference);
        }
    }
}
