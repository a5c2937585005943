//! Cursor sprite kinds and asset resolution.
//!
//! Maps sprite kinds to the asset names and sizes the host should render.
//! The crate itself never draws anything; hosts resolve the kind and blit
//! the named asset at the proxy cursor's canvas position.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config;
use crate::coord::{CanvasSpace, Size};

/// Information about a resolved cursor sprite.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedSprite {
    /// Asset name the host should render for this sprite.
    pub asset: &'static str,
    /// Sprite size in canvas units.
    pub size: Size<CanvasSpace>,
}

/// Kind of sprite the proxy cursor displays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CursorSpriteKind {
    /// No sprite assigned yet; nothing to render.
    #[default]
    Invalid,
    /// The standard pointer sprite.
    Default,
}

impl CursorSpriteKind {
    /// Resolve the sprite kind to its asset and size.
    ///
    /// Returns `None` for `Invalid`, which has no renderable asset. The
    /// `Default` size comes from the global config (20x20 canvas units
    /// unless overridden).
    pub fn resolve(&self) -> Option<ResolvedSprite> {
        match self {
            CursorSpriteKind::Invalid => None,
            CursorSpriteKind::Default => Some(ResolvedSprite {
                asset: "cursor/default",
                size: config::cursor_config().sprite_size(),
            }),
        }
    }
}

impl fmt::Display for CursorSpriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CursorSpriteKind::Invalid => write!(f, "Invalid"),
            CursorSpriteKind::Default => write!(f, "Default"),
        }
    }
}
