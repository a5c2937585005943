//! Sprite-proxy cursor and reticle tracking.
//!
//! cursorkit replaces the OS cursor with a sprite-based proxy anchored to a
//! fixed reference canvas, and optionally drives a crosshair reticle that
//! accumulates raw mouse-delta input at a smoothly-rampable sensitivity.
//!
//! - `manager`: the tick-driven [`CursorManager`] service
//! - `proxy`: proxy cursor state and pointer lock modes
//! - `reticle`: target reticle tracking and accumulation
//! - `ramp`: the linear sensitivity ramp state machine
//! - `coord`: phantom-typed viewport/canvas coordinate spaces
//! - `scene`: scene-load events and tag-based canvas lookup
//! - `input`: pointer sampling (trait seam plus a `device_query` backend)
//!
//! The service is single-threaded and cooperative: the host calls
//! [`CursorManager::tick`] once per rendered frame from its main thread and
//! renders from the returned state. Nothing here draws or touches the real
//! OS pointer; hosts apply [`proxy::PointerLockMode`] and blit the resolved
//! sprite themselves.

pub mod config;
pub mod coord;
pub mod error;
pub mod input;
pub mod manager;
pub mod proxy;
pub mod ramp;
pub mod reticle;
pub mod scene;
pub mod sprite;

// Re-export commonly used types
pub use config::{cursor_config, set_cursor_config, CursorConfig};
pub use coord::{CanvasSpace, Coord, Size, ViewportSpace, ViewportUVSpace};
pub use error::{CursorError, CursorResult, OptionExt, ResultExt};
pub use input::{DevicePointerSource, PointerSample, PointerSource};
pub use manager::CursorManager;
pub use proxy::{PointerLockMode, ProxyCursor};
pub use ramp::SensitivityRamp;
pub use reticle::Reticle;
pub use scene::{CanvasLocator, SceneEvents, SceneLoaded, StaticCanvasLocator, CURSOR_HOLDER_TAG};
pub use sprite::{CursorSpriteKind, ResolvedSprite};
