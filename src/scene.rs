//! Scene-load events and per-scene canvas lookup.
//!
//! The cursor service survives scene transitions, but the reticle's parent
//! canvas belongs to the scene and must be re-resolved after every load.
//! Hosts publish [`SceneLoaded`] through [`SceneEvents`]; the service holds
//! one persistent subscription for its lifetime instead of re-registering a
//! one-shot callback after every load.

use crossbeam_channel::{unbounded, Receiver, Sender};
use std::collections::HashMap;

use crate::coord::{CanvasSpace, Size};

/// Tag identifying the scene object that parents the reticle canvas.
pub const CURSOR_HOLDER_TAG: &str = "CursorHolder";

/// Notification that a scene finished loading.
#[derive(Debug, Clone)]
pub struct SceneLoaded {
    /// Name of the loaded scene.
    pub name: String,
}

impl SceneLoaded {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Broadcast hub for scene-load notifications.
///
/// Each subscriber gets its own channel; dropped receivers are pruned on
/// the next publish.
#[derive(Default)]
pub struct SceneEvents {
    subscribers: Vec<Sender<SceneLoaded>>,
}

impl SceneEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to all future scene loads.
    pub fn subscribe(&mut self) -> Receiver<SceneLoaded> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Publish a scene-load notification to every live subscriber.
    pub fn publish(&mut self, event: SceneLoaded) {
        log::debug!("[SCENE] loaded '{}'", event.name);
        self.subscribers
            .retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Number of live subscriptions (after the last publish pruned).
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

/// Tag-based lookup of the reticle canvas in the current scene.
///
/// Implemented by the host over its scene graph; returns the canvas size of
/// the object carrying the given tag, or `None` when no such object exists
/// in the current scene.
pub trait CanvasLocator {
    fn locate(&self, tag: &str) -> Option<Size<CanvasSpace>>;
}

/// In-memory locator for tests and simple hosts.
#[derive(Default)]
pub struct StaticCanvasLocator {
    canvases: HashMap<String, Size<CanvasSpace>>,
}

impl StaticCanvasLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canvas under a tag, replacing any previous entry.
    pub fn insert(&mut self, tag: impl Into<String>, size: Size<CanvasSpace>) {
        self.canvases.insert(tag.into(), size);
    }

    /// Remove a tagged canvas (scene no longer provides it).
    pub fn remove(&mut self, tag: &str) {
        self.canvases.remove(tag);
    }
}

impl CanvasLocator for StaticCanvasLocator {
    fn locate(&self, tag: &str) -> Option<Size<CanvasSpace>> {
        self.canvases.get(tag).copied()
    }
}
