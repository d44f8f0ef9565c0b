//! Asynchronous abstractions over the hosting engine's boundary.
//!
//! Runtime users plug in a [`CursorHost`] (the cursor-display API), an
//! [`ActivityProbe`] (the scene-object activity query), and optionally a
//! [`ControllerSource`] (the input layer's last-active-controller query) so
//! the pollers can run against a real engine, a windowing layer, or test
//! fixtures.
use async_trait::async_trait;

use cursor_core::{ControllerType, CursorImage, Hotspot};

/// Host-side mouse lock mode.
///
/// `Locked` confines the pointer; `None` leaves it free. Visibility is driven
/// separately through [`CursorHost::set_visible`] because hosts expose the two
/// as independent switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockMode {
    None,
    Locked,
}

/// The injected cursor-control boundary.
///
/// All operations are infallible: the engine calls they stand in for cannot
/// fail, they at worst do nothing on an unsupported platform.
#[async_trait]
pub trait CursorHost: Send + Sync {
    /// Sets the displayed cursor image and its hotspot.
    async fn apply_image(&self, image: CursorImage, hotspot: Hotspot);

    /// Shows or hides the cursor.
    async fn set_visible(&self, visible: bool);

    /// Sets the mouse lock mode.
    async fn set_lock_mode(&self, mode: LockMode);
}

/// Query over the watch list of scene objects.
#[async_trait]
pub trait ActivityProbe: Send + Sync {
    /// Returns the activity of each watched object at this instant.
    ///
    /// An empty snapshot means there is nothing to watch; the poller leaves
    /// the cursor alone for that tick.
    async fn scan(&self) -> Vec<bool>;
}

/// Query over the input layer for device detection.
#[async_trait]
pub trait ControllerSource: Send + Sync {
    /// Returns the controller the given player touched last, or `None` if no
    /// input has been seen yet.
    async fn last_active_controller(&self, player_id: &str) -> Option<ControllerType>;
}

/// A probe that always reports the same activity snapshot.
/// Useful for testing or for sessions with a fixed UI state.
pub struct StaticProbe(pub Vec<bool>);

#[async_trait]
impl ActivityProbe for StaticProbe {
    async fn scan(&self) -> Vec<bool> {
        self.0.clone()
    }
}
