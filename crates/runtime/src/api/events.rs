//! Events emitted by the pollers for embedders to observe.
//!
//! Consumers subscribe to [`CursorEvent`] to react to cursor changes without
//! blocking the worker loop.
use cursor_core::{CursorChoice, CursorImage, MouseLockState};

/// Events emitted by the runtime while polling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CursorEvent {
    /// A poll tick or force call applied a cursor image.
    ImageApplied {
        choice: CursorChoice,
        image: CursorImage,
    },
    /// The mouse lock machine transitioned.
    LockChanged { state: MouseLockState },
    /// The gamepad-connected flag flipped.
    GamepadChanged { connected: bool },
}
