//! Pure cursor-management logic shared across host integrations.
//!
//! `cursor-core` defines the canonical decision rules (image selection, the
//! mouse lock machine, controller detection) and exposes pure APIs that can be
//! reused by both the runtime and offline tools. Nothing here performs I/O or
//! touches a host cursor; the runtime crate drives these types against an
//! injected host boundary.
pub mod config;
pub mod controller;
pub mod image;
pub mod lock;
pub mod selection;

pub use config::{ConfigError, DeviceConfig, PollConfig};
pub use controller::{ControllerType, GamepadFlag, GamepadUpdate};
pub use image::{CursorImage, CursorImageSet, Hotspot};
pub use lock::{LockTransition, MouseLockState};
pub use selection::{CursorChoice, select_cursor};
