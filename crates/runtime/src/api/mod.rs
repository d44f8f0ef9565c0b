//! Public API surface of the cursor runtime.
mod errors;
mod events;
mod handle;
mod providers;

pub use errors::{Result, RuntimeError};
pub use events::CursorEvent;
pub use handle::{CursorHandle, CursorState};
pub use providers::{ActivityProbe, ControllerSource, CursorHost, LockMode, StaticProbe};
