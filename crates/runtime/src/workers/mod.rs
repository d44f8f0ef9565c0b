//! Background polling tasks.
mod device;
mod poller;
mod session;

pub(crate) use device::DeviceWorker;
pub(crate) use poller::PollerWorker;
pub(crate) use session::CursorSession;

use tokio::sync::oneshot;

use crate::api::CursorState;

/// Commands that can be sent to a polling worker.
pub(crate) enum Command {
    /// Unlock the mouse and re-apply the current default image.
    ForceDefault { reply: oneshot::Sender<()> },
    /// Unlock the mouse and apply the UI image.
    ForceUi { reply: oneshot::Sender<()> },
    /// Unlock the mouse and apply the overworld image.
    ForceOverworld { reply: oneshot::Sender<()> },
    /// Hide the cursor and confine the pointer.
    LockMouse { reply: oneshot::Sender<()> },
    /// Free the pointer and show the cursor.
    UnlockMouse { reply: oneshot::Sender<()> },
    /// Query the current cursor state (read-only).
    QueryState { reply: oneshot::Sender<CursorState> },
}
