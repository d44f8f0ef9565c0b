//! Cloneable façade for issuing commands to the running poller.
//!
//! [`CursorHandle`] hides channel plumbing and offers async helpers for
//! forcing cursor images, driving the lock machine, and streaming events.
use tokio::sync::{broadcast, mpsc, oneshot};

use cursor_core::{CursorChoice, MouseLockState};

use super::errors::{Result, RuntimeError};
use super::events::CursorEvent;
use crate::workers::Command;

/// Read-only snapshot of the poller's cursor state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorState {
    /// The most recently applied image choice, the "current default" a
    /// [`CursorHandle::force_default`] call replays.
    pub current: CursorChoice,
    pub lock: MouseLockState,
    pub gamepad_connected: bool,
}

/// Client-facing handle to interact with the poller.
#[derive(Clone, Debug)]
pub struct CursorHandle {
    command_tx: mpsc::Sender<Command>,
    event_tx: broadcast::Sender<CursorEvent>,
}

impl CursorHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_tx: broadcast::Sender<CursorEvent>,
    ) -> Self {
        Self {
            command_tx,
            event_tx,
        }
    }

    /// Unlock the mouse and re-apply the current default image for the scene.
    pub async fn force_default(&self) -> Result<()> {
        self.send(|reply| Command::ForceDefault { reply }).await
    }

    /// Unlock the mouse and apply the UI image immediately.
    pub async fn force_ui(&self) -> Result<()> {
        self.send(|reply| Command::ForceUi { reply }).await
    }

    /// Unlock the mouse and apply the overworld image immediately.
    pub async fn force_overworld(&self) -> Result<()> {
        self.send(|reply| Command::ForceOverworld { reply }).await
    }

    /// Hide the cursor and confine the pointer.
    pub async fn lock_mouse(&self) -> Result<()> {
        self.send(|reply| Command::LockMouse { reply }).await
    }

    /// Free the pointer and show the cursor.
    pub async fn unlock_mouse(&self) -> Result<()> {
        self.send(|reply| Command::UnlockMouse { reply }).await
    }

    /// Query the current cursor state (read-only snapshot).
    pub async fn query_state(&self) -> Result<CursorState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryState { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Subscribe to cursor events.
    pub fn subscribe_events(&self) -> broadcast::Receiver<CursorEvent> {
        self.event_tx.subscribe()
    }

    async fn send(&self, make: impl FnOnce(oneshot::Sender<()>) -> Command) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(make(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }
}
