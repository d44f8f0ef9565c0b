//! Cursor state shared by the two polling workers.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, info};

use cursor_core::{CursorChoice, CursorImageSet, LockTransition, MouseLockState};

use crate::api::{CursorEvent, CursorHost, CursorState, LockMode};
use crate::workers::Command;

/// Owns the image set, the lock machine, and the host connection.
///
/// Workers fold their tick decisions through this type so that every host
/// call goes through one place and every change is published on the event
/// channel.
pub(crate) struct CursorSession {
    host: Arc<dyn CursorHost>,
    images: CursorImageSet,
    /// Most recently applied choice; replayed by `ForceDefault`.
    current: CursorChoice,
    lock: MouseLockState,
    gamepad_connected: bool,
    event_tx: broadcast::Sender<CursorEvent>,
}

impl CursorSession {
    pub(crate) fn new(
        host: Arc<dyn CursorHost>,
        images: CursorImageSet,
        event_tx: broadcast::Sender<CursorEvent>,
    ) -> Self {
        Self {
            host,
            images,
            current: CursorChoice::Overworld,
            lock: MouseLockState::UnlockedVisible,
            gamepad_connected: false,
            event_tx,
        }
    }

    pub(crate) fn state(&self) -> CursorState {
        CursorState {
            current: self.current,
            lock: self.lock,
            gamepad_connected: self.gamepad_connected,
        }
    }

    pub(crate) fn set_gamepad_connected(&mut self, connected: bool) {
        self.gamepad_connected = connected;
        self.publish(CursorEvent::GamepadChanged { connected });
    }

    pub(crate) fn gamepad_connected(&self) -> bool {
        self.gamepad_connected
    }

    /// Applies the choice's image to the host and remembers it as the scene's
    /// current default.
    pub(crate) async fn apply_choice(&mut self, choice: CursorChoice) {
        let image = self.images.image_for(choice);
        self.host.apply_image(image, self.images.hotspot).await;
        self.current = choice;
        self.publish(CursorEvent::ImageApplied { choice, image });
    }

    /// Drives the lock machine to locked-hidden, telling the host only when
    /// the state actually changes.
    pub(crate) async fn lock_mouse(&mut self) {
        if self.lock.lock() == LockTransition::Locked {
            self.host.set_visible(false).await;
            self.host.set_lock_mode(LockMode::Locked).await;
            info!(state = ?self.lock, "mouse lock changed");
            self.publish(CursorEvent::LockChanged { state: self.lock });
        }
    }

    /// Drives the lock machine to unlocked-visible.
    pub(crate) async fn unlock_mouse(&mut self) {
        if self.lock.unlock() == LockTransition::Unlocked {
            self.host.set_lock_mode(LockMode::None).await;
            self.host.set_visible(true).await;
            info!(state = ?self.lock, "mouse lock changed");
            self.publish(CursorEvent::LockChanged { state: self.lock });
        }
    }

    /// Services one command from the handle.
    pub(crate) async fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::ForceDefault { reply } => {
                self.unlock_mouse().await;
                self.apply_choice(self.current).await;
                if reply.send(()).is_err() {
                    debug!("ForceDefault reply channel closed (caller dropped)");
                }
            }
            Command::ForceUi { reply } => {
                self.unlock_mouse().await;
                self.apply_choice(CursorChoice::Ui).await;
                if reply.send(()).is_err() {
                    debug!("ForceUi reply channel closed (caller dropped)");
                }
            }
            Command::ForceOverworld { reply } => {
                self.unlock_mouse().await;
                self.apply_choice(CursorChoice::Overworld).await;
                if reply.send(()).is_err() {
                    debug!("ForceOverworld reply channel closed (caller dropped)");
                }
            }
            Command::LockMouse { reply } => {
                self.lock_mouse().await;
                if reply.send(()).is_err() {
                    debug!("LockMouse reply channel closed (caller dropped)");
                }
            }
            Command::UnlockMouse { reply } => {
                self.unlock_mouse().await;
                if reply.send(()).is_err() {
                    debug!("UnlockMouse reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.state()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn publish(&self, event: CursorEvent) {
        // No subscribers is normal, not an error.
        let _ = self.event_tx.send(event);
    }
}
