//! Device-aware cursor poller.
//!
//! Starts locked and hidden, waits out the startup delay so the cursor does
//! not flash while the scene loads, then per tick: folds the last-active
//! controller into the gamepad flag, and unless a gamepad is in use, unlocks
//! the mouse and applies the image the watch-list scan selects. Commands from
//! the handle are serviced at any point, including during the startup delay.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

use cursor_core::{DeviceConfig, GamepadFlag, select_cursor};

use crate::api::{ActivityProbe, ControllerSource};
use crate::workers::{Command, CursorSession};

pub(crate) struct DeviceWorker {
    session: CursorSession,
    probe: Arc<dyn ActivityProbe>,
    controllers: Arc<dyn ControllerSource>,
    config: DeviceConfig,
    gamepad: GamepadFlag,
    command_rx: mpsc::Receiver<Command>,
}

impl DeviceWorker {
    pub(crate) fn new(
        session: CursorSession,
        probe: Arc<dyn ActivityProbe>,
        controllers: Arc<dyn ControllerSource>,
        config: DeviceConfig,
        command_rx: mpsc::Receiver<Command>,
    ) -> Self {
        Self {
            session,
            probe,
            controllers,
            config,
            gamepad: GamepadFlag::new(),
            command_rx,
        }
    }

    /// Main worker loop.
    pub(crate) async fn run(mut self) {
        self.session.lock_mouse().await;

        if !self.wait_for_startup().await {
            self.session.unlock_mouse().await;
            return;
        }

        let mut ticker = time::interval(self.config.poll.change_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                cmd = self.command_rx.recv() => {
                    match cmd {
                        Some(cmd) => self.session.handle_command(cmd).await,
                        None => break,
                    }
                }
                _ = ticker.tick() => {
                    self.tick().await;
                }
            }
        }

        // Leave the embedder with a usable pointer on the way out.
        self.session.unlock_mouse().await;
        debug!("device worker stopped (all handles dropped)");
    }

    /// Sleeps out the startup delay while still servicing commands.
    ///
    /// Returns `false` if every handle was dropped before the delay elapsed.
    async fn wait_for_startup(&mut self) -> bool {
        let delay = time::sleep(self.config.startup_delay);
        tokio::pin!(delay);

        loop {
            tokio::select! {
                cmd = self.command_rx.recv() => {
                    match cmd {
                        Some(cmd) => self.session.handle_command(cmd).await,
                        None => return false,
                    }
                }
                _ = &mut delay => {
                    info!(
                        delay_ms = self.config.startup_delay.as_millis() as u64,
                        "startup delay elapsed, polling begins"
                    );
                    return true;
                }
            }
        }
    }

    async fn tick(&mut self) {
        self.check_gamepad().await;

        if self.session.gamepad_connected() {
            return;
        }
        self.session.unlock_mouse().await;

        let watch = self.probe.scan().await;
        match select_cursor(&watch) {
            Some(choice) => self.session.apply_choice(choice).await,
            None => debug!("watch list empty, skipping change check"),
        }
    }

    async fn check_gamepad(&mut self) {
        let observed = self
            .controllers
            .last_active_controller(&self.config.player_id)
            .await;

        let update = self.gamepad.apply(observed);
        if let Some(connected) = update.connected {
            info!(connected, controller = ?observed, "gamepad flag changed");
            self.session.set_gamepad_connected(connected);
        }
        if update.hide_cursor {
            // Hiding on gamepad input goes through the lock machine so
            // visibility and lock mode stay a consistent pair.
            self.session.lock_mouse().await;
        }
    }
}
