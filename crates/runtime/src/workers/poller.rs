//! Basic cursor poller.
//!
//! Applies the configured initial image once, then rescans the watch list on
//! every interval tick and applies the selected image. Runs until the command
//! channel closes.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

use cursor_core::{PollConfig, select_cursor};

use crate::api::ActivityProbe;
use crate::workers::{Command, CursorSession};

pub(crate) struct PollerWorker {
    session: CursorSession,
    probe: Arc<dyn ActivityProbe>,
    config: PollConfig,
    command_rx: mpsc::Receiver<Command>,
}

impl PollerWorker {
    pub(crate) fn new(
        session: CursorSession,
        probe: Arc<dyn ActivityProbe>,
        config: PollConfig,
        command_rx: mpsc::Receiver<Command>,
    ) -> Self {
        Self {
            session,
            probe,
            config,
            command_rx,
        }
    }

    /// Main worker loop.
    pub(crate) async fn run(mut self) {
        // The configured cursor is applied once before the first change
        // check, so the session never starts on a stale host cursor.
        let initial = self.session.state().current;
        self.session.apply_choice(initial).await;

        let mut ticker = time::interval(self.config.change_interval);
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

        debug!("poller worker stopped (all handles dropped)");
    }

    async fn tick(&mut self) {
        let watch = self.probe.scan().await;
        match select_cursor(&watch) {
            Some(choice) => self.session.apply_choice(choice).await,
            None => debug!("watch list empty, skipping change check"),
        }
    }
}
