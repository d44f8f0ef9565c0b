//! High-level runtime orchestrator.
//!
//! The runtime owns the background polling worker, wires up command/event
//! channels, and exposes a builder-based API for embedders to configure which
//! polling variant runs.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use cursor_core::{CursorImageSet, DeviceConfig, PollConfig};

use crate::api::{
    ActivityProbe, ControllerSource, CursorEvent, CursorHandle, CursorHost, Result, RuntimeError,
};
use crate::workers::{CursorSession, DeviceWorker, PollerWorker};

const EVENT_BUFFER_SIZE: usize = 100;
const COMMAND_BUFFER_SIZE: usize = 32;

/// Owns the polling worker and hands out [`CursorHandle`]s.
///
/// Which variant runs is decided at build time: configuring a
/// [`ControllerSource`] selects the device-aware worker, otherwise the basic
/// poller runs.
#[derive(Debug)]
pub struct CursorRuntime {
    handle: CursorHandle,
    worker_handle: JoinHandle<()>,
}

impl CursorRuntime {
    /// Create a new runtime builder.
    pub fn builder() -> CursorRuntimeBuilder {
        CursorRuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime.
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> CursorHandle {
        self.handle.clone()
    }

    /// Subscribe to cursor events.
    pub fn subscribe_events(&self) -> broadcast::Receiver<CursorEvent> {
        self.handle.subscribe_events()
    }

    /// Shutdown the runtime gracefully.
    ///
    /// Stops the polling loop and waits for the worker to finish its exit
    /// path (the device worker unlocks the mouse on the way out). Any other
    /// outstanding handles keep the worker alive until they are dropped too.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`CursorRuntime`] with flexible configuration.
pub struct CursorRuntimeBuilder {
    config: DeviceConfig,
    images: Option<CursorImageSet>,
    host: Option<Arc<dyn CursorHost>>,
    probe: Option<Arc<dyn ActivityProbe>>,
    controllers: Option<Arc<dyn ControllerSource>>,
}

impl CursorRuntimeBuilder {
    fn new() -> Self {
        Self {
            config: DeviceConfig::default(),
            images: None,
            host: None,
            probe: None,
            controllers: None,
        }
    }

    /// Set the session image pair and hotspot (required).
    pub fn images(mut self, images: CursorImageSet) -> Self {
        self.images = Some(images);
        self
    }

    /// Override the polling interval configuration.
    pub fn poll_config(mut self, config: PollConfig) -> Self {
        self.config.poll = config;
        self
    }

    /// Override the device-aware configuration (startup delay, player id).
    ///
    /// Only meaningful together with [`controller_source`]; the basic poller
    /// reads just the embedded polling interval.
    ///
    /// [`controller_source`]: Self::controller_source
    pub fn device_config(mut self, config: DeviceConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the cursor host boundary (required).
    pub fn host(mut self, host: impl CursorHost + 'static) -> Self {
        self.host = Some(Arc::new(host));
        self
    }

    /// Set the watch-list activity probe (required).
    pub fn probe(mut self, probe: impl ActivityProbe + 'static) -> Self {
        self.probe = Some(Arc::new(probe));
        self
    }

    /// Set the controller source, selecting the device-aware variant.
    pub fn controller_source(mut self, source: impl ControllerSource + 'static) -> Self {
        self.controllers = Some(Arc::new(source));
        self
    }

    /// Validate the configuration and spawn the polling worker.
    pub fn build(self) -> Result<CursorRuntime> {
        let images = self.images.ok_or(RuntimeError::MissingImages)?;
        let host = self.host.ok_or(RuntimeError::MissingHost)?;
        let probe = self.probe.ok_or(RuntimeError::MissingProbe)?;

        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER_SIZE);
        let (event_tx, _) = broadcast::channel(EVENT_BUFFER_SIZE);

        let session = CursorSession::new(host, images, event_tx.clone());

        let worker_handle = match self.controllers {
            Some(controllers) => {
                let worker =
                    DeviceWorker::new(session, probe, controllers, self.config, command_rx);
                tokio::spawn(worker.run())
            }
            None => {
                let worker = PollerWorker::new(session, probe, self.config.poll, command_rx);
                tokio::spawn(worker.run())
            }
        };

        Ok(CursorRuntime {
            handle: CursorHandle::new(command_tx, event_tx),
            worker_handle,
        })
    }
}
