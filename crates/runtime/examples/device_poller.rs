//! Runs the device-aware poller against a logging stub host.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p cursor-runtime --example device_poller
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tokio::time;
use tracing::info;

use cursor_core::{
    ControllerType, CursorImage, CursorImageSet, DeviceConfig, Hotspot, PollConfig,
};
use cursor_runtime::{ActivityProbe, ControllerSource, CursorHost, CursorRuntime, LockMode};

/// Host that just logs what a real engine integration would do.
struct LoggingHost;

#[async_trait]
impl CursorHost for LoggingHost {
    async fn apply_image(&self, image: CursorImage, hotspot: Hotspot) {
        info!(?image, ?hotspot, "host: apply cursor image");
    }

    async fn set_visible(&self, visible: bool) {
        info!(visible, "host: set cursor visibility");
    }

    async fn set_lock_mode(&self, mode: LockMode) {
        info!(?mode, "host: set lock mode");
    }
}

/// Stands in for a scene: one "menu object" the driver toggles.
#[derive(Clone, Default)]
struct MenuProbe {
    menu_open: Arc<Mutex<bool>>,
}

#[async_trait]
impl ActivityProbe for MenuProbe {
    async fn scan(&self) -> Vec<bool> {
        vec![*self.menu_open.lock().unwrap()]
    }
}

/// Stands in for an input layer: the player alternates devices.
#[derive(Clone, Default)]
struct AlternatingInput {
    on_gamepad: Arc<Mutex<bool>>,
}

#[async_trait]
impl ControllerSource for AlternatingInput {
    async fn last_active_controller(&self, _player_id: &str) -> Option<ControllerType> {
        if *self.on_gamepad.lock().unwrap() {
            Some(ControllerType::Joystick)
        } else {
            Some(ControllerType::Mouse)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let probe = MenuProbe::default();
    let input = AlternatingInput::default();

    let runtime = CursorRuntime::builder()
        .images(CursorImageSet::new(CursorImage(1), CursorImage(2)))
        .device_config(DeviceConfig {
            poll: PollConfig::default(),
            startup_delay: Duration::from_millis(500),
            ..DeviceConfig::default()
        })
        .host(LoggingHost)
        .probe(probe.clone())
        .controller_source(input.clone())
        .build()?;

    let mut events = runtime.subscribe_events();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            info!(?event, "cursor event");
        }
    });

    info!("scene loading (startup delay)");
    time::sleep(Duration::from_secs(1)).await;

    info!("player opens a menu");
    *probe.menu_open.lock().unwrap() = true;
    time::sleep(Duration::from_secs(1)).await;

    info!("player closes the menu");
    *probe.menu_open.lock().unwrap() = false;
    time::sleep(Duration::from_secs(1)).await;

    info!("player picks up the gamepad");
    *input.on_gamepad.lock().unwrap() = true;
    time::sleep(Duration::from_secs(1)).await;

    info!("player returns to the mouse, forces the UI cursor");
    *input.on_gamepad.lock().unwrap() = false;
    runtime.handle().force_ui().await?;
    time::sleep(Duration::from_secs(1)).await;

    runtime.shutdown().await?;
    Ok(())
}
