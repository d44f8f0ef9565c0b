//! Shared fixtures for the runtime integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use cursor_core::{ControllerType, CursorImage, Hotspot};
use cursor_runtime::{ActivityProbe, ControllerSource, CursorHost, LockMode};

/// One call observed at the host boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostCall {
    Apply(CursorImage, Hotspot),
    Visible(bool),
    Lock(LockMode),
}

/// Host that records every call for later assertions.
#[derive(Clone, Default)]
pub struct RecordingHost {
    calls: Arc<Mutex<Vec<HostCall>>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn apply_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, HostCall::Apply(..)))
            .count()
    }
}

#[async_trait]
impl CursorHost for RecordingHost {
    async fn apply_image(&self, image: CursorImage, hotspot: Hotspot) {
        self.calls.lock().unwrap().push(HostCall::Apply(image, hotspot));
    }

    async fn set_visible(&self, visible: bool) {
        self.calls.lock().unwrap().push(HostCall::Visible(visible));
    }

    async fn set_lock_mode(&self, mode: LockMode) {
        self.calls.lock().unwrap().push(HostCall::Lock(mode));
    }
}

/// Probe whose activity snapshot the test can rewrite mid-run.
#[derive(Clone, Default)]
pub struct SharedProbe {
    watch: Arc<Mutex<Vec<bool>>>,
}

impl SharedProbe {
    pub fn new(watch: Vec<bool>) -> Self {
        Self {
            watch: Arc::new(Mutex::new(watch)),
        }
    }

    pub fn set(&self, watch: Vec<bool>) {
        *self.watch.lock().unwrap() = watch;
    }
}

#[async_trait]
impl ActivityProbe for SharedProbe {
    async fn scan(&self) -> Vec<bool> {
        self.watch.lock().unwrap().clone()
    }
}

/// Controller source whose answer the test can rewrite mid-run.
#[derive(Clone, Default)]
pub struct ScriptedControllers {
    current: Arc<Mutex<Option<ControllerType>>>,
    last_player_id: Arc<Mutex<Option<String>>>,
}

impl ScriptedControllers {
    pub fn new(current: Option<ControllerType>) -> Self {
        Self {
            current: Arc::new(Mutex::new(current)),
            last_player_id: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set(&self, controller: Option<ControllerType>) {
        *self.current.lock().unwrap() = controller;
    }

    pub fn last_player_id(&self) -> Option<String> {
        self.last_player_id.lock().unwrap().clone()
    }
}

#[async_trait]
impl ControllerSource for ScriptedControllers {
    async fn last_active_controller(&self, player_id: &str) -> Option<ControllerType> {
        *self.last_player_id.lock().unwrap() = Some(player_id.to_string());
        *self.current.lock().unwrap()
    }
}
