//! Integration tests for the basic cursor poller.
//!
//! Time is paused, so interval ticks fire deterministically whenever the test
//! awaits. Tests run on the current-thread runtime, which means the worker
//! task does not start until the first await; subscribing right after
//! `build()` therefore never misses the startup events.

mod common;

use std::time::Duration;

use tokio::time;

use common::{HostCall, RecordingHost, SharedProbe};
use cursor_core::{CursorChoice, CursorImage, CursorImageSet, Hotspot, PollConfig};
use cursor_runtime::{CursorEvent, CursorRuntime, RuntimeError, StaticProbe};

const OVERWORLD: CursorImage = CursorImage(1);
const UI: CursorImage = CursorImage(2);

fn images() -> CursorImageSet {
    CursorImageSet::new(OVERWORLD, UI)
}

fn interval() -> Duration {
    PollConfig::default().change_interval
}

#[tokio::test(start_paused = true)]
async fn initial_cursor_applied_before_first_check() {
    let host = RecordingHost::new();
    let runtime = CursorRuntime::builder()
        .images(images().with_hotspot(Hotspot::new(4.0, 4.0)))
        .host(host.clone())
        .probe(StaticProbe(vec![false]))
        .build()
        .expect("runtime should build");

    let mut events = runtime.subscribe_events();

    let event = events.recv().await.expect("should receive startup event");
    assert_eq!(
        event,
        CursorEvent::ImageApplied {
            choice: CursorChoice::Overworld,
            image: OVERWORLD,
        }
    );
    assert_eq!(
        host.calls()[0],
        HostCall::Apply(OVERWORLD, Hotspot::new(4.0, 4.0))
    );

    runtime.shutdown().await.expect("shutdown should succeed");
}

#[tokio::test(start_paused = true)]
async fn active_object_selects_ui_and_inactive_selects_overworld() {
    let probe = SharedProbe::new(vec![false, false, false]);
    let runtime = CursorRuntime::builder()
        .images(images())
        .host(RecordingHost::new())
        .probe(probe.clone())
        .build()
        .expect("runtime should build");

    let mut events = runtime.subscribe_events();

    // Startup apply plus the immediate first check, both overworld.
    for _ in 0..2 {
        let event = events.recv().await.expect("should receive event");
        assert_eq!(
            event,
            CursorEvent::ImageApplied {
                choice: CursorChoice::Overworld,
                image: OVERWORLD,
            }
        );
    }

    probe.set(vec![false, true, false]);
    time::sleep(interval()).await;
    let event = events.recv().await.expect("should receive event");
    assert_eq!(
        event,
        CursorEvent::ImageApplied {
            choice: CursorChoice::Ui,
            image: UI,
        }
    );

    probe.set(vec![false, false, false]);
    time::sleep(interval()).await;
    let event = events.recv().await.expect("should receive event");
    assert_eq!(
        event,
        CursorEvent::ImageApplied {
            choice: CursorChoice::Overworld,
            image: OVERWORLD,
        }
    );

    runtime.shutdown().await.expect("shutdown should succeed");
}

#[tokio::test(start_paused = true)]
async fn empty_watch_list_skips_change_checks() {
    let host = RecordingHost::new();
    let runtime = CursorRuntime::builder()
        .images(images())
        .host(host.clone())
        .probe(StaticProbe(Vec::new()))
        .build()
        .expect("runtime should build");

    time::sleep(interval() * 5).await;

    // Fence on the command channel so all elapsed ticks are processed.
    let state = runtime.handle().query_state().await.expect("query state");
    assert_eq!(state.current, CursorChoice::Overworld);

    // Only the startup apply reached the host.
    assert_eq!(host.apply_count(), 1);

    runtime.shutdown().await.expect("shutdown should succeed");
}

#[tokio::test(start_paused = true)]
async fn polling_stops_after_shutdown() {
    let host = RecordingHost::new();
    let runtime = CursorRuntime::builder()
        .images(images())
        .host(host.clone())
        .probe(StaticProbe(vec![true]))
        .build()
        .expect("runtime should build");

    time::sleep(interval() * 3).await;
    runtime.shutdown().await.expect("shutdown should succeed");

    let applied_at_shutdown = host.apply_count();
    assert!(applied_at_shutdown > 0);

    time::sleep(interval() * 10).await;
    assert_eq!(host.apply_count(), applied_at_shutdown);
}

#[tokio::test]
async fn builder_rejects_missing_dependencies() {
    let err = CursorRuntime::builder()
        .images(images())
        .probe(StaticProbe(vec![false]))
        .build()
        .expect_err("build should fail without a host");
    assert!(matches!(err, RuntimeError::MissingHost));

    let err = CursorRuntime::builder()
        .images(images())
        .host(RecordingHost::new())
        .build()
        .expect_err("build should fail without a probe");
    assert!(matches!(err, RuntimeError::MissingProbe));

    let err = CursorRuntime::builder()
        .host(RecordingHost::new())
        .probe(StaticProbe(vec![false]))
        .build()
        .expect_err("build should fail without images");
    assert!(matches!(err, RuntimeError::MissingImages));
}
