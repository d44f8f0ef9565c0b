//! Runtime orchestration for the cursor pollers.
//!
//! This crate wires together the host provider abstraction and worker tasks
//! into a cohesive runtime API. Consumers embed [`CursorRuntime`] to run one
//! of the two polling variants, subscribe to events, and drive the cursor
//! through [`CursorHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - `workers` keeps the background polling tasks internal to the crate
pub mod api;
pub mod runtime;

mod workers;

pub use api::{
    ActivityProbe, ControllerSource, CursorEvent, CursorHandle, CursorHost, CursorState, LockMode,
    Result, RuntimeError, StaticProbe,
};
pub use runtime::{CursorRuntime, CursorRuntimeBuilder};
