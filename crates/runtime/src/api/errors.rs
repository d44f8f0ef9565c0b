//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and builder validation so clients
//! can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("poller worker command channel closed")]
    CommandChannelClosed,

    #[error("poller worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("poller worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires a cursor host to be configured before building")]
    MissingHost,

    #[error("runtime requires an activity probe to be configured before building")]
    MissingProbe,

    #[error("runtime requires a cursor image set to be configured before building")]
    MissingImages,

    #[error(transparent)]
    Config(#[from] cursor_core::ConfigError),
}
