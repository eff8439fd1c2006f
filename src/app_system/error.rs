use thiserror::Error;
use crate::shop_actor::ShopError;

/// Errors surfaced by the application as a whole.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Shop(#[from] ShopError),
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(#[from] tokio::task::JoinError),
    #[error("Event stream closed before {0}")]
    EventStreamClosed(&'static str),
}
