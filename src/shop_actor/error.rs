use thiserror::Error;

/// Errors at the boundary between the view model and its view.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShopError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
    #[error("Event subscriber is gone")]
    SubscriberGone,
}
