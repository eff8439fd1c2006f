//! The view model: an actor that reduces intents into view-state events.

mod actor;
pub mod error;
pub mod messages;

pub use actor::*;
pub use error::*;
pub use messages::*;
