//! Producer-facing handles for sending intents to the view model.

#[macro_use]
mod macros;
mod shop_client;

pub use shop_client::*;
