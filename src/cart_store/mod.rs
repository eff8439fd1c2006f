//! Canonical cart and like state, with the aggregates derived from it.

mod store;

pub use store::*;
