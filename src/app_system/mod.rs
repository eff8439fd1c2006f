//! System orchestration: configuration, tracing, startup and shutdown.

pub mod config;
pub mod error;
pub mod shop_system;
pub mod telemetry;

pub use config::*;
pub use error::*;
pub use shop_system::*;
pub use telemetry::*;
