//! Foundcard Infrastructure Library
//!
//! Shared plumbing for the report flow:
//! - Telemetry initialization (tracing subscriber)
//! - Error logging at the level each error asks for

#[cfg(feature = "observability-basic")]
pub mod telemetry;

pub mod error;

pub use error::log_error;
#[cfg(feature = "observability-basic")]
pub use telemetry::{init_telemetry, LogFormat};
