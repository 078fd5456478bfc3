//! Telemetry initialization
//!
//! Installs the global `tracing` subscriber used by every foundcard crate.

mod init_basic;

pub use init_basic::{init_telemetry, LogFormat};
