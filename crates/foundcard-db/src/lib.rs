//! Foundcard Database Layer
//!
//! Persistence of reported cards in PostgreSQL, plus pool creation and
//! migrations.

pub mod db;

pub use db::pool::{create_pool, run_migrations};
pub use db::{ReportStore, ReportedCardRepository};
