//! Database repositories
//
// Pool setup and migrations
pub mod pool;
//
// Reported cards (the only table written by the report flow)
pub mod reported_card;

pub use reported_card::{ReportStore, ReportedCardRepository};
