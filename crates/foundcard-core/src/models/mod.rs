//! Data models for the reporting flow

mod document_type;
mod identity;
mod photo;
mod report;

pub use document_type::*;
pub use identity::*;
pub use photo::*;
pub use report::*;
