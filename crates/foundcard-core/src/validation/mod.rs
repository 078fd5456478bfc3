//! Validation modules

pub mod photo;
pub mod report;

pub use photo::{FileVerdict, PhotoValidator, RejectReason};
pub use report::{field_messages, parse_found_date, validate_card_number, validate_found_date};
