//! In-memory collaborators and fixtures for unit tests

mod fixtures;
mod mocks;

pub use fixtures::*;
pub use mocks::*;
