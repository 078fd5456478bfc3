//! Foundcard Storage Library
//!
//! Object storage for document photos. It includes the `Storage` trait and
//! implementations for S3-compatible services and the local filesystem.
//!
//! # Object addressing
//!
//! Objects live in a named bucket under a key. Photo keys are generated by
//! [`keys::photo_key`]: a random UUID followed by the original file extension,
//! e.g. `card-photos` / `3f0c…e1.jpg`. Buckets and keys must not contain `..`
//! or a leading `/`.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use foundcard_core::StorageBackend;
pub use keys::photo_key;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
