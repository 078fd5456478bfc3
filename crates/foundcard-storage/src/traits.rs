//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use crate::StorageBackend;
use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// All storage backends (S3, local filesystem) implement this trait so the
/// submission workflow can upload photos without knowing where they end up.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Store `data` in `bucket` under `storage_key`, replacing any existing object
    async fn upload(
        &self,
        bucket: &str,
        storage_key: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<()>;

    /// Publicly reachable URL of an object. No request is made.
    fn public_url(&self, bucket: &str, storage_key: &str) -> StorageResult<String>;

    /// Download an object
    async fn download(&self, bucket: &str, storage_key: &str) -> StorageResult<Vec<u8>>;

    /// Check if an object exists
    async fn exists(&self, bucket: &str, storage_key: &str) -> StorageResult<bool>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
