//! Shared key generation and validation for storage backends.

use foundcard_core::models::CandidateFile;
use uuid::Uuid;

use crate::{StorageError, StorageResult};

const MAX_EXTENSION_LENGTH: usize = 10;

/// Generate a random storage key that keeps the original file extension.
///
/// `recto.JPG` becomes `{uuid}.JPG`. When the name has no usable extension, one
/// is derived from the MIME type.
pub fn photo_key(file: &CandidateFile) -> String {
    let extension = file
        .extension()
        .filter(|ext| {
            ext.len() <= MAX_EXTENSION_LENGTH && ext.chars().all(|c| c.is_ascii_alphanumeric())
        })
        .map(str::to_string)
        .unwrap_or_else(|| extension_for_mime(&file.mime_type).to_string());

    format!("{}.{}", Uuid::new_v4(), extension)
}

fn extension_for_mime(mime_type: &str) -> &'static str {
    match mime_type.to_lowercase().split(';').next().map(str::trim) {
        Some("image/png") => "png",
        Some("image/jpeg") | Some("image/jpg") => "jpg",
        _ => "bin",
    }
}

/// Reject buckets and keys that could escape their namespace.
pub fn validate_location(bucket: &str, storage_key: &str) -> StorageResult<()> {
    if bucket.is_empty() || bucket.contains('/') || bucket.contains("..") {
        return Err(StorageError::InvalidKey(format!("Invalid bucket: {}", bucket)));
    }
    if storage_key.is_empty() || storage_key.contains("..") || storage_key.starts_with('/') {
        return Err(StorageError::InvalidKey(
            "Storage key contains invalid characters".to_string(),
        ));
    }
    Ok(())
}
