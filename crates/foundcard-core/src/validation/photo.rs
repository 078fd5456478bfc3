//! Photo acceptance rules: MIME allow-list and size ceiling

use crate::constants::{ALLOWED_PHOTO_CONTENT_TYPES, MAX_PHOTO_SIZE_BYTES};
use crate::models::CandidateFile;
use crate::Config;

/// Why a candidate photo was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    #[error("unsupported file type")]
    UnsupportedType,
    #[error("file too large")]
    TooLarge,
}

/// Outcome of checking a candidate photo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileVerdict {
    Accept,
    Reject(RejectReason),
}

impl FileVerdict {
    pub fn is_accept(&self) -> bool {
        matches!(self, FileVerdict::Accept)
    }
}

/// Photo validator
///
/// Checks the declared MIME type first, then the declared size; the first
/// failing check decides the reason.
#[derive(Debug, Clone)]
pub struct PhotoValidator {
    max_size_bytes: u64,
    allowed_content_types: Vec<String>,
}

impl Default for PhotoValidator {
    fn default() -> Self {
        Self::new(
            MAX_PHOTO_SIZE_BYTES,
            ALLOWED_PHOTO_CONTENT_TYPES
                .iter()
                .map(|ct| ct.to_string())
                .collect(),
        )
    }
}

impl PhotoValidator {
    pub fn new(max_size_bytes: u64, allowed_content_types: Vec<String>) -> Self {
        Self {
            max_size_bytes,
            allowed_content_types: allowed_content_types
                .into_iter()
                .map(|ct| ct.to_lowercase())
                .collect(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.max_photo_size_bytes,
            config.allowed_photo_content_types.clone(),
        )
    }

    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_bytes
    }

    pub fn allowed_content_types(&self) -> &[String] {
        &self.allowed_content_types
    }

    pub fn check(&self, file: &CandidateFile) -> FileVerdict {
        let normalized = normalize_mime_type(&file.mime_type).to_lowercase();
        if !self.allowed_content_types.iter().any(|ct| *ct == normalized) {
            tracing::debug!(
                filename = %file.name,
                content_type = %file.mime_type,
                "Photo rejected: unsupported content type"
            );
            return FileVerdict::Reject(RejectReason::UnsupportedType);
        }

        if file.size_bytes > self.max_size_bytes {
            tracing::debug!(
                filename = %file.name,
                size_bytes = file.size_bytes,
                max_size_bytes = self.max_size_bytes,
                "Photo rejected: too large"
            );
            return FileVerdict::Reject(RejectReason::TooLarge);
        }

        FileVerdict::Accept
    }
}

/// Normalize MIME type by stripping parameters (e.g. "image/jpeg; charset=utf-8" -> "image/jpeg").
fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(mime_type: &str, size_bytes: u64) -> CandidateFile {
        CandidateFile {
            name: "photo".to_string(),
            mime_type: mime_type.to_string(),
            size_bytes,
        }
    }

    #[test]
    fn unsupported_type_wins_regardless_of_size() {
        let validator = PhotoValidator::default();
        for size in [0, 1024, MAX_PHOTO_SIZE_BYTES, MAX_PHOTO_SIZE_BYTES * 4] {
            for mime in ["image/gif", "application/pdf", "image/webp", ""] {
                assert_eq!(
                    validator.check(&candidate(mime, size)),
                    FileVerdict::Reject(RejectReason::UnsupportedType)
                );
            }
        }
    }

    #[test]
    fn oversized_allowed_type_is_too_large() {
        let validator = PhotoValidator::default();
        for mime in ["image/jpeg", "image/png", "image/jpg"] {
            assert_eq!(
                validator.check(&candidate(mime, 5_242_881)),
                FileVerdict::Reject(RejectReason::TooLarge)
            );
        }
    }

    #[test]
    fn allowed_type_within_limit_is_accepted() {
        let validator = PhotoValidator::default();
        for mime in ["image/jpeg", "image/png", "image/jpg"] {
            assert!(validator.check(&candidate(mime, 5_242_880)).is_accept());
            assert!(validator.check(&candidate(mime, 2 * 1024 * 1024)).is_accept());
        }
    }

    #[test]
    fn mime_parameters_and_case_are_ignored() {
        let validator = PhotoValidator::default();
        assert!(validator
            .check(&candidate("IMAGE/PNG; charset=binary", 10))
            .is_accept());
    }

    #[test]
    fn configured_limits_apply() {
        let validator = PhotoValidator::new(100, vec!["image/png".to_string()]);
        assert!(validator.check(&candidate("image/png", 100)).is_accept());
        assert_eq!(
            validator.check(&candidate("image/png", 101)),
            FileVerdict::Reject(RejectReason::TooLarge)
        );
        assert_eq!(
            validator.check(&candidate("image/jpeg", 10)),
            FileVerdict::Reject(RejectReason::UnsupportedType)
        );
    }
}
