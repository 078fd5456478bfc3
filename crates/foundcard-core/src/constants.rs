//! Shared constants

/// Largest photo accepted by the picker (5 MiB).
pub const MAX_PHOTO_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// MIME types accepted for the document photo.
pub const ALLOWED_PHOTO_CONTENT_TYPES: &[&str] = &["image/jpeg", "image/png", "image/jpg"];

/// Default object storage bucket for document photos.
pub const DEFAULT_PHOTO_BUCKET: &str = "card-photos";

/// Table receiving one row per submitted report.
pub const REPORTED_CARDS_TABLE: &str = "reported_cards";

/// Route the view navigates to after a successful submission.
pub const HOME_ROUTE: &str = "/";
