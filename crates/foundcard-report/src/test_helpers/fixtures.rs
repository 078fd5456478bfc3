//! Test fixtures

use foundcard_core::models::{DocumentType, PhotoFile, ReportDraft};

/// A draft that passes every field rule
pub fn valid_draft() -> ReportDraft {
    ReportDraft {
        document_type: Some(DocumentType::Id),
        card_number: "123456789".to_string(),
        location: "Gare Saint-Lazare, quai 3".to_string(),
        found_date: "2026-10-12".to_string(),
        description: "Trouvée sous un banc".to_string(),
    }
}

/// A JPEG of `size` bytes (content is not a real image)
pub fn jpeg(name: &str, size: usize) -> PhotoFile {
    PhotoFile::new(name, "image/jpeg", vec![0xFF; size])
}
