use serde::{Deserialize, Serialize};
use std::path::Path;

/// Metadata of a file offered to the photo picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateFile {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl CandidateFile {
    /// Extension of the original file name, without the leading dot
    pub fn extension(&self) -> Option<&str> {
        Path::new(&self.name)
            .extension()
            .and_then(|e| e.to_str())
            .filter(|e| !e.is_empty())
    }
}

/// A file delivered by a drop or a browse selection, with its content
#[derive(Clone, PartialEq, Eq)]
pub struct PhotoFile {
    pub candidate: CandidateFile,
    pub data: Vec<u8>,
}

impl PhotoFile {
    /// Build a file whose declared size is the length of its content
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            candidate: CandidateFile {
                name: name.into(),
                mime_type: mime_type.into(),
                size_bytes: data.len() as u64,
            },
            data,
        }
    }

    pub fn name(&self) -> &str {
        &self.candidate.name
    }

    pub fn mime_type(&self) -> &str {
        &self.candidate.mime_type
    }

    pub fn size_bytes(&self) -> u64 {
        self.candidate.size_bytes
    }

    /// Size shown under the preview, e.g. "2.0 Mo"
    pub fn size_label(&self) -> String {
        let size = self.size_bytes() as f64;
        if size >= 1024.0 * 1024.0 {
            format!("{:.1} Mo", size / (1024.0 * 1024.0))
        } else {
            format!("{:.0} Ko", (size / 1024.0).ceil())
        }
    }
}

// File content stays out of debug output.
impl std::fmt::Debug for PhotoFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoFile")
            .field("name", &self.candidate.name)
            .field("mime_type", &self.candidate.mime_type)
            .field("size_bytes", &self.candidate.size_bytes)
            .finish()
    }
}
