use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Kind of identification document that was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// National identity card
    Id,
    /// Driving licence
    Driver,
    Passport,
}

impl DocumentType {
    /// Options offered by the document type selector, in display order
    pub const ALL: [DocumentType; 3] = [
        DocumentType::Id,
        DocumentType::Driver,
        DocumentType::Passport,
    ];

    /// Value stored in the `document_type` column
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Id => "id",
            DocumentType::Driver => "driver",
            DocumentType::Passport => "passport",
        }
    }

    /// Label shown in the selector
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Id => "Carte d'identité",
            DocumentType::Driver => "Permis de conduire",
            DocumentType::Passport => "Passeport",
        }
    }
}

impl FromStr for DocumentType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "id" => Ok(DocumentType::Id),
            "driver" => Ok(DocumentType::Driver),
            "passport" => Ok(DocumentType::Passport),
            _ => Err(anyhow::anyhow!("Invalid document type: {}", s)),
        }
    }
}

impl Display for DocumentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
