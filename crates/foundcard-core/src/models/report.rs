use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use uuid::Uuid;
use validator::Validate;

use super::DocumentType;
use crate::validation::report::{parse_found_date, validate_card_number, validate_found_date};
use crate::AppError;

/// Field values of the report form
///
/// Text fields hold exactly what the user typed; the schema below is evaluated
/// on submit and, field by field, on blur.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ReportDraft {
    #[validate(required(message = "Veuillez sélectionner le type de document"))]
    pub document_type: Option<DocumentType>,
    #[validate(
        length(min = 1, message = "Le numéro du document est requis"),
        custom(function = "validate_card_number")
    )]
    pub card_number: String,
    #[validate(length(min = 1, message = "Le lieu de découverte est requis"))]
    pub location: String,
    #[validate(
        length(min = 1, message = "La date de découverte est requise"),
        custom(function = "validate_found_date")
    )]
    pub found_date: String,
    pub description: String,
}

/// Fields of [`ReportDraft`], used to address per-field validation messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportField {
    DocumentType,
    CardNumber,
    Location,
    FoundDate,
    Description,
}

impl ReportField {
    pub const ALL: [ReportField; 5] = [
        ReportField::DocumentType,
        ReportField::CardNumber,
        ReportField::Location,
        ReportField::FoundDate,
        ReportField::Description,
    ];

    /// Name of the struct field, as reported by the validator
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportField::DocumentType => "document_type",
            ReportField::CardNumber => "card_number",
            ReportField::Location => "location",
            ReportField::FoundDate => "found_date",
            ReportField::Description => "description",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ReportField::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

impl Display for ReportField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Row sent to the `reported_cards` table for one successful submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewReportedCard {
    pub reporter_id: Uuid,
    pub document_type: DocumentType,
    pub card_number: String,
    pub location: String,
    pub found_date: NaiveDate,
    pub description: Option<String>,
    pub photo_url: Option<String>,
}

impl NewReportedCard {
    /// Combine a validated draft, the reporter and the resolved photo URL
    pub fn from_draft(
        draft: &ReportDraft,
        reporter_id: Uuid,
        photo_url: Option<String>,
    ) -> Result<Self, AppError> {
        let document_type = draft
            .document_type
            .ok_or_else(|| AppError::InvalidInput("document_type is required".to_string()))?;
        let found_date = parse_found_date(&draft.found_date).ok_or_else(|| {
            AppError::InvalidInput(format!("Invalid found date: {}", draft.found_date))
        })?;
        let description = Some(draft.description.trim().to_string()).filter(|d| !d.is_empty());

        Ok(Self {
            reporter_id,
            document_type,
            card_number: draft.card_number.clone(),
            location: draft.location.clone(),
            found_date,
            description,
            photo_url,
        })
    }
}
