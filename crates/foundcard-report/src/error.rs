//! Errors of the submission workflow and of the form controller

use std::collections::BTreeMap;

use foundcard_core::models::ReportField;
use foundcard_core::{AppError, ErrorMetadata, LogLevel};
use foundcard_storage::StorageError;
use thiserror::Error;

use crate::messages::{self, ToastText};

/// Why a submission did not produce a stored report
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("No signed-in user")]
    Unauthenticated,

    #[error("Photo upload failed: {0}")]
    UploadFailed(#[source] StorageError),

    #[error("Report is incomplete: {0}")]
    InvalidDraft(#[source] AppError),

    #[error("Report insert failed: {0}")]
    InsertFailed(#[source] AppError),
}

impl SubmissionError {
    /// The single toast shown for this error
    pub fn toast_text(&self) -> ToastText {
        match self {
            SubmissionError::Unauthenticated => messages::UNAUTHENTICATED,
            SubmissionError::UploadFailed(_) => messages::UPLOAD_FAILED,
            SubmissionError::InvalidDraft(_) => messages::INVALID_REPORT,
            SubmissionError::InsertFailed(_) => messages::INSERT_FAILED,
        }
    }
}

impl ErrorMetadata for SubmissionError {
    fn error_code(&self) -> &'static str {
        match self {
            SubmissionError::Unauthenticated => "UNAUTHENTICATED",
            SubmissionError::UploadFailed(_) => "UPLOAD_FAILED",
            SubmissionError::InvalidDraft(_) => "INVALID_INPUT",
            SubmissionError::InsertFailed(_) => "INSERT_FAILED",
        }
    }

    fn is_recoverable(&self) -> bool {
        !matches!(self, SubmissionError::InvalidDraft(_))
    }

    fn client_message(&self) -> String {
        self.toast_text().description.to_string()
    }

    fn is_sensitive(&self) -> bool {
        matches!(
            self,
            SubmissionError::UploadFailed(_) | SubmissionError::InsertFailed(_)
        )
    }

    fn log_level(&self) -> LogLevel {
        match self {
            SubmissionError::Unauthenticated => LogLevel::Warn,
            SubmissionError::InvalidDraft(_) => LogLevel::Debug,
            SubmissionError::UploadFailed(_) | SubmissionError::InsertFailed(_) => LogLevel::Error,
        }
    }
}

/// Why `ReportForm::submit` returned without a stored report
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("A submission is already in progress")]
    InFlight,

    #[error("The form has been closed")]
    Closed,

    #[error("{} field(s) are invalid", .0.len())]
    Invalid(BTreeMap<ReportField, String>),

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}
