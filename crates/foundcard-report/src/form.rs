//! Report form controller
//!
//! Owns everything one form session holds: the draft, the attached photo (via
//! the picker), the field errors on display, the in-flight flag and the
//! session's cancellation token.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use foundcard_core::models::{CandidateFile, DocumentType, PhotoFile, ReportDraft, ReportField};
use foundcard_core::validation::field_messages;
use foundcard_core::PhotoValidator;
use tokio_util::sync::CancellationToken;
use validator::Validate;

use crate::error::SubmitError;
use crate::notify::Notifier;
use crate::picker::{PhotoPicker, PickOutcome, PickerState};
use crate::workflow::{SubmissionReceipt, SubmissionWorkflow};

struct FormState {
    draft: ReportDraft,
    errors: BTreeMap<ReportField, String>,
    picker: PhotoPicker,
    completed: bool,
}

impl FormState {
    fn field_errors(&self) -> BTreeMap<ReportField, String> {
        match self.draft.validate() {
            Ok(()) => BTreeMap::new(),
            Err(errors) => field_messages(&errors),
        }
    }

    /// Re-check one field and update what is displayed for it
    fn refresh_field(&mut self, field: ReportField) -> Option<String> {
        let message = self.field_errors().remove(&field);
        match &message {
            Some(message) => {
                self.errors.insert(field, message.clone());
            }
            None => {
                self.errors.remove(&field);
            }
        }
        message
    }
}

/// Clears the in-flight flag when the submission ends, however it ends
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// One session of the "report a found document" form
pub struct ReportForm {
    workflow: Arc<SubmissionWorkflow>,
    state: Mutex<FormState>,
    in_flight: AtomicBool,
    cancel: CancellationToken,
}

impl ReportForm {
    pub fn new(
        workflow: Arc<SubmissionWorkflow>,
        validator: PhotoValidator,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            workflow,
            state: Mutex::new(FormState {
                draft: ReportDraft::default(),
                errors: BTreeMap::new(),
                picker: PhotoPicker::new(validator, notifier),
                completed: false,
            }),
            in_flight: AtomicBool::new(false),
            cancel: CancellationToken::new(),
        }
    }

    fn state(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update(&self, field: ReportField, apply: impl FnOnce(&mut ReportDraft)) {
        let mut state = self.state();
        apply(&mut state.draft);
        // A message already on display follows the value as it changes.
        if state.errors.contains_key(&field) {
            state.refresh_field(field);
        }
    }

    pub fn draft(&self) -> ReportDraft {
        self.state().draft.clone()
    }

    pub fn set_document_type(&self, document_type: Option<DocumentType>) {
        self.update(ReportField::DocumentType, |d| d.document_type = document_type);
    }

    pub fn set_card_number(&self, value: impl Into<String>) {
        let value = value.into();
        self.update(ReportField::CardNumber, |d| d.card_number = value);
    }

    pub fn set_location(&self, value: impl Into<String>) {
        let value = value.into();
        self.update(ReportField::Location, |d| d.location = value);
    }

    pub fn set_found_date(&self, value: impl Into<String>) {
        let value = value.into();
        self.update(ReportField::FoundDate, |d| d.found_date = value);
    }

    pub fn set_description(&self, value: impl Into<String>) {
        let value = value.into();
        self.update(ReportField::Description, |d| d.description = value);
    }

    /// Check every field, as on submit. Returns the messages now on display.
    pub fn validate(&self) -> BTreeMap<ReportField, String> {
        let mut state = self.state();
        let errors = state.field_errors();
        state.errors = errors.clone();
        errors
    }

    /// Check a single field, as on blur
    pub fn validate_field(&self, field: ReportField) -> Option<String> {
        self.state().refresh_field(field)
    }

    /// Messages currently on display
    pub fn errors(&self) -> BTreeMap<ReportField, String> {
        self.state().errors.clone()
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        if self.is_submitting() || self.cancel.is_cancelled() {
            return false;
        }
        let state = self.state();
        !state.completed && state.field_errors().is_empty()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// True once a submission succeeded; the session is over
    pub fn is_complete(&self) -> bool {
        self.state().completed
    }

    pub fn picker_state(&self) -> PickerState {
        self.state().picker.state()
    }

    /// Metadata of the attached photo, for the preview
    pub fn photo(&self) -> Option<CandidateFile> {
        self.state().picker.photo().map(|p| p.candidate.clone())
    }

    pub fn drag_enter(&self, has_files: bool) {
        self.state().picker.drag_enter(has_files);
    }

    pub fn drag_leave(&self) {
        self.state().picker.drag_leave();
    }

    pub fn drop_files(&self, files: Vec<PhotoFile>) -> PickOutcome {
        self.state().picker.drop(files)
    }

    pub fn pick_files(&self, files: Vec<PhotoFile>) -> PickOutcome {
        self.state().picker.pick(files)
    }

    pub fn clear_photo(&self) {
        self.state().picker.clear();
    }

    /// The view is going away. Pending work keeps running but its effects are dropped.
    pub fn unmount(&self) {
        tracing::debug!(submitting = self.is_submitting(), "Report form unmounted");
        self.cancel.cancel();
    }

    pub fn is_unmounted(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Validate, then run the submission workflow
    ///
    /// Refused while another submission of this form is running. Validation
    /// failures return before any network call. On failure the draft and the
    /// photo are kept so the user can try again.
    pub async fn submit(&self) -> Result<SubmissionReceipt, SubmitError> {
        if self.cancel.is_cancelled() {
            return Err(SubmitError::Closed);
        }
        let _in_flight = InFlightGuard::acquire(&self.in_flight).ok_or_else(|| {
            tracing::debug!("Submit ignored, a submission is in progress");
            SubmitError::InFlight
        })?;

        let (draft, photo) = {
            let mut state = self.state();
            if state.completed {
                return Err(SubmitError::Closed);
            }
            let errors = state.field_errors();
            state.errors = errors.clone();
            if !errors.is_empty() {
                tracing::debug!(invalid_fields = errors.len(), "Report form is invalid");
                return Err(SubmitError::Invalid(errors));
            }
            (state.draft.clone(), state.picker.photo().cloned())
        };

        let receipt = self
            .workflow
            .submit(&draft, photo.as_ref(), &self.cancel)
            .await?;

        if !self.cancel.is_cancelled() {
            let mut state = self.state();
            state.draft = ReportDraft::default();
            state.errors.clear();
            state.picker.clear();
            state.completed = true;
        }

        Ok(receipt)
    }
}
