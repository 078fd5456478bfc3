//! Photo picker
//!
//! Click-to-browse and drag-and-drop selection of the document photo. The
//! picker validates what it is given, keeps at most one accepted photo and
//! reports refusals as toasts. It never uploads anything.

use std::sync::Arc;

use foundcard_core::models::{CandidateFile, PhotoFile};
use foundcard_core::{FileVerdict, PhotoValidator, RejectReason};

use crate::messages;
use crate::notify::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerState {
    Idle,
    Dragging,
    Attached,
}

/// Result of a drop or a browse selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// The file is now the attached photo
    Accepted(CandidateFile),
    /// The file was refused; the previous photo, if any, is still attached
    Rejected(RejectReason),
    /// Nothing was delivered
    Empty,
}

pub struct PhotoPicker {
    validator: PhotoValidator,
    notifier: Arc<dyn Notifier>,
    dragging: bool,
    attached: Option<PhotoFile>,
}

impl PhotoPicker {
    pub fn new(validator: PhotoValidator, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            validator,
            notifier,
            dragging: false,
            attached: None,
        }
    }

    pub fn state(&self) -> PickerState {
        if self.dragging {
            PickerState::Dragging
        } else if self.attached.is_some() {
            PickerState::Attached
        } else {
            PickerState::Idle
        }
    }

    pub fn photo(&self) -> Option<&PhotoFile> {
        self.attached.as_ref()
    }

    /// A drag entered the drop zone; only drags that carry files highlight it
    pub fn drag_enter(&mut self, has_files: bool) {
        if has_files {
            self.dragging = true;
        }
    }

    pub fn drag_leave(&mut self) {
        self.dragging = false;
    }

    /// Files dropped on the zone. Only the first one is considered.
    pub fn drop(&mut self, files: Vec<PhotoFile>) -> PickOutcome {
        self.dragging = false;
        self.offer(files)
    }

    /// Files chosen in the browse dialog. Only the first one is considered.
    pub fn pick(&mut self, files: Vec<PhotoFile>) -> PickOutcome {
        self.offer(files)
    }

    /// Remove the attached photo
    pub fn clear(&mut self) -> Option<PhotoFile> {
        self.attached.take()
    }

    fn offer(&mut self, files: Vec<PhotoFile>) -> PickOutcome {
        let Some(file) = files.into_iter().next() else {
            return PickOutcome::Empty;
        };

        match self.validator.check(&file.candidate) {
            FileVerdict::Accept => {
                tracing::debug!(
                    name = %file.name(),
                    size_bytes = file.size_bytes(),
                    replaced = self.attached.is_some(),
                    "Photo attached"
                );
                let candidate = file.candidate.clone();
                self.attached = Some(file);
                PickOutcome::Accepted(candidate)
            }
            FileVerdict::Reject(reason) => {
                tracing::debug!(
                    name = %file.name(),
                    mime_type = %file.mime_type(),
                    size_bytes = file.size_bytes(),
                    reason = %reason,
                    "Photo rejected"
                );
                self.notifier
                    .notify(messages::rejection(reason, self.validator.max_size_bytes()));
                PickOutcome::Rejected(reason)
            }
        }
    }
}
