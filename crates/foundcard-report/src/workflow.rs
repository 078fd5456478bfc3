//! Submission workflow
//!
//! One submission is a straight line: identity check, optional photo upload,
//! record insert. Each step stops the run on failure and the outcome is
//! surfaced as exactly one toast (plus navigation home on success).
//!
//! Writes that have started always run to completion. Once the session's
//! cancellation token fires, the toast and the navigation are skipped.

use std::sync::Arc;

use foundcard_core::models::{NewReportedCard, PhotoFile, ReportDraft};
use foundcard_core::{ErrorMetadata, LogLevel};
use foundcard_db::ReportStore;
use foundcard_storage::{photo_key, Storage};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::error::SubmissionError;
use crate::identity::IdentityProvider;
use crate::messages;
use crate::navigation::{Navigator, Route};
use crate::notify::{Notifier, Toast};

/// What a successful submission stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub reporter_id: Uuid,
    pub photo_url: Option<String>,
}

pub struct SubmissionWorkflow {
    identity: Arc<dyn IdentityProvider>,
    storage: Arc<dyn Storage>,
    reports: Arc<dyn ReportStore>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    bucket: String,
}

impl SubmissionWorkflow {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        storage: Arc<dyn Storage>,
        reports: Arc<dyn ReportStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
        bucket: impl Into<String>,
    ) -> Self {
        Self {
            identity,
            storage,
            reports,
            notifier,
            navigator,
            bucket: bucket.into(),
        }
    }

    /// Run one submission and surface its outcome, unless `cancel` has fired
    #[tracing::instrument(skip_all, fields(has_photo = photo.is_some(), bucket = %self.bucket))]
    pub async fn submit(
        &self,
        draft: &ReportDraft,
        photo: Option<&PhotoFile>,
        cancel: &CancellationToken,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let result = self.execute(draft, photo).await;

        if let Err(ref e) = result {
            log_submission_error(e);
        }

        if cancel.is_cancelled() {
            tracing::debug!(success = result.is_ok(), "Form closed, outcome not shown");
            return result;
        }

        match result {
            Ok(ref receipt) => {
                tracing::info!(
                    reporter_id = %receipt.reporter_id,
                    has_photo = receipt.photo_url.is_some(),
                    "Report submitted"
                );
                self.notifier.notify(Toast::info(messages::SUBMITTED));
                self.navigator.navigate(Route::Home);
            }
            Err(ref e) => self.notifier.notify(Toast::error(e.toast_text())),
        }

        result
    }

    async fn execute(
        &self,
        draft: &ReportDraft,
        photo: Option<&PhotoFile>,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let identity = self
            .identity
            .current_user()
            .await
            .ok_or(SubmissionError::Unauthenticated)?;

        let photo_url = match photo {
            Some(photo) => Some(self.upload_photo(photo).await?),
            None => None,
        };

        let record = NewReportedCard::from_draft(draft, identity.user_id, photo_url.clone())
            .map_err(SubmissionError::InvalidDraft)?;

        self.reports
            .insert(record)
            .await
            .map_err(SubmissionError::InsertFailed)?;

        Ok(SubmissionReceipt {
            reporter_id: identity.user_id,
            photo_url,
        })
    }

    /// Upload under a fresh random key and resolve the public URL
    async fn upload_photo(&self, photo: &PhotoFile) -> Result<String, SubmissionError> {
        let key = photo_key(&photo.candidate);
        let start = std::time::Instant::now();

        self.storage
            .upload(&self.bucket, &key, photo.mime_type(), photo.data.clone())
            .await
            .map_err(SubmissionError::UploadFailed)?;

        let url = self
            .storage
            .public_url(&self.bucket, &key)
            .map_err(SubmissionError::UploadFailed)?;

        tracing::info!(
            key = %key,
            size_bytes = photo.size_bytes(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Photo uploaded"
        );

        Ok(url)
    }
}

fn log_submission_error(error: &SubmissionError) {
    match error {
        SubmissionError::InvalidDraft(e) | SubmissionError::InsertFailed(e) => {
            foundcard_infra::log_error(e)
        }
        other => match other.log_level() {
            LogLevel::Debug => {
                tracing::debug!(error = %other, code = other.error_code(), "Submission failed")
            }
            LogLevel::Warn => {
                tracing::warn!(error = %other, code = other.error_code(), "Submission failed")
            }
            LogLevel::Error => {
                tracing::error!(error = %other, code = other.error_code(), "Submission failed")
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{
        jpeg, valid_draft, MockIdentity, MockReportStore, MockStorage, RecordingNavigator,
        RecordingNotifier,
    };
    use foundcard_core::constants::DEFAULT_PHOTO_BUCKET;

    struct Harness {
        identity: Arc<MockIdentity>,
        storage: Arc<MockStorage>,
        reports: Arc<MockReportStore>,
        notifier: Arc<RecordingNotifier>,
        navigator: Arc<RecordingNavigator>,
    }

    impl Harness {
        fn signed_in() -> Self {
            Self {
                identity: Arc::new(MockIdentity::signed_in()),
                storage: Arc::new(MockStorage::new()),
                reports: Arc::new(MockReportStore::new()),
                notifier: Arc::new(RecordingNotifier::new()),
                navigator: Arc::new(RecordingNavigator::new()),
            }
        }

        fn workflow(&self) -> SubmissionWorkflow {
            SubmissionWorkflow::new(
                self.identity.clone(),
                self.storage.clone(),
                self.reports.clone(),
                self.notifier.clone(),
                self.navigator.clone(),
                DEFAULT_PHOTO_BUCKET,
            )
        }
    }

    #[tokio::test]
    async fn unauthenticated_makes_no_writes() {
        let harness = Harness {
            identity: Arc::new(MockIdentity::signed_out()),
            ..Harness::signed_in()
        };

        let result = harness
            .workflow()
            .submit(
                &valid_draft(),
                Some(&jpeg("recto.jpg", 1024)),
                &CancellationToken::new(),
            )
            .await;

        assert!(matches!(result, Err(SubmissionError::Unauthenticated)));
        assert_eq!(harness.storage.upload_count(), 0);
        assert!(harness.reports.records().is_empty());
        let toasts = harness.notifier.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title, messages::UNAUTHENTICATED.title);
        assert!(harness.navigator.routes().is_empty());
    }

    #[tokio::test]
    async fn without_photo_inserts_and_goes_home() {
        let harness = Harness::signed_in();

        let receipt = harness
            .workflow()
            .submit(&valid_draft(), None, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(receipt.photo_url, None);
        assert_eq!(receipt.reporter_id, harness.identity.user_id());
        let records = harness.reports.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].photo_url, None);
        assert_eq!(records[0].reporter_id, harness.identity.user_id());
        assert_eq!(harness.storage.upload_count(), 0);
        assert_eq!(harness.notifier.toasts()[0].title, "Signalement envoyé");
        assert_eq!(harness.navigator.routes(), vec![Route::Home]);
    }

    #[tokio::test]
    async fn photo_url_is_the_resolved_public_url() {
        let harness = Harness::signed_in();
        let photo = jpeg("recto.jpg", 2 * 1024 * 1024);

        let receipt = harness
            .workflow()
            .submit(&valid_draft(), Some(&photo), &CancellationToken::new())
            .await
            .unwrap();

        let uploads = harness.storage.uploads();
        assert_eq!(uploads.len(), 1);
        let (bucket, key) = &uploads[0];
        assert_eq!(bucket, DEFAULT_PHOTO_BUCKET);
        assert!(key.ends_with(".jpg"));

        let expected = harness.storage.public_url(bucket, key).unwrap();
        assert_eq!(receipt.photo_url.as_deref(), Some(expected.as_str()));
        assert_eq!(
            harness.reports.records()[0].photo_url.as_deref(),
            Some(expected.as_str())
        );
        assert_eq!(
            harness.storage.file(bucket, key).unwrap().len(),
            2 * 1024 * 1024
        );
    }

    #[tokio::test]
    async fn upload_failure_skips_insert() {
        let harness = Harness {
            storage: Arc::new(MockStorage::failing()),
            ..Harness::signed_in()
        };

        let result = harness
            .workflow()
            .submit(
                &valid_draft(),
                Some(&jpeg("recto.jpg", 1024)),
                &CancellationToken::new(),
            )
            .await;

        assert!(matches!(result, Err(SubmissionError::UploadFailed(_))));
        assert!(harness.reports.records().is_empty());
        assert_eq!(
            harness.notifier.toasts()[0].description,
            messages::UPLOAD_FAILED.description
        );
        assert!(harness.navigator.routes().is_empty());
    }

    #[tokio::test]
    async fn insert_failure_leaves_uploaded_photo() {
        let harness = Harness {
            reports: Arc::new(MockReportStore::failing()),
            ..Harness::signed_in()
        };

        let result = harness
            .workflow()
            .submit(
                &valid_draft(),
                Some(&jpeg("recto.jpg", 1024)),
                &CancellationToken::new(),
            )
            .await;

        assert!(matches!(result, Err(SubmissionError::InsertFailed(_))));
        assert_eq!(harness.storage.upload_count(), 1);
        let toasts = harness.notifier.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].description, messages::INSERT_FAILED.description);
    }

    #[tokio::test]
    async fn cancelled_session_gets_no_toast_or_navigation() {
        let harness = Harness::signed_in();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let receipt = harness
            .workflow()
            .submit(&valid_draft(), None, &cancel)
            .await
            .unwrap();

        assert!(receipt.photo_url.is_none());
        assert_eq!(harness.reports.records().len(), 1);
        assert!(harness.notifier.toasts().is_empty());
        assert!(harness.navigator.routes().is_empty());
    }

    #[tokio::test]
    async fn incomplete_draft_is_refused_before_insert() {
        let harness = Harness::signed_in();
        let draft = ReportDraft {
            found_date: "hier".to_string(),
            ..valid_draft()
        };

        let result = harness
            .workflow()
            .submit(&draft, None, &CancellationToken::new())
            .await;

        assert!(matches!(result, Err(SubmissionError::InvalidDraft(_))));
        assert!(harness.reports.records().is_empty());
    }
}
