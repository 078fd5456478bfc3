//! Mock collaborators that record what the report flow asks of them

use async_trait::async_trait;
use foundcard_core::models::{Identity, NewReportedCard};
use foundcard_core::AppError;
use foundcard_db::ReportStore;
use foundcard_storage::{Storage, StorageBackend, StorageError, StorageResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use uuid::Uuid;

use crate::identity::IdentityProvider;
use crate::navigation::{Navigator, Route};
use crate::notify::{Notifier, Toast};

pub struct MockIdentity {
    user: Option<Identity>,
}

impl MockIdentity {
    pub fn signed_in() -> Self {
        Self {
            user: Some(Identity {
                user_id: Uuid::new_v4(),
                email: Some("finder@example.com".to_string()),
            }),
        }
    }

    pub fn signed_out() -> Self {
        Self { user: None }
    }

    pub fn user_id(&self) -> Uuid {
        self.user.as_ref().map(|u| u.user_id).unwrap()
    }
}

#[async_trait]
impl IdentityProvider for MockIdentity {
    async fn current_user(&self) -> Option<Identity> {
        self.user.clone()
    }
}

/// Storage keeping objects in memory, keyed by (bucket, key)
pub struct MockStorage {
    files: Arc<Mutex<HashMap<(String, String), Vec<u8>>>>,
    uploads: Arc<Mutex<Vec<(String, String)>>>,
    fail_uploads: bool,
}

impl MockStorage {
    pub fn new() -> Self {
        Self {
            files: Arc::new(Mutex::new(HashMap::new())),
            uploads: Arc::new(Mutex::new(Vec::new())),
            fail_uploads: false,
        }
    }

    /// Every upload fails with a backend error
    pub fn failing() -> Self {
        Self {
            fail_uploads: true,
            ..Self::new()
        }
    }

    /// Attempted uploads, as (bucket, key), in order
    pub fn uploads(&self) -> Vec<(String, String)> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    pub fn file(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
        self.files
            .lock()
            .unwrap()
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }
}

impl Default for MockStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MockStorage {
    async fn upload(
        &self,
        bucket: &str,
        storage_key: &str,
        _content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<()> {
        self.uploads
            .lock()
            .unwrap()
            .push((bucket.to_string(), storage_key.to_string()));
        if self.fail_uploads {
            return Err(StorageError::BackendError("storage unavailable".to_string()));
        }
        self.files
            .lock()
            .unwrap()
            .insert((bucket.to_string(), storage_key.to_string()), data);
        Ok(())
    }

    fn public_url(&self, bucket: &str, storage_key: &str) -> StorageResult<String> {
        Ok(format!("https://storage.example.com/{}/{}", bucket, storage_key))
    }

    async fn download(&self, bucket: &str, storage_key: &str) -> StorageResult<Vec<u8>> {
        self.file(bucket, storage_key)
            .ok_or_else(|| StorageError::NotFound(storage_key.to_string()))
    }

    async fn exists(&self, bucket: &str, storage_key: &str) -> StorageResult<bool> {
        Ok(self.file(bucket, storage_key).is_some())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}

/// Report store keeping inserted rows in memory
pub struct MockReportStore {
    records: Mutex<Vec<NewReportedCard>>,
    fail_inserts: bool,
    gate: Option<Arc<Notify>>,
}

impl MockReportStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail_inserts: false,
            gate: None,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_inserts: true,
            ..Self::new()
        }
    }

    /// Inserts wait until the returned handle is notified
    pub fn gated() -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        (
            Self {
                gate: Some(gate.clone()),
                ..Self::new()
            },
            gate,
        )
    }

    pub fn records(&self) -> Vec<NewReportedCard> {
        self.records.lock().unwrap().clone()
    }
}

impl Default for MockReportStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportStore for MockReportStore {
    async fn insert(&self, record: NewReportedCard) -> Result<(), AppError> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if self.fail_inserts {
            return Err(AppError::Internal("database unavailable".to_string()));
        }
        self.records.lock().unwrap().push(record);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().unwrap().push(toast);
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}
