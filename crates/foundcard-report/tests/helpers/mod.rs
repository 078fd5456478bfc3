use async_trait::async_trait;
use chrono::{Duration, Utc};
use foundcard_core::constants::DEFAULT_PHOTO_BUCKET;
use foundcard_core::models::{DocumentType, NewReportedCard};
use foundcard_core::{AppError, PhotoValidator};
use foundcard_db::ReportStore;
use foundcard_report::{
    ChannelNotifier, JwtSessionIdentity, ReportForm, Route, SessionClaims, SubmissionWorkflow,
    Toast, WatchNavigator,
};
use foundcard_storage::LocalStorage;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tokio::sync::{mpsc, watch};
use uuid::Uuid;

pub const JWT_SECRET: &str = "integration-secret-with-enough-length-42";
pub const BASE_URL: &str = "http://localhost:3000/storage";

/// Report store backed by a vector, standing in for PostgreSQL
#[derive(Default)]
pub struct InMemoryReportStore {
    rows: Mutex<Vec<NewReportedCard>>,
}

impl InMemoryReportStore {
    pub fn rows(&self) -> Vec<NewReportedCard> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportStore for InMemoryReportStore {
    async fn insert(&self, record: NewReportedCard) -> Result<(), AppError> {
        self.rows.lock().unwrap().push(record);
        Ok(())
    }
}

/// A form session wired to local storage in a temporary directory
pub struct TestApp {
    pub storage_dir: TempDir,
    pub storage: Arc<LocalStorage>,
    pub identity: Arc<JwtSessionIdentity>,
    pub reports: Arc<InMemoryReportStore>,
    pub toasts: mpsc::UnboundedReceiver<Toast>,
    pub route: watch::Receiver<Route>,
    pub form: ReportForm,
}

pub async fn setup_test_app() -> TestApp {
    let storage_dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(
        LocalStorage::new(storage_dir.path(), BASE_URL.to_string())
            .await
            .unwrap(),
    );
    let identity = Arc::new(JwtSessionIdentity::new(JWT_SECRET));
    let reports = Arc::new(InMemoryReportStore::default());
    let (notifier, toasts) = ChannelNotifier::new();
    let notifier = Arc::new(notifier);
    let (navigator, route) = WatchNavigator::new(Route::ReportCard);

    let workflow = Arc::new(SubmissionWorkflow::new(
        identity.clone(),
        storage.clone(),
        reports.clone(),
        notifier.clone(),
        Arc::new(navigator),
        DEFAULT_PHOTO_BUCKET,
    ));
    let form = ReportForm::new(workflow, PhotoValidator::default(), notifier);

    TestApp {
        storage_dir,
        storage,
        identity,
        reports,
        toasts,
        route,
        form,
    }
}

/// Sign a session token for a fresh user and return the user id
pub async fn sign_in(app: &TestApp) -> Uuid {
    let user_id = Uuid::new_v4();
    let now = Utc::now();
    let claims = SessionClaims {
        sub: user_id,
        email: Some("finder@example.com".to_string()),
        exp: (now + Duration::hours(1)).timestamp(),
        iat: now.timestamp(),
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .unwrap();
    app.identity.sign_in(token).await;
    user_id
}

pub fn fill_form(form: &ReportForm) {
    form.set_document_type(Some(DocumentType::Driver));
    form.set_card_number("0123456789");
    form.set_location("Parc de la Tête d'Or, Lyon");
    form.set_found_date("2026-10-15");
    form.set_description("");
}
