//! Service wiring
//!
//! Builds the concrete collaborators from configuration and hands out form
//! sessions bound to them.

use anyhow::{Context, Result};
use foundcard_core::{Config, PhotoValidator};
use foundcard_db::{create_pool, run_migrations, ReportStore, ReportedCardRepository};
use foundcard_infra::{init_telemetry, LogFormat};
use foundcard_storage::{create_storage, Storage};
use sqlx::PgPool;
use std::sync::Arc;

use crate::form::ReportForm;
use crate::identity::JwtSessionIdentity;
use crate::navigation::Navigator;
use crate::notify::Notifier;
use crate::workflow::SubmissionWorkflow;

/// Long-lived collaborators shared by every form session
pub struct ReportServices {
    config: Config,
    pool: PgPool,
    identity: Arc<JwtSessionIdentity>,
    storage: Arc<dyn Storage>,
    reports: Arc<dyn ReportStore>,
}

/// Load configuration from the environment, install tracing, then build the services
pub async fn initialize_from_env() -> Result<ReportServices> {
    let config = Config::from_env().context("Configuration validation failed")?;

    let format = config
        .log_format
        .parse::<LogFormat>()
        .map_err(|e| anyhow::anyhow!(e))?;
    init_telemetry(format, &config.environment)
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    initialize(config).await
}

/// Build the services. The database pool connects on first use.
pub async fn initialize(config: Config) -> Result<ReportServices> {
    config
        .validate()
        .context("Configuration validation failed")?;

    let pool = create_pool(&config)?;

    tracing::info!("Initializing storage abstraction...");
    let storage = create_storage(&config).await?;
    tracing::info!(
        backend = ?storage.backend_type(),
        bucket = %config.photo_bucket,
        "Storage abstraction initialized successfully"
    );

    let identity = Arc::new(JwtSessionIdentity::from_config(&config));
    let reports: Arc<dyn ReportStore> = Arc::new(ReportedCardRepository::new(pool.clone()));

    Ok(ReportServices {
        config,
        pool,
        identity,
        storage,
        reports,
    })
}

impl ReportServices {
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Session identity; the host signs users in and out through it
    pub fn identity(&self) -> &Arc<JwtSessionIdentity> {
        &self.identity
    }

    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// Apply pending database migrations
    pub async fn migrate(&self) -> Result<()> {
        run_migrations(&self.pool).await
    }

    pub fn workflow(
        &self,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> SubmissionWorkflow {
        SubmissionWorkflow::new(
            self.identity.clone(),
            self.storage.clone(),
            self.reports.clone(),
            notifier,
            navigator,
            self.config.photo_bucket.clone(),
        )
    }

    /// Start a new form session
    pub fn open_form(
        &self,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> ReportForm {
        let workflow = Arc::new(self.workflow(notifier.clone(), navigator));
        ReportForm::new(workflow, PhotoValidator::from_config(&self.config), notifier)
    }
}
