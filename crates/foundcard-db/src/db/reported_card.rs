use async_trait::async_trait;
use foundcard_core::constants::REPORTED_CARDS_TABLE;
use foundcard_core::models::NewReportedCard;
use foundcard_core::AppError;
use sqlx::PgPool;

/// Write side of the `reported_cards` table
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Insert one report. Nothing is read back.
    async fn insert(&self, record: NewReportedCard) -> Result<(), AppError>;
}

/// PostgreSQL implementation of [`ReportStore`]
#[derive(Clone)]
pub struct ReportedCardRepository {
    pool: PgPool,
}

impl ReportedCardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportStore for ReportedCardRepository {
    #[tracing::instrument(skip(self, record), fields(
        db.system = "postgresql",
        db.table = REPORTED_CARDS_TABLE,
        db.operation = "insert",
        reporter_id = %record.reporter_id,
        document_type = %record.document_type
    ))]
    async fn insert(&self, record: NewReportedCard) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO reported_cards (
                reporter_id, document_type, card_number, location,
                found_date, description, photo_url
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(record.reporter_id)
        .bind(record.document_type.as_str())
        .bind(&record.card_number)
        .bind(&record.location)
        .bind(record.found_date)
        .bind(&record.description)
        .bind(&record.photo_url)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                error = ?e,
                reporter_id = %record.reporter_id,
                has_photo = record.photo_url.is_some(),
                "Failed to insert reported card"
            );
            AppError::Database(e)
        })?;

        tracing::info!(
            reporter_id = %record.reporter_id,
            has_photo = record.photo_url.is_some(),
            "Reported card inserted"
        );

        Ok(())
    }
}
