//! Configuration module
//!
//! Settings for the database, the photo storage backend, session token
//! verification and the photo acceptance rules. Values are read from the
//! environment (a `.env` file is honoured) and validated before use.

use std::env;

use crate::constants::{ALLOWED_PHOTO_CONTENT_TYPES, DEFAULT_PHOTO_BUCKET, MAX_PHOTO_SIZE_BYTES};
use crate::storage_types::StorageBackend;

const MAX_CONNECTIONS: u32 = 5;
const CONNECTION_TIMEOUT_SECS: u64 = 30;
const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: String,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    // Storage configuration
    pub storage_backend: StorageBackend,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>, // S3-compatible providers (MinIO, Supabase storage, ...)
    pub aws_region: Option<String>,
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
    pub photo_bucket: String,
    // Photo acceptance rules
    pub max_photo_size_bytes: u64,
    pub allowed_photo_content_types: Vec<String>,
    // Session tokens are HS256 JWTs signed with this secret
    pub jwt_secret: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            database_url: String::new(),
            db_max_connections: MAX_CONNECTIONS,
            db_timeout_seconds: CONNECTION_TIMEOUT_SECS,
            storage_backend: StorageBackend::S3,
            s3_region: None,
            s3_endpoint: None,
            aws_region: None,
            local_storage_path: None,
            local_storage_base_url: None,
            photo_bucket: DEFAULT_PHOTO_BUCKET.to_string(),
            max_photo_size_bytes: MAX_PHOTO_SIZE_BYTES,
            allowed_photo_content_types: ALLOWED_PHOTO_CONTENT_TYPES
                .iter()
                .map(|ct| ct.to_string())
                .collect(),
            jwt_secret: String::new(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let defaults = Config::default();

        let storage_backend = match env::var("STORAGE_BACKEND") {
            Ok(value) if !value.is_empty() => value.parse()?,
            _ => defaults.storage_backend,
        };

        let config = Config {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?,
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.db_max_connections),
            db_timeout_seconds: env::var("DB_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.db_timeout_seconds),
            storage_backend,
            s3_region: env::var("S3_REGION").ok().filter(|s| !s.is_empty()),
            s3_endpoint: env::var("S3_ENDPOINT").ok().filter(|s| !s.is_empty()),
            aws_region: env::var("AWS_REGION").ok().filter(|s| !s.is_empty()),
            local_storage_path: env::var("LOCAL_STORAGE_PATH")
                .ok()
                .filter(|s| !s.is_empty()),
            local_storage_base_url: env::var("LOCAL_STORAGE_BASE_URL")
                .ok()
                .filter(|s| !s.is_empty()),
            photo_bucket: env::var("PHOTO_BUCKET")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.photo_bucket),
            max_photo_size_bytes: env::var("MAX_PHOTO_SIZE_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_photo_size_bytes),
            allowed_photo_content_types: env::var("ALLOWED_PHOTO_CONTENT_TYPES")
                .ok()
                .map(|s| parse_list(&s))
                .filter(|list| !list.is_empty())
                .unwrap_or(defaults.allowed_photo_content_types),
            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET must be set"))?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or(defaults.log_format)
                .to_lowercase(),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(anyhow::anyhow!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            ));
        }

        if !self.database_url.starts_with("postgresql://")
            && !self.database_url.starts_with("postgres://")
        {
            return Err(anyhow::anyhow!(
                "DATABASE_URL must be a valid PostgreSQL connection string"
            ));
        }

        if self.photo_bucket.contains('/') || self.photo_bucket.contains("..") {
            return Err(anyhow::anyhow!(
                "PHOTO_BUCKET must be a plain bucket name"
            ));
        }

        if self.max_photo_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_PHOTO_SIZE_BYTES must be greater than 0"));
        }

        match self.storage_backend {
            StorageBackend::S3 => {
                if self.s3_region.is_none() && self.aws_region.is_none() {
                    return Err(anyhow::anyhow!(
                        "S3_REGION or AWS_REGION must be set when using S3 storage backend"
                    ));
                }
            }
            StorageBackend::Local => {
                if self.local_storage_path.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_PATH must be set when using local storage backend"
                    ));
                }
                if self.local_storage_base_url.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_BASE_URL must be set when using local storage backend"
                    ));
                }
            }
        }

        Ok(())
    }

    /// Region used by the S3 backend, preferring `S3_REGION` over `AWS_REGION`
    pub fn s3_region(&self) -> Option<&str> {
        self.s3_region.as_deref().or(self.aws_region.as_deref())
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
