use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Where report photos are kept: an S3 bucket (AWS or any S3-compatible
/// endpoint) or a directory served by a static file server.
///
/// Read from `STORAGE_BACKEND`; the storage crate builds the matching client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    S3,
    Local,
}

impl StorageBackend {
    /// Name used in configuration and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::S3 => "s3",
            StorageBackend::Local => "local",
        }
    }
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "s3" => Ok(StorageBackend::S3),
            "local" => Ok(StorageBackend::Local),
            other => Err(anyhow::anyhow!(
                "Unknown photo storage backend '{}' (expected s3 or local)",
                other
            )),
        }
    }
}

impl Display for StorageBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
