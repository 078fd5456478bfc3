use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated user on whose behalf a report is submitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
