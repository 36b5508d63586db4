use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Headcount figures shown on the public site. Stored as display strings
/// ("1,200") rather than numbers; a single row updated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statistics {
    pub id: Uuid,
    pub teaching: String,
    pub nonteaching: String,
    pub students: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
