use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A student club or organization profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: Uuid,
    #[serde(rename = "clubName")]
    pub club_name: String,
    pub description: String,
    pub officers: String,
    pub adviser: String,
    pub activities: String,
    pub image_path: String,
    pub logo_path: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
