use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A school achievement, grouped on the public site by `category`
/// (academic, sports, arts, ...). The grouping is computed at read time,
/// not stored as a relationship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub id: Uuid,
    pub category: String,
    pub headline: String,
    pub description: String,
    pub image_path: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
