use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A message submitted through the public contact form. `is_done` is the
/// admin's "handled" flag, the only mutable field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub address: String,
    #[serde(rename = "courseStrand")]
    pub course_strand: String,
    pub message: String,
    pub is_done: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
