use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A calendar event. `time` is free-form display text ("8:00 AM"), only
/// `date` participates in ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
