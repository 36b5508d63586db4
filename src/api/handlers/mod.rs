pub mod achievements;
pub mod announcements;
pub mod contact;
pub mod events;
pub mod news;
pub mod organizations;
pub mod root;
pub mod statistics;
pub mod subscribers;
pub mod upload;
pub mod users;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    api::pagination::Pagination,
    error::{AppError, Result},
    notify::NotificationReport,
};

/// `{success:true, data:[...], pagination:{...}}`
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub success: bool,
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>, pagination: Pagination) -> Self {
        Self {
            success: true,
            data,
            pagination,
        }
    }
}

/// `{success:true, data:{...}}`, with an optional confirmation message.
#[derive(Debug, Serialize)]
pub struct DocumentResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T: Serialize> DocumentResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data,
        }
    }
}

/// Create response for the content types that notify subscribers.
#[derive(Debug, Serialize)]
pub struct PublishedResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    #[serde(rename = "emailNotifications")]
    pub email_notifications: NotificationReport,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Deletion and partial update key off `?id=` rather than a path segment,
/// matching the public contract this service inherits.
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

/// Presence check for a required request field; blank input counts as
/// missing. The error names the field so the dashboard can show it.
pub(crate) fn required(value: Option<String>, name: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!("{} is required", name))),
    }
}

/// Validates `?id=` before any store access: missing and malformed ids are
/// both client errors, never queries.
pub(crate) fn parse_id(id: Option<String>, what: &str) -> Result<Uuid> {
    let id = id.ok_or_else(|| AppError::BadRequest(format!("{} ID is required", what)))?;

    Uuid::parse_str(&id).map_err(|_| {
        AppError::BadRequest(format!("Invalid {} ID format", what.to_lowercase()))
    })
}
