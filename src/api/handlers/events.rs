use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    api::{
        handlers::{parse_id, required, IdQuery, ListResponse, MessageResponse, PublishedResponse},
        pagination::{ListQuery, Pagination},
        state::AppState,
    },
    domain::Event,
    error::{AppError, Result},
    notify::{NotificationReport, Publication},
};

const PAGE_SIZE: i64 = 10;

#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "sendNotifications")]
    pub send_notifications: Option<bool>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<ListResponse<Event>>> {
    let page = params.page();
    let limit = params.limit(PAGE_SIZE);

    // Events come back in calendar order (earliest first), unlike the
    // newest-first ordering of the other content types
    let repo = &state.service_context.event_repo;
    let total = repo.count().await?;
    let events = repo.list(limit, (page - 1) * limit).await?;

    Ok(Json(ListResponse::new(
        events,
        Pagination::new(total, page, limit),
    )))
}

pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<PublishedResponse<Event>>)> {
    let date_str = required(request.date, "Date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Date must be a valid calendar date (YYYY-MM-DD)".to_string()))?;

    let event = Event {
        id: Uuid::new_v4(),
        title: required(request.title, "Title")?,
        date,
        time: required(request.time, "Time")?,
        location: required(request.location, "Location")?,
        created_at: Utc::now(),
    };

    let created = state.service_context.event_repo.create(event).await?;

    let notifications = if request.send_notifications.unwrap_or(true) {
        state
            .service_context
            .notifier
            .broadcast(&Publication::Event(&created))
            .await
    } else {
        NotificationReport::skipped()
    };

    Ok((
        StatusCode::CREATED,
        Json(PublishedResponse {
            success: true,
            data: created,
            email_notifications: notifications,
        }),
    ))
}

pub async fn delete(
    State(state): State<AppState>,
    Query(params): Query<IdQuery>,
) -> Result<Json<MessageResponse>> {
    let id = parse_id(params.id, "Event")?;

    let repo = &state.service_context.event_repo;
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

    repo.delete(id).await?;

    Ok(Json(MessageResponse::new("Event deleted successfully")))
}
