use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    api::{
        handlers::{parse_id, required, IdQuery, ListResponse, MessageResponse, PublishedResponse},
        pagination::{ListQuery, Pagination},
        state::AppState,
    },
    domain::Announcement,
    error::{AppError, Result},
    notify::{NotificationReport, Publication},
};

const PAGE_SIZE: i64 = 10;

#[derive(Debug, Deserialize)]
pub struct CreateAnnouncementRequest {
    pub content: Option<String>,
    #[serde(rename = "sendNotifications")]
    pub send_notifications: Option<bool>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<ListResponse<Announcement>>> {
    let page = params.page();
    let limit = params.limit(PAGE_SIZE);

    let repo = &state.service_context.announcement_repo;
    let total = repo.count().await?;
    let announcements = repo.list(limit, (page - 1) * limit).await?;

    Ok(Json(ListResponse::new(
        announcements,
        Pagination::new(total, page, limit),
    )))
}

pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateAnnouncementRequest>,
) -> Result<(StatusCode, Json<PublishedResponse<Announcement>>)> {
    let announcement = Announcement {
        id: Uuid::new_v4(),
        content: required(request.content, "Content")?,
        created_at: Utc::now(),
    };

    let created = state
        .service_context
        .announcement_repo
        .create(announcement)
        .await?;

    let notifications = if request.send_notifications.unwrap_or(true) {
        state
            .service_context
            .notifier
            .broadcast(&Publication::Announcement(&created))
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
    let id = parse_id(params.id, "Announcement")?;

    let repo = &state.service_context.announcement_repo;
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Announcement not found".to_string()))?;

    repo.delete(id).await?;

    Ok(Json(MessageResponse::new("Announcement deleted successfully")))
}
