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
    domain::NewsArticle,
    error::{AppError, Result},
    notify::{NotificationReport, Publication},
};

const PAGE_SIZE: i64 = 10;

#[derive(Debug, Deserialize)]
pub struct CreateNewsRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(rename = "sendNotifications")]
    pub send_notifications: Option<bool>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<ListResponse<NewsArticle>>> {
    let page = params.page();
    let limit = params.limit(PAGE_SIZE);

    let repo = &state.service_context.news_repo;
    let total = repo.count().await?;
    let articles = repo.list(limit, (page - 1) * limit).await?;

    Ok(Json(ListResponse::new(
        articles,
        Pagination::new(total, page, limit),
    )))
}

pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateNewsRequest>,
) -> Result<(StatusCode, Json<PublishedResponse<NewsArticle>>)> {
    let article = NewsArticle {
        id: Uuid::new_v4(),
        title: required(request.title, "Title")?,
        author: required(request.author, "Author")?,
        content: required(request.content, "Content")?,
        images: request.images,
        created_at: Utc::now(),
    };

    let created = state.service_context.news_repo.create(article).await?;

    // Delivery outcome rides along in the response; it never fails the create
    let notifications = if request.send_notifications.unwrap_or(true) {
        state
            .service_context
            .notifier
            .broadcast(&Publication::News(&created))
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
    let id = parse_id(params.id, "News")?;

    let repo = &state.service_context.news_repo;
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("News article not found".to_string()))?;

    repo.delete(id).await?;

    Ok(Json(MessageResponse::new("News article deleted successfully")))
}
