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
        handlers::{parse_id, required, DocumentResponse, IdQuery, ListResponse, MessageResponse},
        pagination::{ListQuery, Pagination},
        state::AppState,
    },
    domain::Achievement,
    error::{AppError, Result},
};

const PAGE_SIZE: i64 = 10;

#[derive(Debug, Deserialize)]
pub struct CreateAchievementRequest {
    pub category: Option<String>,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub image_path: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<ListResponse<Achievement>>> {
    let page = params.page();
    let limit = params.limit(PAGE_SIZE);

    let repo = &state.service_context.achievement_repo;
    let total = repo.count().await?;
    let achievements = repo.list(limit, (page - 1) * limit).await?;

    Ok(Json(ListResponse::new(
        achievements,
        Pagination::new(total, page, limit),
    )))
}

pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateAchievementRequest>,
) -> Result<(StatusCode, Json<DocumentResponse<Achievement>>)> {
    let achievement = Achievement {
        id: Uuid::new_v4(),
        category: required(request.category, "Category")?,
        headline: required(request.headline, "Headline")?,
        description: required(request.description, "Description")?,
        image_path: request.image_path,
        created_at: Utc::now(),
    };

    let created = state
        .service_context
        .achievement_repo
        .create(achievement)
        .await?;

    Ok((StatusCode::CREATED, Json(DocumentResponse::new(created))))
}

pub async fn delete(
    State(state): State<AppState>,
    Query(params): Query<IdQuery>,
) -> Result<Json<MessageResponse>> {
    let id = parse_id(params.id, "Achievement")?;

    let repo = &state.service_context.achievement_repo;
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Achievement not found".to_string()))?;

    repo.delete(id).await?;

    Ok(Json(MessageResponse::new("Achievement deleted successfully")))
}
