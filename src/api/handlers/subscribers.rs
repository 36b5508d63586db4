use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;
use validator::ValidateEmail;

use crate::{
    api::{
        handlers::{parse_id, required, DocumentResponse, IdQuery, ListResponse, MessageResponse},
        pagination::{ListQuery, Pagination},
        state::AppState,
    },
    domain::Subscriber,
    error::{AppError, Result},
};

const PAGE_SIZE: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    pub email: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<ListResponse<Subscriber>>> {
    let page = params.page();
    let limit = params.limit(PAGE_SIZE);

    let repo = &state.service_context.subscriber_repo;
    let total = repo.count().await?;
    let subscribers = repo.list(limit, (page - 1) * limit).await?;

    Ok(Json(ListResponse::new(
        subscribers,
        Pagination::new(total, page, limit),
    )))
}

pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<SubscribeRequest>,
) -> Result<(StatusCode, Json<DocumentResponse<Subscriber>>)> {
    let email = required(request.email, "Email")?;
    if !email.validate_email() {
        return Err(AppError::Validation(
            "Please enter a valid email address".to_string(),
        ));
    }

    let repo = &state.service_context.subscriber_repo;

    if repo.find_by_email(&email).await?.is_some() {
        return Err(AppError::Conflict("Email is already subscribed".to_string()));
    }

    let subscriber = Subscriber {
        id: Uuid::new_v4(),
        email,
        created_at: Utc::now(),
    };

    // The unique index backstops the pre-check under concurrent subscribes
    let created = repo.create(subscriber).await.map_err(|e| match e {
        AppError::Database(msg) if msg.contains("UNIQUE") => {
            AppError::Conflict("Email is already subscribed".to_string())
        }
        other => other,
    })?;

    Ok((
        StatusCode::CREATED,
        Json(DocumentResponse::with_message(
            created,
            "Subscriber added successfully",
        )),
    ))
}

pub async fn delete(
    State(state): State<AppState>,
    Query(params): Query<IdQuery>,
) -> Result<Json<MessageResponse>> {
    let id = parse_id(params.id, "Subscriber")?;

    let repo = &state.service_context.subscriber_repo;
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Subscriber not found".to_string()))?;

    repo.delete(id).await?;

    Ok(Json(MessageResponse::new("Subscriber deleted successfully")))
}
