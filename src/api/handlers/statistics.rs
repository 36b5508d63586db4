use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    api::{
        handlers::{parse_id, DocumentResponse, IdQuery, ListResponse},
        pagination::{ListQuery, Pagination},
        state::AppState,
    },
    domain::Statistics,
    error::{AppError, Result},
};

const PAGE_SIZE: i64 = 10;

#[derive(Debug, Deserialize)]
pub struct UpdateStatisticsRequest {
    pub teaching: Option<String>,
    pub nonteaching: Option<String>,
    pub students: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<ListResponse<Statistics>>> {
    let page = params.page();
    let limit = params.limit(PAGE_SIZE);

    let repo = &state.service_context.statistics_repo;
    let total = repo.count().await?;
    let statistics = repo.list(limit, (page - 1) * limit).await?;

    Ok(Json(ListResponse::new(
        statistics,
        Pagination::new(total, page, limit),
    )))
}

pub async fn update(
    State(state): State<AppState>,
    Query(params): Query<IdQuery>,
    Json(request): Json<UpdateStatisticsRequest>,
) -> Result<Json<DocumentResponse<Statistics>>> {
    let id = parse_id(params.id, "Statistics")?;

    // The admin form always submits all three counters together
    let (Some(teaching), Some(nonteaching), Some(students)) =
        (request.teaching, request.nonteaching, request.students)
    else {
        return Err(AppError::Validation("All fields are required".to_string()));
    };

    let repo = &state.service_context.statistics_repo;
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Statistics not found".to_string()))?;

    let updated = repo.update(id, &teaching, &nonteaching, &students).await?;

    Ok(Json(DocumentResponse::with_message(
        updated,
        "Statistics updated successfully",
    )))
}
