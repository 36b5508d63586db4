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
    domain::Organization,
    error::{AppError, Result},
};

const PAGE_SIZE: i64 = 10;

#[derive(Debug, Deserialize)]
pub struct CreateOrganizationRequest {
    #[serde(rename = "clubName")]
    pub club_name: Option<String>,
    pub description: Option<String>,
    pub officers: Option<String>,
    pub adviser: Option<String>,
    pub activities: Option<String>,
    pub image_path: Option<String>,
    pub logo_path: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<ListResponse<Organization>>> {
    let page = params.page();
    let limit = params.limit(PAGE_SIZE);

    let repo = &state.service_context.organization_repo;
    let total = repo.count().await?;
    let organizations = repo.list(limit, (page - 1) * limit).await?;

    Ok(Json(ListResponse::new(
        organizations,
        Pagination::new(total, page, limit),
    )))
}

pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateOrganizationRequest>,
) -> Result<(StatusCode, Json<DocumentResponse<Organization>>)> {
    let organization = Organization {
        id: Uuid::new_v4(),
        club_name: required(request.club_name, "Club Name")?,
        description: required(request.description, "Description")?,
        officers: required(request.officers, "Officers")?,
        adviser: required(request.adviser, "Adviser")?,
        activities: required(request.activities, "Activities")?,
        image_path: required(request.image_path, "Image path")?,
        logo_path: required(request.logo_path, "Logo path")?,
        created_at: Utc::now(),
    };

    let created = state
        .service_context
        .organization_repo
        .create(organization)
        .await?;

    Ok((StatusCode::CREATED, Json(DocumentResponse::new(created))))
}

pub async fn delete(
    State(state): State<AppState>,
    Query(params): Query<IdQuery>,
) -> Result<Json<MessageResponse>> {
    let id = parse_id(params.id, "Organization")?;

    let repo = &state.service_context.organization_repo;
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Organization not found".to_string()))?;

    repo.delete(id).await?;

    Ok(Json(MessageResponse::new("Organization deleted successfully")))
}
