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
        pagination::{lenient_i64, Pagination, MAX_PAGE_SIZE},
        state::AppState,
    },
    domain::ContactInquiry,
    error::{AppError, Result},
};

/// The inquiries dashboard pulls large pages; matches the inherited default.
const PAGE_SIZE: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct ContactListQuery {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub limit: Option<i64>,
    /// Optional filter on handled state.
    pub is_done: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct CreateContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "courseStrand")]
    pub course_strand: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateContactRequest {
    pub is_done: Option<bool>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ContactListQuery>,
) -> Result<Json<ListResponse<ContactInquiry>>> {
    let page = params.page.filter(|p| *p >= 1).unwrap_or(1);
    let limit = params
        .limit
        .filter(|l| *l >= 1)
        .unwrap_or(PAGE_SIZE)
        .min(MAX_PAGE_SIZE);

    let repo = &state.service_context.contact_repo;
    let total = repo.count(params.is_done).await?;
    let inquiries = repo.list(limit, (page - 1) * limit, params.is_done).await?;

    Ok(Json(ListResponse::new(
        inquiries,
        Pagination::new(total, page, limit),
    )))
}

pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateContactRequest>,
) -> Result<(StatusCode, Json<DocumentResponse<ContactInquiry>>)> {
    let name = required(request.name, "Name")?;

    let email = required(request.email, "Email")?;
    if !email.validate_email() {
        return Err(AppError::Validation(
            "Please enter a valid email address".to_string(),
        ));
    }

    let inquiry = ContactInquiry {
        id: Uuid::new_v4(),
        name,
        email,
        mobile: required(request.mobile, "Mobile")?,
        address: required(request.address, "Address")?,
        course_strand: required(request.course_strand, "Course/SHS Strand")?,
        message: required(request.message, "Message")?,
        is_done: false,
        created_at: Utc::now(),
    };

    let created = state.service_context.contact_repo.create(inquiry).await?;

    Ok((
        StatusCode::CREATED,
        Json(DocumentResponse::with_message(
            created,
            "Message sent successfully",
        )),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Query(params): Query<IdQuery>,
    Json(request): Json<UpdateContactRequest>,
) -> Result<Json<DocumentResponse<ContactInquiry>>> {
    let id = parse_id(params.id, "Contact")?;

    let is_done = request
        .is_done
        .ok_or_else(|| AppError::Validation("is_done is required".to_string()))?;

    let repo = &state.service_context.contact_repo;
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))?;

    let updated = repo.set_done(id, is_done).await?;

    Ok(Json(DocumentResponse::with_message(
        updated,
        "Contact updated successfully",
    )))
}

pub async fn delete(
    State(state): State<AppState>,
    Query(params): Query<IdQuery>,
) -> Result<Json<MessageResponse>> {
    let id = parse_id(params.id, "Contact")?;

    let repo = &state.service_context.contact_repo;
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))?;

    repo.delete(id).await?;

    Ok(Json(MessageResponse::new("Contact deleted successfully")))
}
