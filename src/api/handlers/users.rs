use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    api::{handlers::required, state::AppState},
    auth::AuthService,
    domain::User,
    error::{AppError, Result},
};

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Public view of an account; never carries the password hash.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub username: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub user: UserInfo,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: UserInfo,
    pub token: String,
    pub message: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>)> {
    let username = required(request.username, "Username")?;
    let password = required(request.password, "Password")?;

    if password.len() < 6 {
        return Err(AppError::Validation(
            "Password must be at least 6 characters".to_string(),
        ));
    }

    let repo = &state.service_context.user_repo;

    if repo.find_by_username(&username).await?.is_some() {
        return Err(AppError::Conflict("Username already exists".to_string()));
    }

    let password_hash = AuthService::hash_password(&password).await?;

    let user = repo
        .create(&username, &password_hash)
        .await
        .map_err(|e| match e {
            AppError::Database(msg) if msg.contains("UNIQUE") => {
                AppError::Conflict("Username already exists".to_string())
            }
            other => other,
        })?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            user: user.into(),
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<LoginResponse>> {
    let username = required(request.username, "Username")?;
    let password = required(request.password, "Password")?;

    let repo = &state.service_context.user_repo;

    // Unknown username and wrong password collapse into the same outcome;
    // the response never says which half was wrong
    let user = repo
        .find_by_username(&username)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    let password_hash = repo
        .password_hash(&username)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !AuthService::verify_password(&password, &password_hash).await? {
        return Err(AppError::InvalidCredentials);
    }

    let token = state.service_context.auth_service.issue_token(&user)?;

    Ok(Json(LoginResponse {
        success: true,
        user: user.into(),
        token,
        message: "Login successful".to_string(),
    }))
}
