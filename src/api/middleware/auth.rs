use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::{api::state::AppState, domain::User, error::AppError};

#[derive(Clone)]
pub struct CurrentUser {
    pub user: User,
}

/// Gate for admin mutations. Every protected route verifies the bearer
/// token server-side; a token that decodes but names a deleted user is
/// rejected too.
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&request).ok_or(AppError::Unauthorized)?;

    let claims = state.service_context.auth_service.verify_token(token)?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::Unauthorized)?;

    let user = state
        .service_context
        .user_repo
        .find_by_id(user_id)
        .await?
        .ok_or(AppError::Unauthorized)?;

    tracing::debug!("Admin request authorized for {}", user.username);

    request.extensions_mut().insert(CurrentUser { user });

    Ok(next.run(request).await)
}

fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
