// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use sqlx::SqlitePool;
use tower::ServiceExt;

use bulletin::{
    api,
    auth::AuthService,
    config::Settings,
    notify::Mailer,
    service::ServiceContext,
};

/// In-memory database, migrated schema, no mail relay.
pub async fn test_app() -> anyhow::Result<(Router, Arc<ServiceContext>)> {
    test_app_with_mailer(None).await
}

pub async fn test_app_with_mailer(
    mailer: Option<Arc<dyn Mailer>>,
) -> anyhow::Result<(Router, Arc<ServiceContext>)> {
    let pool = SqlitePool::connect(":memory:").await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let auth_service = Arc::new(AuthService::new("test-secret", 24));
    let service_context = Arc::new(ServiceContext::new(
        pool,
        auth_service,
        mailer,
        "http://localhost:8080".to_string(),
    ));

    let app = api::create_app(service_context.clone(), Arc::new(Settings::default()));

    Ok((app, service_context))
}

/// Registers an admin account directly and returns a bearer token for it.
pub async fn admin_token(ctx: &ServiceContext) -> anyhow::Result<String> {
    let hash = AuthService::hash_password("seeded-password").await?;
    let user = ctx.user_repo.create("admin", &hash).await?;

    Ok(ctx.auth_service.issue_token(&user)?)
}

/// Drives one request through the router and decodes the JSON response.
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> anyhow::Result<(StatusCode, serde_json::Value)> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };

    Ok((status, value))
}
