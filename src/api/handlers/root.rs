use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
pub struct ApiInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub status: String,
}

pub async fn root() -> impl IntoResponse {
    Json(json!({
        "name": "Bulletin API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Content service for a secondary school website",
        "status": "operational",
        "endpoints": {
            "health": "/health",
            "news": "/api/news",
            "announcements": "/api/announcements",
            "achievements": "/api/achievements",
            "events": "/api/events",
            "organizations": "/api/organizations",
            "contact": "/api/contact",
            "subscribers": "/api/subscribers",
            "statistics": "/api/statistics",
            "users": "/api/users",
            "upload": "/api/upload"
        }
    }))
}

pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339()
        })),
    )
}

pub async fn api_info() -> impl IntoResponse {
    Json(ApiInfo {
        name: "Bulletin API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "Content service for a secondary school website".to_string(),
        status: "operational".to_string(),
    })
}
