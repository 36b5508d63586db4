pub mod handlers;
pub mod middleware;
pub mod pagination;
pub mod state;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::{config::Settings, service::ServiceContext};
use state::AppState;

pub fn create_app(service_context: Arc<ServiceContext>, settings: Arc<Settings>) -> Router {
    let app_state = AppState::new(service_context, settings.clone());

    Router::new()
        // Root and health endpoints
        .route("/", get(handlers::root::root))
        .route("/health", get(handlers::root::health_check))
        .route("/api", get(handlers::root::api_info))
        // Content routes: public reads, admin-gated mutations
        .nest("/api/news", news_routes(app_state.clone()))
        .nest("/api/announcements", announcement_routes(app_state.clone()))
        .nest("/api/achievements", achievement_routes(app_state.clone()))
        .nest("/api/events", event_routes(app_state.clone()))
        .nest("/api/organizations", organization_routes(app_state.clone()))
        .nest("/api/contact", contact_routes(app_state.clone()))
        .nest("/api/subscribers", subscriber_routes(app_state.clone()))
        .nest("/api/statistics", statistics_routes(app_state.clone()))
        // Registration and login
        .route(
            "/api/users",
            post(handlers::users::register).put(handlers::users::login),
        )
        // Media upload (admin only); image bodies exceed the default limit
        .route(
            "/api/upload",
            post(handlers::upload::upload)
                .layer(DefaultBodyLimit::max(6 * 1024 * 1024))
                .route_layer(axum::middleware::from_fn_with_state(
                    app_state.clone(),
                    middleware::auth::require_admin,
                )),
        )
        // Stored media is served statically
        .nest_service("/uploads", ServeDir::new(&settings.uploads.dir))
        // Add state to the router
        .with_state(app_state)
        // Middleware
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive()) // Configure properly for production
        .layer(TraceLayer::new_for_http())
}

fn news_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::news::list))
        .merge(
            Router::new()
                .route("/add", post(handlers::news::create))
                .route("/delete", delete(handlers::news::delete))
                .route_layer(axum::middleware::from_fn_with_state(
                    state,
                    middleware::auth::require_admin,
                )),
        )
}

fn announcement_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::announcements::list))
        .merge(
            Router::new()
                .route("/add", post(handlers::announcements::create))
                .route("/delete", delete(handlers::announcements::delete))
                .route_layer(axum::middleware::from_fn_with_state(
                    state,
                    middleware::auth::require_admin,
                )),
        )
}

fn achievement_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::achievements::list))
        .merge(
            Router::new()
                .route("/add", post(handlers::achievements::create))
                .route("/delete", delete(handlers::achievements::delete))
                .route_layer(axum::middleware::from_fn_with_state(
                    state,
                    middleware::auth::require_admin,
                )),
        )
}

fn event_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::events::list))
        .merge(
            Router::new()
                .route("/add", post(handlers::events::create))
                .route("/delete", delete(handlers::events::delete))
                .route_layer(axum::middleware::from_fn_with_state(
                    state,
                    middleware::auth::require_admin,
                )),
        )
}

fn organization_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::organizations::list))
        .merge(
            Router::new()
                .route("/add", post(handlers::organizations::create))
                .route("/delete", delete(handlers::organizations::delete))
                .route_layer(axum::middleware::from_fn_with_state(
                    state,
                    middleware::auth::require_admin,
                )),
        )
}

fn contact_routes(state: AppState) -> Router<AppState> {
    // Submission is public (the website's contact form); reading and
    // managing inquiries is admin work
    Router::new()
        .route("/", post(handlers::contact::create))
        .merge(
            Router::new()
                .route(
                    "/",
                    get(handlers::contact::list)
                        .patch(handlers::contact::update)
                        .delete(handlers::contact::delete),
                )
                .route_layer(axum::middleware::from_fn_with_state(
                    state,
                    middleware::auth::require_admin,
                )),
        )
}

fn subscriber_routes(state: AppState) -> Router<AppState> {
    // Subscribing is public; the list and removals belong to the dashboard
    Router::new()
        .route("/add", post(handlers::subscribers::create))
        .merge(
            Router::new()
                .route("/", get(handlers::subscribers::list))
                .route("/delete", delete(handlers::subscribers::delete))
                .route_layer(axum::middleware::from_fn_with_state(
                    state,
                    middleware::auth::require_admin,
                )),
        )
}

fn statistics_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::statistics::list))
        .merge(
            Router::new()
                .route("/update", patch(handlers::statistics::update))
                .route_layer(axum::middleware::from_fn_with_state(
                    state,
                    middleware::auth::require_admin,
                )),
        )
}
