use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::{handlers, AppState};

/// All host routes; anything unmatched is served from the built frontend.
pub fn configure_routes(state: AppState, static_dir: &std::path::Path) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/data/platforms.json",
            get(handlers::catalog::platforms_document),
        )
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}
