use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Liveness routes polled by the hosting platform.
pub fn router() -> Router {
    Router::new()
        .route("/", get(alive))
        .route("/health", get(alive))
        .layer(TraceLayer::new_for_http())
}

async fn alive() -> &'static str {
    "Bot is running"
}
