pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::critique::handlers as critique;
use crate::evidence::handlers as evidence;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Critique API
        .route(
            "/api/v1/summaries/parse",
            post(critique::handle_parse_summary),
        )
        .route("/api/v1/documents/critique", post(critique::handle_critique))
        .route(
            "/api/v1/documents/critique/upload",
            post(critique::handle_critique_upload),
        )
        // Field statistics API
        .route("/api/v1/stats/priorities", post(evidence::handle_priorities))
        .route("/api/v1/stats/report", post(evidence::handle_report))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
