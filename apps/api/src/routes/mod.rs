pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::export::handlers as export_handlers;
use crate::extraction::handlers;
use crate::state::AppState;

/// Room for multipart boundaries and headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Parse API
        .route("/api/v1/resumes/parse", post(handlers::handle_parse))
        .route("/api/v1/resumes/upload", post(handlers::handle_upload))
        // Export API
        .route(
            "/api/v1/resumes/export/json",
            post(export_handlers::handle_export_json),
        )
        .route(
            "/api/v1/resumes/export/txt",
            post(export_handlers::handle_export_txt),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
