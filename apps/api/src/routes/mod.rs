pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::docgen;
use crate::llm_client;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Document API
        .route(
            "/api/v1/documents",
            post(docgen::handlers::handle_build_document),
        )
        // AI collaborator API
        .route(
            "/api/v1/analyze-job",
            post(llm_client::handlers::handle_analyze_job),
        )
        .route(
            "/api/v1/infer-profile",
            post(llm_client::handlers::handle_infer_profile),
        )
        .with_state(state)
}
