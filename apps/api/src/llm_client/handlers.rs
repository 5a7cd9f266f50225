//! Axum route handlers for the AI endpoints.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::docgen::adapter::normalize_profile;
use crate::errors::AppError;
use crate::llm_client::prompts::{analyze_job_prompt, infer_profile_prompt};
use crate::llm_client::{strip_json_fences, Provider};
use crate::models::profile::Profile;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeJobRequest {
    pub job_description: String,
    #[serde(default)]
    pub provider: Provider,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeJobResponse {
    pub analysis: String,
}

#[derive(Debug, Deserialize)]
pub struct InferProfileRequest {
    pub resume_text: String,
    #[serde(default)]
    pub provider: Provider,
}

#[derive(Debug, Serialize)]
pub struct InferProfileResponse {
    pub profile: Profile,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze-job
///
/// Runs the raw analysis prompt against the chosen provider and returns the
/// text unchanged — what goes in a document is never decided here.
pub async fn handle_analyze_job(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeJobRequest>,
) -> Result<Json<AnalyzeJobResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let prompt = analyze_job_prompt(&request.job_description);
    let analysis = state.ai.generate(request.provider, &prompt).await?;

    Ok(Json(AnalyzeJobResponse { analysis }))
}

/// POST /api/v1/infer-profile
///
/// Asks the provider for a profile-shaped JSON object, then pushes it
/// through the document-model adapter. Malformed AI output is a validation
/// error surfaced to the caller, not a server bug.
pub async fn handle_infer_profile(
    State(state): State<AppState>,
    Json(request): Json<InferProfileRequest>,
) -> Result<Json<InferProfileResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let prompt = infer_profile_prompt(&request.resume_text);
    let raw = state.ai.generate(request.provider, &prompt).await?;

    let value: serde_json::Value =
        serde_json::from_str(strip_json_fences(&raw)).map_err(|_| {
            AppError::Validation("AI response is not valid profile JSON".to_string())
        })?;
    let profile = normalize_profile(&value)?;

    Ok(Json(InferProfileResponse { profile }))
}
