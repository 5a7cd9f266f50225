//! Axum route handler for the document build endpoint.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::docgen::adapter::{normalize_letter, normalize_profile};
use crate::docgen::assemble::{assemble, persist_document, DocumentModel};
use crate::docgen::styles::StyleRegistry;
use crate::docgen::template::{self, DEFAULT_TEMPLATE};
use crate::errors::AppError;
use crate::models::profile::DocumentKind;
use crate::state::AppState;

const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Build request: which document, from which template, out of which input.
/// `input` stays raw JSON here — the adapter owns all shape decisions.
#[derive(Debug, Deserialize)]
pub struct BuildDocumentRequest {
    pub document_kind: DocumentKind,
    pub template_id: Option<String>,
    pub input: Value,
    pub filename_hint: Option<String>,
}

/// POST /api/v1/documents
///
/// Normalize → resolve plan → compose → assemble, then stream the DOCX back
/// with a download filename derived from the sanitized hint.
pub async fn handle_build_document(
    State(state): State<AppState>,
    Json(request): Json<BuildDocumentRequest>,
) -> Result<Response, AppError> {
    let template_id = request.template_id.as_deref().unwrap_or(DEFAULT_TEMPLATE);
    let plan = template::resolve(template_id, request.document_kind)?;

    let model = match request.document_kind {
        DocumentKind::Resume => DocumentModel::Resume(normalize_profile(&request.input)?),
        DocumentKind::CoverLetter => DocumentModel::Letter(normalize_letter(&request.input)?),
    };

    // The letter date is the one piece of non-input content in any document;
    // it enters the pure pipeline here, at the boundary.
    let bytes = assemble(
        plan,
        &model,
        StyleRegistry::builtin(),
        Utc::now().date_naive(),
    )?;

    let filename = download_filename(request.filename_hint.as_deref(), request.document_kind);
    info!(
        "Built {:?} document with template `{}` ({} bytes) as `{}`",
        request.document_kind,
        template_id,
        bytes.len(),
        filename
    );

    if let Some(dir) = &state.config.output_dir {
        let path = dir.join(&filename);
        persist_document(&bytes, &path)?;
        info!("Persisted document to {}", path.display());
    }

    Ok((
        [
            (header::CONTENT_TYPE, DOCX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        Bytes::from(bytes),
    )
        .into_response())
}

/// Reduces a caller hint to alphanumerics, space, hyphen, and underscore —
/// this sanitization is a boundary concern and never reaches the core.
fn download_filename(hint: Option<&str>, kind: DocumentKind) -> String {
    let fallback = match kind {
        DocumentKind::Resume => "resume",
        DocumentKind::CoverLetter => "cover_letter",
    };

    let sanitized: String = hint
        .unwrap_or(fallback)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let stem = sanitized.trim();
    let stem = if stem.is_empty() { fallback } else { stem };
    format!("{stem}.docx")
}
