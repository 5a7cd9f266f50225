// Document generation core: normalize → plan → compose → assemble.
// Pure and synchronous end to end; the only async code in this crate lives in
// the HTTP and AI glue. Registries (styles, templates) are immutable statics.

pub mod adapter;
pub mod assemble;
pub mod compose;
pub mod docx;
pub mod handlers;
pub mod styles;
pub mod template;

use thiserror::Error;

/// Errors surfaced by the document-generation pipeline.
///
/// `Validation` is recoverable caller error; `UnknownStyle` and
/// `UnknownTemplate` indicate a registry gap and fail fast rather than
/// silently defaulting; `Build` wraps serialization/I-O failures and is safe
/// to retry since the pipeline is stateless.
#[derive(Debug, Error)]
pub enum DocError {
    #[error("missing required field `{field}`")]
    Validation { field: String },

    #[error("unknown style `{0}`")]
    UnknownStyle(String),

    #[error("unknown template `{0}`")]
    UnknownTemplate(String),

    #[error("failed to build document: {0}")]
    Build(#[source] anyhow::Error),
}

impl DocError {
    pub fn validation(field: impl Into<String>) -> Self {
        DocError::Validation {
            field: field.into(),
        }
    }

    pub fn build(cause: impl Into<anyhow::Error>) -> Self {
        DocError::Build(cause.into())
    }
}
