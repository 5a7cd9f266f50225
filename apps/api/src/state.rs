use crate::config::Config;
use crate::llm_client::AiClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. The style and template registries are immutable statics and
/// need no slot here.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub ai: AiClient,
}
