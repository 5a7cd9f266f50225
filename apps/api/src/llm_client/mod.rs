//! AI collaborator — the single point of entry for all model-provider calls.
//!
//! No other module may talk to a provider API directly. Providers form a
//! capability interface (`AiProvider`) with one implementation per vendor,
//! selected through the `Provider` enum — never by string matching. A
//! provider whose key is not configured is absent, and asking for it is a
//! `NotConfigured` error rather than a silent fallback.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod handlers;
pub mod prompts;

use crate::config::Config;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const GEMINI_MODEL: &str = "gemini-pro";

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const ANTHROPIC_MODEL: &str = "claude-3-opus-20240229";

const MAX_TOKENS: u32 = 2000;
const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT_SECS: u64 = 120;

// ────────────────────────────────────────────────────────────────────────────
// Provider selection and errors
// ────────────────────────────────────────────────────────────────────────────

/// The supported model vendors. Callers pick one per request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Gemini,
    #[serde(alias = "claude")]
    Anthropic,
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("Provider `{0}` is not configured; set its API key")]
    NotConfigured(&'static str),
}

impl LlmError {
    fn is_retryable(&self) -> bool {
        match self {
            LlmError::Http(_) => true,
            LlmError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// One text-generation capability. Implementations make a single attempt;
/// retry policy lives in `AiClient`.
#[async_trait]
pub trait AiProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Gemini
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}

pub struct GeminiProvider {
    client: Client,
    api_key: String,
}

#[async_trait]
impl AiProvider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!(
            "{GEMINI_API_URL}/{GEMINI_MODEL}:generateContent?key={}",
            self.api_key
        );
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
        };

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let parsed: GeminiResponse = response.json().await?;
        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or(LlmError::EmptyContent)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Anthropic
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    input_tokens: u32,
    output_tokens: u32,
}

pub struct AnthropicProvider {
    client: Client,
    api_key: String,
}

#[async_trait]
impl AiProvider for AnthropicProvider {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let body = AnthropicRequest {
            model: ANTHROPIC_MODEL,
            max_tokens: MAX_TOKENS,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let parsed: AnthropicResponse = response.json().await?;
        debug!(
            "Anthropic call succeeded: input_tokens={}, output_tokens={}",
            parsed.usage.input_tokens, parsed.usage.output_tokens
        );

        parsed
            .content
            .into_iter()
            .find(|block| block.block_type == "text")
            .and_then(|block| block.text)
            .ok_or(LlmError::EmptyContent)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Client facade
// ────────────────────────────────────────────────────────────────────────────

/// Holds whichever providers are configured and dispatches per request.
#[derive(Clone)]
pub struct AiClient {
    gemini: Option<std::sync::Arc<GeminiProvider>>,
    anthropic: Option<std::sync::Arc<AnthropicProvider>>,
}

impl AiClient {
    /// Builds providers for every API key present in the config. A service
    /// with no keys still starts — document generation does not need AI.
    pub fn from_config(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            gemini: config.gemini_api_key.clone().map(|api_key| {
                std::sync::Arc::new(GeminiProvider {
                    client: client.clone(),
                    api_key,
                })
            }),
            anthropic: config.anthropic_api_key.clone().map(|api_key| {
                std::sync::Arc::new(AnthropicProvider {
                    client: client.clone(),
                    api_key,
                })
            }),
        }
    }

    pub fn configured_providers(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.gemini.is_some() {
            names.push("gemini");
        }
        if self.anthropic.is_some() {
            names.push("anthropic");
        }
        names
    }

    /// Generates text with the chosen provider, retrying on 429/5xx and
    /// transport errors with exponential backoff.
    pub async fn generate(&self, provider: Provider, prompt: &str) -> Result<String, LlmError> {
        let target: &dyn AiProvider = match provider {
            Provider::Gemini => self
                .gemini
                .as_deref()
                .ok_or(LlmError::NotConfigured("gemini"))?,
            Provider::Anthropic => self
                .anthropic
                .as_deref()
                .ok_or(LlmError::NotConfigured("anthropic"))?,
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            match target.generate(prompt).await {
                Ok(text) => return Ok(text),
                Err(err) if err.is_retryable() => {
                    warn!("LLM provider error: {err}");
                    last_error = Some(err);
                }
                Err(err) => return Err(err),
            }
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_provider_deserializes_vendor_names_and_alias() {
        let provider: Provider = serde_json::from_str("\"gemini\"").unwrap();
        assert_eq!(provider, Provider::Gemini);
        let provider: Provider = serde_json::from_str("\"anthropic\"").unwrap();
        assert_eq!(provider, Provider::Anthropic);
        let provider: Provider = serde_json::from_str("\"claude\"").unwrap();
        assert_eq!(provider, Provider::Anthropic);
    }

    #[test]
    fn test_retryable_classification() {
        let rate_limited = LlmError::Api {
            status: 429,
            message: String::new(),
        };
        let server_error = LlmError::Api {
            status: 503,
            message: String::new(),
        };
        let bad_request = LlmError::Api {
            status: 400,
            message: String::new(),
        };
        assert!(rate_limited.is_retryable());
        assert!(server_error.is_retryable());
        assert!(!bad_request.is_retryable());
        assert!(!LlmError::EmptyContent.is_retryable());
    }
}
