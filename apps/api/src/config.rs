use anyhow::{Context, Result};
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
/// AI provider keys are optional — the document engine runs without them.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    /// When set, every built document is also persisted under this directory.
    pub output_dir: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            output_dir: optional_env("OUTPUT_DIR").map(PathBuf::from),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
