use std::str::FromStr;

use anyhow::{Context, Result};

pub const DEFAULT_GENERATION_URL: &str = "https://us-south.ml.cloud.ibm.com/ml/v1/text/generation";
pub const DEFAULT_MODEL_ID: &str = "ibm/granite-3.3-8b-instruct";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub generation: GenerationConfig,
}

/// Fixed settings for the remote text-generation endpoint.
/// Built once at startup and handed to `LlmClient::new`.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub endpoint: String,
    pub model_id: String,
    /// `None` disables the remote path; every request goes to the pattern fallback.
    pub api_key: Option<String>,
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub repetition_penalty: f32,
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_GENERATION_URL.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            api_key: None,
            max_new_tokens: 500,
            temperature: 0.1,
            top_p: 0.9,
            repetition_penalty: 1.1,
            timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = GenerationConfig::default();

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            generation: GenerationConfig {
                endpoint: std::env::var("GENERATION_API_URL").unwrap_or(defaults.endpoint),
                model_id: std::env::var("GENERATION_MODEL_ID").unwrap_or(defaults.model_id),
                api_key: std::env::var("GENERATION_API_KEY")
                    .ok()
                    .filter(|key| !key.trim().is_empty()),
                max_new_tokens: parse_env("GENERATION_MAX_NEW_TOKENS", defaults.max_new_tokens)?,
                temperature: parse_env("GENERATION_TEMPERATURE", defaults.temperature)?,
                top_p: parse_env("GENERATION_TOP_P", defaults.top_p)?,
                repetition_penalty: parse_env(
                    "GENERATION_REPETITION_PENALTY",
                    defaults.repetition_penalty,
                )?,
                timeout_secs: parse_env("GENERATION_TIMEOUT_SECS", defaults.timeout_secs)?,
            },
        })
    }
}

/// Reads `key` and parses it, falling back to `default` when the variable is unset.
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("Environment variable '{key}' has an invalid value: '{raw}'"))
}
