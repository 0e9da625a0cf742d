//! LLM Client — the single point of entry for calls to the hosted text-generation endpoint.
//!
//! No other module may talk to the endpoint directly. The segmenter depends on the
//! `TextGenerator` trait so tests can script responses without a network.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::GenerationConfig;

pub mod prompts;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Anything that turns a prompt into generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    model_id: &'a str,
    input: &'a str,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    temperature: f32,
    top_p: f32,
    repetition_penalty: f32,
}

#[derive(Debug, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub results: Vec<GenerationResult>,
}

#[derive(Debug, Deserialize)]
pub struct GenerationResult {
    #[serde(default)]
    pub generated_text: String,
}

impl GenerationResponse {
    /// Text of the first result, if it has any content.
    pub fn text(&self) -> Option<&str> {
        self.results
            .first()
            .map(|r| r.generated_text.as_str())
            .filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    errors: Vec<ApiErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEntry {
    message: String,
}

/// Client for the text-generation endpoint named in `GenerationConfig`.
/// One POST per call; failures are returned, never retried.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    config: GenerationConfig,
}

impl LlmClient {
    pub fn new(config: GenerationConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn model_id(&self) -> &str {
        &self.config.model_id
    }

    /// Makes a raw call to the endpoint, returning the full response object.
    pub async fn call(&self, prompt: &str) -> Result<GenerationResponse, LlmError> {
        let request_body = GenerationRequest {
            model_id: &self.config.model_id,
            input: prompt,
            parameters: GenerationParameters {
                max_new_tokens: self.config.max_new_tokens,
                temperature: self.config.temperature,
                top_p: self.config.top_p,
                repetition_penalty: self.config.repetition_penalty,
            },
        };

        let mut request = self
            .client
            .post(&self.config.endpoint)
            .header("accept", "application/json")
            .json(&request_body);
        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|e| e.errors.into_iter().next())
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: GenerationResponse = serde_json::from_str(&body)?;

        debug!(
            "Generation call succeeded: model={}, results={}",
            self.config.model_id,
            parsed.results.len()
        );

        Ok(parsed)
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self.call(prompt).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}
