//! LLM (`OpenAI`) API client module
//!
//! Encapsulates the legacy text-completion call used to write the quote.

use async_trait::async_trait;
use openai_api_rs::v1::completion::CompletionRequest;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::info;

use super::{CompletionProvider, HTTP_CLIENT};
use crate::core::models::{DEFAULT_COMPLETION_MODEL, QUOTE_MAX_TOKENS, QUOTE_TEMPERATURE};
use crate::errors::NotifyError;

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/completions";

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Decodes a completions response body into its candidate texts.
///
/// A success body without `choices` yields an empty list.
///
/// # Errors
///
/// Non-2xx statuses carry the provider's `error.message` (or the raw body);
/// a malformed success body is reported as an `OpenAIError` too.
pub fn parse_completion(status: StatusCode, body: &str) -> Result<Vec<String>, NotifyError> {
    if !status.is_success() {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .map(|env| env.error.message)
            .unwrap_or_else(|_| body.to_string());
        return Err(NotifyError::OpenAIError(format!("{status}: {message}")));
    }

    let parsed: CompletionResponse = serde_json::from_str(body).map_err(|e| {
        NotifyError::OpenAIError(format!("Failed to parse OpenAI response: {e}"))
    })?;

    Ok(parsed.choices.into_iter().map(|c| c.text).collect())
}

/// LLM API client for generating the quote
pub struct LlmClient {
    api_key: String,
    org_id: Option<String>,
    model_name: String,
}

impl LlmClient {
    #[must_use]
    pub fn new(api_key: String, org_id: Option<String>, model_name: Option<String>) -> Self {
        Self {
            api_key,
            org_id,
            model_name: model_name.unwrap_or_else(|| DEFAULT_COMPLETION_MODEL.to_string()),
        }
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    #[must_use]
    pub fn build_request(&self, prompt: &str) -> CompletionRequest {
        CompletionRequest::new(self.model_name.clone(), prompt.to_string())
            .temperature(QUOTE_TEMPERATURE)
            .max_tokens(QUOTE_MAX_TOKENS)
    }
}

#[async_trait]
impl CompletionProvider for LlmClient {
    async fn complete(&self, prompt: &str) -> Result<Vec<String>, NotifyError> {
        let request = self.build_request(prompt);
        info!(model = %self.model_name, "Requesting completion");

        let mut builder = HTTP_CLIENT
            .post(COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request);

        if let Some(org) = &self.org_id {
            builder = builder.header("OpenAI-Organization", org);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| NotifyError::HttpError(format!("OpenAI API request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| NotifyError::HttpError(format!("Failed to read OpenAI response: {e}")))?;

        parse_completion(status, &body)
    }
}
