//! OpenAI chat-completion client.
//!
//! Thin wrapper over the chat completions endpoint; the service only ever
//! sends a single system/user message pair per request and reads back the
//! first choice.

use crate::config::OpenAiConfig;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenAiError {
    #[error("OpenAI API key not configured")]
    NotConfigured,

    #[error("OpenAI API error: {0}")]
    Api(String),

    #[error("No content generated from OpenAI")]
    EmptyCompletion,

    #[error("Network error: {0}")]
    Network(String),
}

/// Sampling parameters for a completion call.
#[derive(Debug, Clone, Copy)]
pub struct CompletionParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Check if the client has credentials to call the API.
    pub fn is_configured(&self) -> bool {
        !self.config.api_key.expose_secret().is_empty()
    }

    /// Run a single chat completion and return the generated text.
    pub async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        params: CompletionParams,
    ) -> Result<String, OpenAiError> {
        if !self.is_configured() {
            return Err(OpenAiError::NotConfigured);
        }

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt.to_string(),
                },
            ],
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        };

        let url = format!("{}/chat/completions", self.config.api_base_url);

        tracing::debug!(
            model = %self.config.model,
            system_len = system_prompt.len(),
            user_len = user_prompt.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| OpenAiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("status {}", status));

            tracing::error!(status = %status, error = %detail, "Chat completion failed");
            return Err(OpenAiError::Api(detail));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| OpenAiError::Api(format!("Failed to parse response: {}", e)))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .map(|message| message.content)
            .filter(|content| !content.is_empty())
            .ok_or(OpenAiError::EmptyCompletion)
    }
}

// ============================================================================
// OpenAI API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}
