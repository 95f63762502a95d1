//! OpenAI chat-completion backend.
//!
//! A thin client over `POST /v1/chat/completions`. The request body is the
//! serialized [`ChatRequest`]; the response is parsed just far enough to
//! extract the first choice's message content. No retries and no explicit
//! timeout: a single call either succeeds or surfaces one [`LlmError`].

use crate::backend::{ChatBackend, ChatCompletion, ChatRequest};
use crate::error::LlmError;
use async_trait::async_trait;
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Backend for the OpenAI chat-completion API.
#[derive(Debug, Clone)]
pub struct OpenAiBackend {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiBackend {
    /// Creates a backend against the public OpenAI endpoint.
    #[must_use]
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_base_url(api_key, model, DEFAULT_BASE_URL)
    }

    /// Creates a backend against a custom base URL.
    ///
    /// Useful for OpenAI-compatible endpoints and for tests.
    #[must_use]
    pub fn with_base_url(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl ChatBackend for OpenAiBackend {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatCompletion, LlmError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| LlmError::RequestFailed {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::RequestFailed {
                reason: format!("status {status}: {body}"),
            });
        }

        let completion: CompletionResponse =
            response
                .json()
                .await
                .map_err(|e| LlmError::ResponseParseFailed {
                    reason: e.to_string(),
                })?;

        let first = completion
            .choices
            .into_iter()
            .next()
            .ok_or(LlmError::ResponseParseFailed {
                reason: "completion contained no choices".to_string(),
            })?;

        Ok(ChatCompletion {
            content: first.message.content,
            model: completion.model,
        })
    }

    fn name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// Subset of the chat-completion response body we actually read.
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    model: String,
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: String,
}
