//! The response-generation shim.
//!
//! Composes the provider path and the fallback path behind a single
//! infallible operation: one attempt against the configured backend, then
//! the keyword-rule fallback on any failure. No retries, no backoff.

use crate::backend::{ChatBackend, ChatRequest};
use crate::error::LlmError;
use crate::fallback::fallback_response;
use crate::prompt::build_context;
use parley_conversation::Message;
use std::sync::Arc;

/// Fixed sampling parameters for every provider call.
const MAX_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 1.0;
const FREQUENCY_PENALTY: f32 = 0.0;
const PRESENCE_PENALTY: f32 = 0.0;

/// Generates reply strings for incoming chat messages.
///
/// Failures never cross this boundary: `generate` always produces a string,
/// and success and fallback are indistinguishable to the caller.
#[derive(Clone)]
pub struct ResponseGenerator {
    backend: Option<Arc<dyn ChatBackend>>,
}

impl ResponseGenerator {
    /// Creates a generator, logging whether a backend is available.
    #[must_use]
    pub fn new(backend: Option<Arc<dyn ChatBackend>>) -> Self {
        match &backend {
            Some(backend) => {
                tracing::info!(
                    backend = backend.name(),
                    model = backend.model(),
                    "chat backend configured"
                );
            }
            None => {
                tracing::warn!("no chat backend configured, replies use canned responses only");
            }
        }
        Self { backend }
    }

    /// Creates a generator with no backend; every reply uses the fallback
    /// rule set.
    #[must_use]
    pub fn without_backend() -> Self {
        Self::new(None)
    }

    /// Returns true if a chat backend is configured.
    #[must_use]
    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    /// Generates a reply for `message` given the prior conversation history
    /// (oldest first, the new message not included).
    pub async fn generate(&self, message: &str, history: &[Message]) -> String {
        if let Some(backend) = &self.backend {
            match complete(backend.as_ref(), message, history).await {
                Ok(reply) => return reply,
                Err(error) => {
                    tracing::warn!(
                        backend = backend.name(),
                        %error,
                        "provider call failed, using fallback response"
                    );
                }
            }
        }

        fallback_response(message)
    }
}

impl std::fmt::Debug for ResponseGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseGenerator")
            .field("backend", &self.backend.as_ref().map(|b| b.name().to_string()))
            .finish()
    }
}

/// Issues one provider call and returns the trimmed first completion.
async fn complete(
    backend: &dyn ChatBackend,
    message: &str,
    history: &[Message],
) -> Result<String, LlmError> {
    let request = ChatRequest::new(backend.model(), build_context(message, history))
        .with_max_tokens(MAX_TOKENS)
        .with_temperature(TEMPERATURE)
        .with_top_p(TOP_P)
        .with_frequency_penalty(FREQUENCY_PENALTY)
        .with_presence_penalty(PRESENCE_PENALTY);

    let completion = backend.chat(&request).await?;
    Ok(completion.content.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ChatCompletion;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Backend that replies with a fixed string and records the request.
    struct CannedBackend {
        reply: &'static str,
        seen: Mutex<Vec<ChatRequest>>,
    }

    impl CannedBackend {
        fn new(reply: &'static str) -> Self {
            Self {
                reply,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ChatBackend for CannedBackend {
        async fn chat(&self, request: &ChatRequest) -> Result<ChatCompletion, LlmError> {
            self.seen.lock().expect("lock").push(request.clone());
            Ok(ChatCompletion {
                content: self.reply.to_string(),
                model: "test-model".to_string(),
            })
        }

        fn name(&self) -> &str {
            "canned"
        }

        fn model(&self) -> &str {
            "test-model"
        }
    }

    /// Backend that always fails, simulating a network error.
    struct FailingBackend;

    #[async_trait]
    impl ChatBackend for FailingBackend {
        async fn chat(&self, _request: &ChatRequest) -> Result<ChatCompletion, LlmError> {
            Err(LlmError::RequestFailed {
                reason: "connection reset by peer".to_string(),
            })
        }

        fn name(&self) -> &str {
            "failing"
        }

        fn model(&self) -> &str {
            "test-model"
        }
    }

    #[tokio::test]
    async fn provider_reply_is_trimmed() {
        let generator =
            ResponseGenerator::new(Some(Arc::new(CannedBackend::new("  spacious reply \n"))));
        let reply = generator.generate("hello", &[]).await;
        assert_eq!(reply, "spacious reply");
    }

    #[tokio::test]
    async fn provider_failure_falls_back() {
        let generator = ResponseGenerator::new(Some(Arc::new(FailingBackend)));
        let reply = generator.generate("tell me something", &[]).await;

        // The fallback ruleset answers instead; no error escapes.
        assert!(!reply.is_empty());
        assert_eq!(reply, fallback_response("tell me something"));
    }

    #[tokio::test]
    async fn no_backend_uses_fallback() {
        let generator = ResponseGenerator::without_backend();
        assert!(!generator.has_backend());

        let reply = generator.generate("hello", &[]).await;
        assert!(reply.starts_with("Hello!"));
    }

    #[tokio::test]
    async fn request_carries_fixed_sampling_parameters() {
        let backend = Arc::new(CannedBackend::new("ok"));
        let generator = ResponseGenerator::new(Some(backend.clone()));

        generator.generate("hi", &[]).await;

        let seen = backend.seen.lock().expect("lock");
        let request = &seen[0];
        assert_eq!(request.max_tokens, Some(500));
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.top_p, Some(1.0));
        assert_eq!(request.frequency_penalty, Some(0.0));
        assert_eq!(request.presence_penalty, Some(0.0));
        assert_eq!(request.model, "test-model");
    }

    #[tokio::test]
    async fn request_windows_long_history() {
        let backend = Arc::new(CannedBackend::new("ok"));
        let generator = ResponseGenerator::new(Some(backend.clone()));

        let history: Vec<Message> = (0..15)
            .map(|i| Message::user(format!("message {i}")))
            .collect();
        generator.generate("latest", &history).await;

        let seen = backend.seen.lock().expect("lock");
        // system + 10 windowed + new message
        assert_eq!(seen[0].messages.len(), 12);
    }

    #[tokio::test]
    async fn history_is_not_mutated() {
        let generator = ResponseGenerator::new(Some(Arc::new(FailingBackend)));
        let history = vec![Message::user("one"), Message::assistant("two")];

        generator.generate("three", &history).await;

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].content, "one");
    }
}
