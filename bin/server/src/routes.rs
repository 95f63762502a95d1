//! Chat API routes.
//!
//! The handlers own identifier generation, input validation, and the
//! error-to-status mapping; reply generation itself is delegated to the
//! [`ResponseGenerator`](parley_ai::ResponseGenerator) in state, which
//! never fails.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use parley_core::ConversationId;
use parley_conversation::Message;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Registers the chat API routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/chat", post(chat))
        .route("/conversation/{id}", get(get_conversation))
        .route("/health", get(health))
}

/// Request body for `POST /chat`.
#[derive(Debug, Deserialize)]
struct ChatBody {
    /// The new user message.
    message: String,
    /// Existing conversation to continue; a new one is created when absent.
    #[serde(default)]
    conversation_id: Option<String>,
}

/// Response body for `POST /chat`.
#[derive(Debug, Serialize)]
struct ChatReply {
    success: bool,
    conversation_id: ConversationId,
    response: Message,
    user_message: Message,
}

/// Handles a chat message: appends the user record, generates a reply, and
/// appends and returns the assistant record.
async fn chat(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ChatBody>, JsonRejection>,
) -> Result<Json<ChatReply>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::BadRequest(format!("message is required: {e}")))?;

    let message = body.message.trim();
    if message.is_empty() {
        return Err(ApiError::BadRequest("message cannot be empty".to_string()));
    }

    let conversation_id = match body.conversation_id {
        Some(raw) => raw
            .parse()
            .map_err(|e| ApiError::BadRequest(format!("invalid conversation id: {e}")))?,
        None => ConversationId::new(),
    };

    let user_message = Message::user(message);

    // Snapshot the prior history before appending, so the generator sees the
    // new message exactly once (as the `message` argument).
    let history = state.store.history(conversation_id).unwrap_or_default();
    state.store.append(conversation_id, user_message.clone());

    let reply = state.generator.generate(message, &history).await;

    let assistant_message = Message::assistant(reply);
    state
        .store
        .append(conversation_id, assistant_message.clone());

    Ok(Json(ChatReply {
        success: true,
        conversation_id,
        response: assistant_message,
        user_message,
    }))
}

/// Response body for `GET /conversation/{id}`.
#[derive(Debug, Serialize)]
struct ConversationReply {
    success: bool,
    conversation_id: ConversationId,
    messages: Vec<Message>,
}

/// Returns the full message log for a conversation.
async fn get_conversation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ConversationReply>, ApiError> {
    // An unparseable id cannot name a stored conversation, so it gets the
    // same 404 as an unknown one.
    let conversation_id: ConversationId = id
        .parse()
        .map_err(|_| ApiError::NotFound("conversation not found".to_string()))?;

    let messages = state
        .store
        .history(conversation_id)
        .map_err(|e| ApiError::NotFound(e.to_string()))?;

    Ok(Json(ConversationReply {
        success: true,
        conversation_id,
        messages,
    }))
}

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
struct HealthReply {
    status: &'static str,
    timestamp: DateTime<Utc>,
    version: &'static str,
}

/// Liveness probe.
async fn health() -> Json<HealthReply> {
    Json(HealthReply {
        status: "healthy",
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
