//! Response generation for the parley chat backend.
//!
//! This crate provides the one interesting component of the system: the
//! response-generation shim. Given a new user message and the conversation
//! history, it produces a reply string via exactly one of two paths:
//!
//! - **Provider path**: a single chat-completion call against a configured
//!   [`ChatBackend`], with the history windowed down to the last
//!   [`prompt::HISTORY_WINDOW`] entries.
//! - **Fallback path**: a deterministic keyword-rule generator, used when no
//!   backend is configured or as the unconditional safety net when the
//!   provider call fails.
//!
//! The generator never returns an error: every failure is absorbed and
//! resolved into a fallback string.

pub mod backend;
pub mod error;
pub mod fallback;
pub mod generator;
pub mod openai;
pub mod prompt;

pub use backend::{ChatBackend, ChatCompletion, ChatMessage, ChatRequest, ChatRole};
pub use error::LlmError;
pub use fallback::fallback_response;
pub use generator::ResponseGenerator;
pub use openai::OpenAiBackend;
