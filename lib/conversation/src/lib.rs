//! Conversation log for the parley chat backend.
//!
//! This crate provides:
//!
//! - **Message types**: immutable, timestamped user/assistant records
//! - **Conversation store**: an in-memory, explicitly owned map from
//!   conversation ID to its ordered message log

pub mod error;
pub mod message;
pub mod store;

pub use error::StoreError;
pub use message::{Message, MessageRole};
pub use store::ConversationStore;
