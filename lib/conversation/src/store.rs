//! In-memory conversation store.
//!
//! The store is an explicitly owned object passed into the request-handling
//! layer, not process-wide shared state. Message logs are append-only and
//! ordered oldest first. The interior lock is held only for the duration of
//! a single append or a read snapshot, never across an await point, so
//! concurrent requests against the same conversation may interleave but
//! cannot observe a torn log.

use crate::error::StoreError;
use crate::message::Message;
use parley_core::ConversationId;
use std::collections::HashMap;
use std::sync::RwLock;

/// An in-memory map from conversation ID to its ordered message log.
#[derive(Debug, Default)]
pub struct ConversationStore {
    conversations: RwLock<HashMap<ConversationId, Vec<Message>>>,
}

impl ConversationStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to a conversation, creating the conversation if it
    /// does not yet exist.
    pub fn append(&self, id: ConversationId, message: Message) {
        let mut conversations = self
            .conversations
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        conversations.entry(id).or_default().push(message);
    }

    /// Returns a cloned snapshot of a conversation's message log, oldest
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the conversation does not exist.
    pub fn history(&self, id: ConversationId) -> Result<Vec<Message>, StoreError> {
        let conversations = self
            .conversations
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        conversations
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    /// Returns true if the conversation exists.
    #[must_use]
    pub fn contains(&self, id: ConversationId) -> bool {
        let conversations = self
            .conversations
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        conversations.contains_key(&id)
    }

    /// Returns the number of conversations in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        let conversations = self
            .conversations
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        conversations.len()
    }

    /// Returns true if the store holds no conversations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
