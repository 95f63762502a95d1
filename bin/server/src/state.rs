//! Shared application state.

use parley_ai::ResponseGenerator;
use parley_conversation::ConversationStore;

/// State shared across request handlers.
///
/// The conversation store and the response generator are owned here and
/// passed in at startup rather than living in process-wide statics, so
/// tests can construct isolated instances.
#[derive(Debug)]
pub struct AppState {
    /// In-memory conversation log.
    pub store: ConversationStore,
    /// Response-generation shim (provider plus fallback).
    pub generator: ResponseGenerator,
}

impl AppState {
    /// Creates application state around a generator.
    #[must_use]
    pub fn new(generator: ResponseGenerator) -> Self {
        Self {
            store: ConversationStore::new(),
            generator,
        }
    }
}
