//! Provider prompt assembly and history windowing.

use crate::backend::ChatMessage;
use parley_conversation::{Message, MessageRole};

/// Fixed persona and capability instruction sent with every provider call.
pub const SYSTEM_PROMPT: &str = "You are Parley, a helpful AI assistant. You are part of a larger \
agent system that helps users with questions, writing, analysis, and general problem-solving.

Key traits:
- Be helpful, friendly, and professional
- Provide clear, concise responses
- If users ask about capabilities, mention you are part of a larger AI agent system
- Be encouraging and supportive
- Keep responses conversational but informative";

/// Maximum number of prior messages included as provider context.
///
/// Fixed and non-configurable; older history is silently dropped.
pub const HISTORY_WINDOW: usize = 10;

/// Builds the ordered message list for a provider call: the system
/// instruction, then up to the last [`HISTORY_WINDOW`] history entries
/// re-mapped to the provider role vocabulary, then the new user message.
#[must_use]
pub fn build_context(message: &str, history: &[Message]) -> Vec<ChatMessage> {
    let window_start = history.len().saturating_sub(HISTORY_WINDOW);

    let mut messages = Vec::with_capacity(2 + HISTORY_WINDOW.min(history.len()));
    messages.push(ChatMessage::system(SYSTEM_PROMPT));

    for entry in &history[window_start..] {
        messages.push(match entry.role {
            MessageRole::User => ChatMessage::user(entry.content.clone()),
            MessageRole::Assistant => ChatMessage::assistant(entry.content.clone()),
        });
    }

    messages.push(ChatMessage::user(message));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ChatRole;

    #[test]
    fn context_starts_with_system_and_ends_with_new_message() {
        let history = vec![Message::user("earlier"), Message::assistant("reply")];
        let context = build_context("now", &history);

        assert_eq!(context.first().map(|m| m.role), Some(ChatRole::System));
        let last = context.last().expect("non-empty");
        assert_eq!(last.role, ChatRole::User);
        assert_eq!(last.content, "now");
        assert_eq!(context.len(), 4);
    }

    #[test]
    fn roles_are_remapped_to_provider_vocabulary() {
        let history = vec![Message::user("q"), Message::assistant("a")];
        let context = build_context("next", &history);

        assert_eq!(context[1].role, ChatRole::User);
        assert_eq!(context[2].role, ChatRole::Assistant);
    }

    #[test]
    fn history_is_windowed_to_last_ten() {
        let history: Vec<Message> = (0..15).map(|i| Message::user(format!("m{i}"))).collect();
        let context = build_context("new", &history);

        // system + 10 windowed entries + new message
        assert_eq!(context.len(), 12);
        // The oldest five entries are silently excluded.
        assert_eq!(context[1].content, "m5");
        assert_eq!(context[10].content, "m14");
    }

    #[test]
    fn short_history_is_included_whole() {
        let history = vec![Message::user("only")];
        let context = build_context("new", &history);
        assert_eq!(context.len(), 3);
        assert_eq!(context[1].content, "only");
    }

    #[test]
    fn empty_history_yields_system_plus_message() {
        let context = build_context("hello", &[]);
        assert_eq!(context.len(), 2);
    }
}
