//! Rule-based fallback response generation.
//!
//! Used when no chat backend is configured, or as the safety net when a
//! provider call fails. Rules are applied in order against the lower-cased
//! message and the first match wins, so the output is deterministic for
//! identical input.
//!
//! Keyword matching is substring matching, not word matching: "this"
//! matches the "hi" greeting keyword. That looseness is intentional; the
//! fallback trades precision for never leaving the user without a reply.

const GREETING_KEYWORDS: &[&str] = &["hello", "hi", "hey", "greetings"];
const CAPABILITY_KEYWORDS: &[&str] = &["help", "what can you do", "capabilities"];
const THANKS_KEYWORDS: &[&str] = &["thank", "thanks", "appreciate"];
const FAREWELL_KEYWORDS: &[&str] = &["bye", "goodbye", "see you", "farewell"];
const SETUP_KEYWORDS: &[&str] = &["openai", "api", "key", "setup", "configure"];

/// Messages longer than this fall into the long-message rule.
const LONG_MESSAGE_CHARS: usize = 100;

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}

/// Produces a canned response for the given message.
///
/// Always returns a non-empty string.
#[must_use]
pub fn fallback_response(message: &str) -> String {
    let lower = message.to_lowercase();

    if contains_any(&lower, GREETING_KEYWORDS) {
        return "Hello! I'm Parley, your AI assistant. I'm here to help you with questions, \
                tasks, and conversations. What would you like to work on today?"
            .to_string();
    }

    if contains_any(&lower, CAPABILITY_KEYWORDS) {
        return "I'm part of the Parley agent system! I can help you with:\n\n\
                - Answering questions and providing information\n\
                - Having conversations and brainstorming\n\
                - Helping with writing and analysis\n\
                - General problem-solving\n\n\
                What would you like to explore?"
            .to_string();
    }

    if contains_any(&lower, THANKS_KEYWORDS) {
        return "You're very welcome! I'm happy I could help. Feel free to ask me anything \
                else - I'm here whenever you need assistance. Is there anything else you'd \
                like to work on?"
            .to_string();
    }

    if contains_any(&lower, FAREWELL_KEYWORDS) {
        return "Goodbye! It was great chatting with you. Come back anytime you need help or \
                just want to have a conversation. Have a wonderful day!"
            .to_string();
    }

    if message.contains('?') {
        return format!(
            "That's a great question! You asked about: '{message}'\n\n\
             I'd love to help you explore this topic. Could you tell me a bit more about \
             what specific aspect you're most interested in? The more context you provide, \
             the better I can assist you."
        );
    }

    if message.chars().count() > LONG_MESSAGE_CHARS {
        return "I can see you've shared quite a bit of detail with me - that's helpful!\n\n\
                To give you the most useful response, could you help me understand what your \
                main goal or question is? Are you looking for:\n\
                - Analysis or feedback\n\
                - Suggestions or recommendations\n\
                - Help with a specific problem\n\
                - Just a thoughtful discussion\n\n\
                Let me know and I'll focus my response accordingly!"
            .to_string();
    }

    if contains_any(&lower, SETUP_KEYWORDS) {
        return "I notice you're asking about API setup! To enable provider-backed replies:\n\n\
                1. Get an OpenAI API key from platform.openai.com\n\
                2. Set it in the OPENAI__API_KEY environment variable\n\
                3. Restart the server\n\n\
                Once configured, replies will be generated by the model instead of these \
                canned responses. Would you like help with the setup process?"
            .to_string();
    }

    format!(
        "I understand you're telling me about: '{message}'\n\n\
         I'm currently running without a language-model provider, but I'm here to help! \
         Could you let me know:\n\
         - What you'd like me to help you with\n\
         - Any specific questions you have\n\
         - What kind of response would be most useful"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_mentions_help_availability() {
        let response = fallback_response("hello");
        assert!(response.starts_with("Hello!"));
        assert!(response.contains("help"));
    }

    #[test]
    fn greeting_wins_over_question_rule() {
        // First match wins: the greeting keyword precedes the '?' rule.
        let response = fallback_response("hello, what time is it?");
        assert!(response.starts_with("Hello!"));
    }

    #[test]
    fn capabilities_rule() {
        let response = fallback_response("what can you do");
        assert!(response.contains("brainstorming"));
    }

    #[test]
    fn thanks_rule() {
        let response = fallback_response("thanks a lot!");
        assert!(response.starts_with("You're very welcome!"));
    }

    #[test]
    fn farewell_rule() {
        let response = fallback_response("ok goodbye now");
        assert!(response.starts_with("Goodbye!"));
    }

    #[test]
    fn question_rule_echoes_raw_message() {
        let response = fallback_response("is rust fun?");
        assert!(response.contains("'is rust fun?'"));
    }

    #[test]
    fn long_message_boundary() {
        // 101 non-matching characters trigger the long-message rule.
        let long = "z".repeat(101);
        assert!(fallback_response(&long).starts_with("I can see you've shared"));

        // Exactly 100 do not.
        let at_limit = "z".repeat(100);
        assert!(!fallback_response(&at_limit).starts_with("I can see you've shared"));
    }

    #[test]
    fn setup_rule() {
        let response = fallback_response("how do I set my openai credential");
        assert!(response.contains("OPENAI__API_KEY"));
    }

    #[test]
    fn generic_rule_echoes_raw_message() {
        let response = fallback_response("zebras");
        assert!(response.contains("'zebras'"));
    }

    #[test]
    fn keyword_matching_is_substring_based() {
        // "this" contains "hi", so it hits the greeting rule.
        let response = fallback_response("this");
        assert!(response.starts_with("Hello!"));
    }

    #[test]
    fn deterministic_for_identical_input() {
        assert_eq!(fallback_response("zebras"), fallback_response("zebras"));
    }

    #[test]
    fn always_non_empty() {
        for message in ["hello", "?", "x", "", "bye", "thanks"] {
            assert!(!fallback_response(message).is_empty());
        }
    }
}
