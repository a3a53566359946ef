use crate::models::ChatMessage;

/// Append-only chat transcript.
///
/// Starts with the fixed welcome message and only ever grows, except for
/// [`Transcript::clear`] which resets it to that single entry. Existing
/// entries are never mutated or reordered. All signal-driven state in
/// [`crate::state::AppState`] goes through these methods, so the ordering
/// properties of the UI follow directly from `Vec::push`.
#[derive(Clone, Debug, PartialEq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::welcome()],
        }
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.messages.clone()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Reset to the single welcome message.
    pub fn clear(&mut self) {
        self.messages = vec![ChatMessage::welcome()];
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Transcript entries excluding the welcome message, for the stats panel.
    pub fn exchange_count(&self) -> usize {
        self.messages.len().saturating_sub(1)
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a query draft for submission: trimmed, `None` when nothing
/// remains. An empty draft makes `ask` a no-op.
pub fn sanitize_question(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AskResponse, WELCOME_TEXT};

    #[test]
    fn starts_with_welcome_only() {
        let t = Transcript::new();
        assert_eq!(t.len(), 1);
        assert_eq!(t.messages()[0].answer, WELCOME_TEXT);
        assert_eq!(t.exchange_count(), 0);
    }

    #[test]
    fn completed_ask_appends_user_then_assistant() {
        let mut t = Transcript::new();
        t.push(ChatMessage::user("What is X?", 1.0));
        t.push(ChatMessage::answer(
            AskResponse {
                answer: Some("X is Y".to_string()),
                sources: vec!["a.pdf".to_string()],
                context_used: true,
            },
            2.0,
        ));
        assert_eq!(t.len(), 3);
        let msgs = t.messages();
        assert!(msgs[1].is_user);
        assert_eq!(msgs[1].question, "What is X?");
        assert!(!msgs[2].is_user);
        assert_eq!(msgs[2].answer, "X is Y");
    }

    #[test]
    fn sequential_asks_keep_call_order() {
        let mut t = Transcript::new();
        for i in 0..3u32 {
            t.push(ChatMessage::user(&format!("q{i}"), i as f64));
            t.push(ChatMessage::answer(
                AskResponse {
                    answer: Some(format!("a{i}")),
                    ..Default::default()
                },
                i as f64,
            ));
        }
        assert_eq!(t.len(), 7);
        let msgs = t.messages();
        for i in 0..3usize {
            assert_eq!(msgs[1 + 2 * i].question, format!("q{i}"));
            assert_eq!(msgs[2 + 2 * i].answer, format!("a{i}"));
        }
    }

    #[test]
    fn failed_ask_appends_single_error_entry() {
        let mut t = Transcript::new();
        t.push(ChatMessage::user("q", 1.0));
        t.push(ChatMessage::error("❌ Error: Server error: 500".to_string(), 2.0));
        assert_eq!(t.len(), 3);
        assert!(t.messages()[2].answer.starts_with("❌"));
    }

    #[test]
    fn clear_resets_to_welcome_regardless_of_state() {
        let mut t = Transcript::new();
        t.push(ChatMessage::user("q", 1.0));
        t.push(ChatMessage::error("❌ Error: boom".to_string(), 2.0));
        t.clear();
        assert_eq!(t.len(), 1);
        assert_eq!(t.messages()[0].id, "welcome");
    }

    #[test]
    fn blank_questions_are_rejected() {
        assert_eq!(sanitize_question(""), None);
        assert_eq!(sanitize_question("   "), None);
        assert_eq!(sanitize_question("\n\t"), None);
        assert_eq!(sanitize_question("  What is X?  "), Some("What is X?".to_string()));
    }
}
