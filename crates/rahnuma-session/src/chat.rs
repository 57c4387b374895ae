use chrono::{DateTime, Utc};

/// One chat message. Delivery and persistence end with the session.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub author: String,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

/// Append-only, single-writer chat log for one session.
#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message stamped with the current time.
    ///
    /// Author and text are trimmed first; if either is blank the call is a
    /// silent no-op and returns `false`.
    pub fn post(&mut self, author: &str, text: &str) -> bool {
        let author = author.trim();
        let text = text.trim();
        if author.is_empty() || text.is_empty() {
            return false;
        }
        self.messages.push(ChatMessage {
            author: author.to_string(),
            text: text.to_string(),
            sent_at: Utc::now(),
        });
        true
    }

    /// Messages in append order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
