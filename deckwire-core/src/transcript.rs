//! The chat transcript.
//!
//! An append-only list of [`ChatMessage`]s. Messages are never mutated or
//! reordered after creation; ids are assigned monotonically at append time,
//! so transcript order always equals submission/arrival order.

use serde::{Deserialize, Serialize};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The human user.
    User,
    /// The assistant.
    Assistant,
}

/// One immutable transcript entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Monotonic id assigned at append time.
    pub id: u64,
    /// Message author.
    pub role: Role,
    /// Message text.
    pub content: String,
}

/// Append-only message list owned by a session.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a user message, returning its id.
    pub fn push_user(&mut self, content: impl Into<String>) -> u64 {
        self.push(Role::User, content.into())
    }

    /// Append an assistant message, returning its id.
    pub fn push_assistant(&mut self, content: impl Into<String>) -> u64 {
        self.push(Role::Assistant, content.into())
    }

    fn push(&mut self, role: Role, content: String) -> u64 {
        // next_id starts at 1 so the default-constructed transcript behaves
        // the same as Transcript::new after the first append.
        if self.next_id == 0 {
            self.next_id = 1;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage { id, role, content });
        id
    }

    /// All messages in arrival order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The most recent message, if any.
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the transcript is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
