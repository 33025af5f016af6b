//! Append-only conversation log for one session.
//!
//! Messages are immutable once appended. The log lives for the process
//! lifetime and is only emptied by an explicit clear; any confirmation
//! dialog is the presentation shell's concern, not this module's.

use serde::{Deserialize, Serialize};

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
    System,
}

/// One logged exchange entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Display name of the sender.
    pub sender: String,
    /// Full message text as shown in the chat panel.
    pub text: String,
    /// Wall-clock timestamp, `%H:%M:%S`.
    pub timestamp: String,
    pub role: Role,
}

impl Message {
    /// Create a message stamped with the current local time.
    #[must_use]
    pub fn new(sender: impl Into<String>, text: impl Into<String>, role: Role) -> Self {
        Self {
            sender: sender.into(),
            text: text.into(),
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
            role,
        }
    }
}

/// Ordered, append-only record of the session's messages.
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    messages: Vec<Message>,
}

impl ConversationLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message. Never rejects.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// The full log in insertion order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Most recent message with the given role, scanning backward.
    #[must_use]
    pub fn last_with_role(&self, role: Role) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.role == role)
    }

    /// Irreversibly empty the log.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
