//! Conversation history as seen by the prompt composer.
//!
//! Storage of messages belongs to the caller. This module only windows and
//! formats what the caller hands in.

use serde::{Deserialize, Serialize};

use crate::emotion::EmotionAnalysis;
use crate::prompt::compose_user_message;

/// Context line used when there is no prior conversation.
pub const EMPTY_CONTEXT: &str = "This is the beginning of the conversation.";

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Capitalised label used in prompt context lines.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Assistant => "Assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// One message of conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// The last `n` messages of `history` (all of them if shorter).
#[must_use]
pub fn tail(history: &[ChatMessage], n: usize) -> &[ChatMessage] {
    &history[history.len().saturating_sub(n)..]
}

/// Summarise recent messages for the system prompt.
///
/// Each message becomes `"<Label>: <first preview_chars chars>...\n"`. The
/// ellipsis is appended even when the content is shorter than the preview.
#[must_use]
pub fn format_conversation_context(recent: &[ChatMessage], preview_chars: usize) -> String {
    if recent.is_empty() {
        return EMPTY_CONTEXT.to_owned();
    }

    let mut context = String::from("Recent conversation context:\n");
    for msg in recent {
        let preview: String = msg.content.chars().take(preview_chars).collect();
        context.push_str(msg.role.label());
        context.push_str(": ");
        context.push_str(&preview);
        context.push_str("...\n");
    }
    context
}

/// Messages for the generative backend: the last `window` history messages
/// followed by the new user message annotated with its emotional context.
#[must_use]
pub fn prepare_messages(
    history: &[ChatMessage],
    text: &str,
    analysis: &EmotionAnalysis,
    window: usize,
) -> Vec<ChatMessage> {
    let recent = tail(history, window);
    let mut messages = Vec::with_capacity(recent.len() + 1);
    messages.extend_from_slice(recent);
    messages.push(ChatMessage::user(compose_user_message(text, analysis)));
    messages
}
