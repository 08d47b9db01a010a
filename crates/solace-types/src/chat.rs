//! Conversation and chat endpoint wire types.
//!
//! These types model the `/api/chat` request and response bodies:
//! a conversation is an ordered list of [`Turn`]s (oldest first), and the
//! reply is a single generated string.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Placeholder reply used when the model produced no usable content.
pub const NO_CONTENT: &str = "(No content)";

/// Role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" => Ok(Role::System),
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            other => Err(format!("invalid role: '{other}'")),
        }
    }
}

/// A single message in a conversation, tagged with its role.
///
/// Turns are immutable once received and live only for the request that
/// carries them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Request body for `POST /api/chat`.
///
/// `messages` is in conversational order (oldest first); the tail entries
/// are treated as "most recent". `agent` optionally selects a persona and
/// unknown values are tolerated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Turn>,
    #[serde(default)]
    pub agent: Option<String>,
}

/// Response body for `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

impl ChatReply {
    /// Wrap model output, substituting [`NO_CONTENT`] for empty or
    /// whitespace-only text.
    pub fn from_model_output(content: &str) -> Self {
        let trimmed = content.trim();
        Self {
            reply: if trimmed.is_empty() {
                NO_CONTENT.to_string()
            } else {
                trimmed.to_string()
            },
        }
    }
}
