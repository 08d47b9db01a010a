//! Model gateway wire types.
//!
//! These are the exact request shapes for the Ollama-protocol chat endpoint
//! (`POST {base}/api/chat`). They are distinct from the client-facing chat
//! types -- the gateway payload carries the configured model name and an
//! explicit `stream: false`.

use serde::{Deserialize, Serialize};

use crate::chat::Role;

/// A single message forwarded to the model gateway.
///
/// Either the persona system instruction or a user/assistant turn from the
/// inbound conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayMessage {
    pub role: Role,
    pub content: String,
}

impl GatewayMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Request body for the gateway chat endpoint.
///
/// The gateway consumes `{model, messages, stream}` verbatim; streaming is
/// always disabled here.
#[derive(Debug, Clone, Serialize)]
pub struct GatewayChatRequest {
    pub model: String,
    pub messages: Vec<GatewayMessage>,
    pub stream: bool,
}

impl GatewayChatRequest {
    /// Build a non-streaming request for the given model and messages.
    pub fn new(model: impl Into<String>, messages: Vec<GatewayMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            stream: false,
        }
    }
}
