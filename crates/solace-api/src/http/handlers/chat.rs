//! Chat endpoint.
//!
//! POST /api/chat
//!
//! Orchestration order matters: the crisis check runs first and, when it
//! fires, the fixed safety reply goes back without resolving a persona or
//! contacting the model gateway. Otherwise the persona instruction (if
//! any) is prepended, system-role turns are filtered out, and the
//! assembled conversation goes upstream exactly once.

use axum::Json;
use axum::extract::State;

use solace_core::gateway::ChatGateway;
use solace_core::{conversation, persona, safety};
use solace_types::chat::{ChatReply, ChatRequest};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /api/chat -- relay a conversation to the model gateway.
pub async fn chat<G: ChatGateway>(
    State(state): State<AppState<G>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    if safety::screen(&request.messages) {
        tracing::debug!("crisis language detected, returning safety reply");
        return Ok(Json(ChatReply {
            reply: safety::CRISIS_REPLY.to_string(),
        }));
    }

    let instruction = persona::system_instruction(request.agent.as_deref());
    let messages = conversation::assemble(instruction, &request.messages);

    let content = state.gateway.reply(messages).await?;
    Ok(Json(ChatReply::from_model_output(&content)))
}
