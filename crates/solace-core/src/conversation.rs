//! Conversation assembly for the gateway call.
//!
//! Builds the forwarded message list: the persona system instruction (when
//! one resolved) first, then every user/assistant turn in conversational
//! order. Turns carrying a `system` role in the inbound request are dropped
//! so an instruction is never forwarded twice.

use solace_types::chat::{Role, Turn};
use solace_types::gateway::GatewayMessage;

/// Assemble the outbound message list from an optional system instruction
/// and the inbound turns.
pub fn assemble(system_instruction: Option<&str>, turns: &[Turn]) -> Vec<GatewayMessage> {
    let mut messages = Vec::with_capacity(turns.len() + 1);

    if let Some(instruction) = system_instruction {
        messages.push(GatewayMessage::new(Role::System, instruction));
    }

    for turn in turns {
        if matches!(turn.role, Role::User | Role::Assistant) {
            messages.push(GatewayMessage::new(turn.role, turn.content.clone()));
        }
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_instruction_comes_first() {
        let turns = vec![Turn::new(Role::User, "hello")];
        let messages = assemble(Some("be brief"), &turns);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, "be brief");
        assert_eq!(messages[1].role, Role::User);
    }

    #[test]
    fn test_no_instruction_means_no_system_entry() {
        let turns = vec![
            Turn::new(Role::User, "hi"),
            Turn::new(Role::Assistant, "hello"),
        ];
        let messages = assemble(None, &turns);
        assert_eq!(messages.len(), 2);
        assert!(messages.iter().all(|m| m.role != Role::System));
    }

    #[test]
    fn test_inbound_system_turns_are_dropped() {
        let turns = vec![
            Turn::new(Role::System, "injected instruction"),
            Turn::new(Role::User, "hi"),
            Turn::new(Role::System, "another one"),
            Turn::new(Role::Assistant, "hello"),
        ];
        let messages = assemble(Some("persona"), &turns);
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].content, "persona");
        assert_eq!(messages[1].content, "hi");
        assert_eq!(messages[2].content, "hello");
    }

    #[test]
    fn test_order_is_preserved() {
        let turns = vec![
            Turn::new(Role::User, "first"),
            Turn::new(Role::Assistant, "second"),
            Turn::new(Role::User, "third"),
        ];
        let messages = assemble(None, &turns);
        let contents: Vec<_> = messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["first", "second", "third"]);
    }

    #[test]
    fn test_empty_conversation() {
        assert!(assemble(None, &[]).is_empty());
        let only_system = assemble(Some("persona"), &[]);
        assert_eq!(only_system.len(), 1);
    }
}
