//! Persona resolution.
//!
//! Maps an optional agent identifier to a fixed system instruction. The
//! table is process-wide and immutable; unknown or absent identifiers mean
//! no instruction is added (never an error).

/// Known personas: identifier -> system instruction.
const PERSONAS: &[(&str, &str)] = &[
    (
        "emotional_support",
        "You are an empathetic peer-support chatbot. Not a therapist. \
         Listen, reflect feelings, ask gentle open-ended questions, offer simple coping ideas. \
         2–4 sentences per reply, warm and plain. Never medical advice.",
    ),
    (
        "coach",
        "You are a motivational coach. Use SMART micro-goals and give 1–2 next steps. \
         Be concise and encouraging.",
    ),
];

/// Resolve an agent identifier to its system instruction.
///
/// Returns `Some` only when the identifier is present and a table member;
/// absent, blank, and unrecognized identifiers all resolve to `None`.
pub fn system_instruction(agent: Option<&str>) -> Option<&'static str> {
    let id = agent?;
    PERSONAS
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, instruction)| *instruction)
}
