//! Crisis screening over recent conversation turns.
//!
//! A deliberately blunt substring guard, not a classifier: a fixed
//! case-insensitive phrase alternation is matched against the last two
//! turns of the conversation. When it fires, the endpoint answers with
//! [`CRISIS_REPLY`] and never contacts the model gateway. False positives
//! (third-person or fictional mentions) and false negatives (paraphrased
//! distress) are accepted behavior.

use std::sync::LazyLock;

use regex::Regex;

use solace_types::chat::Turn;

/// Fixed safety message returned when crisis language is detected.
pub const CRISIS_REPLY: &str = "I'm really glad you told me. If you're in immediate danger, call 911 now. \
     In the U.S., you can also call or text 988 for the Suicide & Crisis Lifeline. \
     If you're outside the U.S., please contact your local emergency number.";

/// The crisis phrase alternation, compiled once per process.
///
/// Substring matching with no word-boundary anchors; `self-harm` and
/// `self harm` both match via `self[-\s]?harm`.
static CRISIS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(suicide|kill myself|end my life|i want to die|self[-\s]?harm|hurt myself|overdose|can't go on|kill (him|her|them)|hurt (him|her|them))",
    )
    .expect("crisis pattern is a valid regex")
});

/// Concatenate the content of the last two turns (fewer if the conversation
/// is shorter) with a single space separator.
pub fn recent_text(turns: &[Turn]) -> String {
    let start = turns.len().saturating_sub(2);
    turns[start..]
        .iter()
        .map(|t| t.content.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Test the crisis pattern against a piece of text.
pub fn is_crisis(text: &str) -> bool {
    CRISIS_PATTERN.is_match(text)
}

/// Screen a conversation: crisis check over the text of its most recent
/// two turns.
pub fn screen(turns: &[Turn]) -> bool {
    is_crisis(&recent_text(turns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use solace_types::chat::Role;

    fn user(content: &str) -> Turn {
        Turn::new(Role::User, content)
    }

    fn assistant(content: &str) -> Turn {
        Turn::new(Role::Assistant, content)
    }

    #[test]
    fn test_matches_listed_phrases() {
        for phrase in [
            "suicide",
            "kill myself",
            "end my life",
            "i want to die",
            "self-harm",
            "self harm",
            "selfharm",
            "hurt myself",
            "overdose",
            "can't go on",
            "kill him",
            "kill her",
            "kill them",
            "hurt him",
            "hurt her",
            "hurt them",
        ] {
            assert!(is_crisis(phrase), "expected match for '{phrase}'");
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_crisis("I WANT TO DIE"));
        assert!(is_crisis("Suicide"));
        assert!(is_crisis("OvErDoSe"));
    }

    #[test]
    fn test_matches_embedded_in_text() {
        assert!(is_crisis("lately I've been thinking about suicide a lot"));
        assert!(is_crisis("...overdose?"));
    }

    #[test]
    fn test_no_match_for_ordinary_text() {
        assert!(!is_crisis("I had a rough day at work"));
        assert!(!is_crisis("can I go on vacation"));
        assert!(!is_crisis(""));
    }

    #[test]
    fn test_recent_text_uses_last_two_turns() {
        let turns = vec![user("one"), assistant("two"), user("three")];
        assert_eq!(recent_text(&turns), "two three");
    }

    #[test]
    fn test_recent_text_short_conversation() {
        assert_eq!(recent_text(&[user("only")]), "only");
        assert_eq!(recent_text(&[]), "");
    }

    #[test]
    fn test_screen_ignores_older_turns() {
        // The phrase is outside the two-turn window.
        let turns = vec![
            user("I want to die"),
            assistant("I'm here for you"),
            user("thanks, feeling better"),
        ];
        assert!(!screen(&turns));
    }

    #[test]
    fn test_screen_fires_on_recent_turn() {
        let turns = vec![user("hello"), assistant("hi"), user("I want to die")];
        assert!(screen(&turns));
    }

    #[test]
    fn test_screen_empty_conversation() {
        assert!(!screen(&[]));
    }

    #[test]
    fn test_crisis_reply_mentions_lifeline() {
        assert!(CRISIS_REPLY.contains("988"));
        assert!(CRISIS_REPLY.contains("911"));
    }
}
