//! Transcript rendering.
//!
//! Turns an ordered turn sequence into the human-readable transcript
//! stored alongside the structured record. Pure function; system turns
//! are skipped.

use crate::conversation::{Role, Turn};
use crate::language::Language;

/// Localized speaker label for learner turns.
fn user_label(language: Language) -> &'static str {
    match language {
        Language::English => "You",
        Language::German => "Sie",
    }
}

/// Localized speaker label for partner turns.
fn assistant_label(language: Language) -> &'static str {
    match language {
        Language::English => "AI Partner",
        Language::German => "Gesprächspartner:in (KI)",
    }
}

/// Renders the turns as `"<label>: <content>"` lines joined by newlines.
///
/// System turns are skipped; user and assistant turns appear in their
/// original order, one line each.
pub fn format_transcript(turns: &[Turn], language: Language) -> String {
    let lines: Vec<String> = turns
        .iter()
        .filter_map(|turn| match turn.role {
            Role::System => None,
            Role::User => Some(format!("{}: {}", user_label(language), turn.content)),
            Role::Assistant => Some(format!("{}: {}", assistant_label(language), turn.content)),
        })
        .collect();
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_turns() -> Vec<Turn> {
        vec![
            Turn::system("hidden persona"),
            Turn::user("Good morning"),
            Turn::assistant("What can I do for you?"),
            Turn::user("I have a request"),
        ]
    }

    #[test]
    fn test_one_line_per_non_system_turn_in_order() {
        let output = format_transcript(&sample_turns(), Language::English);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "You: Good morning");
        assert_eq!(lines[1], "AI Partner: What can I do for you?");
        assert_eq!(lines[2], "You: I have a request");
    }

    #[test]
    fn test_system_turns_skipped() {
        let output = format_transcript(&sample_turns(), Language::English);
        assert!(!output.contains("hidden persona"));
    }

    #[test]
    fn test_german_labels() {
        let output = format_transcript(&sample_turns(), Language::German);
        assert!(output.starts_with("Sie: Good morning"));
        assert!(output.contains("Gesprächspartner:in (KI): What can I do for you?"));
    }

    #[test]
    fn test_idempotent() {
        let turns = sample_turns();
        assert_eq!(
            format_transcript(&turns, Language::German),
            format_transcript(&turns, Language::German)
        );
    }

    #[test]
    fn test_empty_turns_empty_output() {
        assert_eq!(format_transcript(&[], Language::English), "");
    }
}
