//! Conversation turn types.
//!
//! This module contains types for representing turns in a role-play
//! conversation, including roles and turn content. The ordered turn
//! sequence is the literal prompt history sent to the conversation
//! partner, so insertion order is meaningful.

use serde::{Deserialize, Serialize};

/// Fixed preamble prepended to every scenario persona script when a
/// conversation is seeded. Keeps the simulated partner in character.
pub const PARTNER_PREAMBLE: &str = "You are the simulated conversation partner in a role-play.\n\
Follow these instructions carefully and stay in character.\n\n";

/// Represents the role of a turn in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Hidden persona instructions for the simulated partner.
    System,
    /// Turn typed by the learner.
    User,
    /// Reply from the simulated partner.
    Assistant,
}

/// A single turn in a conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// The role of the turn author.
    pub role: Role,
    /// The text content of the turn.
    pub content: String,
}

impl Turn {
    /// Creates the seed turn carrying the hidden persona script.
    pub fn system(persona_script: impl AsRef<str>) -> Self {
        Self {
            role: Role::System,
            content: format!("{}{}", PARTNER_PREAMBLE, persona_script.as_ref()),
        }
    }

    /// Creates a learner turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Creates a partner turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_turn_carries_preamble() {
        let turn = Turn::system("Act as the principal.");
        assert_eq!(turn.role, Role::System);
        assert!(turn.content.starts_with(PARTNER_PREAMBLE));
        assert!(turn.content.ends_with("Act as the principal."));
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Turn::user("hi")).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"hi"}"#);
    }
}
