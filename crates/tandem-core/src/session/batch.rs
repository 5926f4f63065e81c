//! Batch progression state.

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Which batch of scenarios the session is working through.
///
/// Advances monotonically `Batch1 -> Batch2 -> Finished` and never
/// regresses; `Finished` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchState {
    Batch1,
    Batch2,
    Finished,
}

impl BatchState {
    /// Persisted `batch_step` label.
    pub fn as_str(&self) -> &'static str {
        match self {
            BatchState::Batch1 => "batch1",
            BatchState::Batch2 => "batch2",
            BatchState::Finished => "finished",
        }
    }

    /// Scenario phase offered by this batch; `None` once finished.
    pub fn phase(&self) -> Option<u8> {
        match self {
            BatchState::Batch1 => Some(1),
            BatchState::Batch2 => Some(2),
            BatchState::Finished => None,
        }
    }

    /// The state after completing a conversation in this batch.
    pub fn advanced(&self) -> BatchState {
        match self {
            BatchState::Batch1 => BatchState::Batch2,
            BatchState::Batch2 | BatchState::Finished => BatchState::Finished,
        }
    }

    /// Localized heading for this batch; `None` once finished.
    pub fn label(&self, language: Language) -> Option<&'static str> {
        match (self, language) {
            (BatchState::Batch1, Language::English) => Some("Batch 1 – Role-Plays 1–5"),
            (BatchState::Batch1, Language::German) => Some("Block 1 – Rollenspiele 1–5"),
            (BatchState::Batch2, Language::English) => Some("Batch 2 – Role-Plays 6–10"),
            (BatchState::Batch2, Language::German) => Some("Block 2 – Rollenspiele 6–10"),
            (BatchState::Finished, _) => None,
        }
    }
}

impl std::fmt::Display for BatchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_is_monotonic() {
        let mut state = BatchState::Batch1;
        state = state.advanced();
        assert_eq!(state, BatchState::Batch2);
        state = state.advanced();
        assert_eq!(state, BatchState::Finished);
        // Finished is terminal
        assert_eq!(state.advanced(), BatchState::Finished);
    }

    #[test]
    fn test_phase_mapping() {
        assert_eq!(BatchState::Batch1.phase(), Some(1));
        assert_eq!(BatchState::Batch2.phase(), Some(2));
        assert_eq!(BatchState::Finished.phase(), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            BatchState::Batch1.label(Language::German),
            Some("Block 1 – Rollenspiele 1–5")
        );
        assert_eq!(BatchState::Finished.label(Language::English), None);
    }
}
