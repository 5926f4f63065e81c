//! Session metadata.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::language::Language;
use crate::scenario::{CommunicationType, Scenario};

use super::batch::BatchState;

/// Identifying fields of one role-play session, stamped into every
/// persisted record.
///
/// Constructed fresh whenever scenario, language, or batch changes;
/// rebuilding it invalidates the in-progress conversation and feedback
/// state (the reset rule lives in the controller).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMeta {
    /// Process-unique session identifier.
    pub session_id: Uuid,
    /// Free-text student identifier; may be empty.
    pub student_id: String,
    pub language: Language,
    pub batch: BatchState,
    pub roleplay_id: u32,
    pub roleplay_title_en: String,
    pub roleplay_title_de: String,
    pub communication_type: CommunicationType,
}

impl SessionMeta {
    /// Builds fresh metadata for the given selection.
    pub fn new(
        student_id: impl Into<String>,
        language: Language,
        batch: BatchState,
        scenario: &Scenario,
    ) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            student_id: student_id.into(),
            language,
            batch,
            roleplay_id: scenario.id,
            roleplay_title_en: scenario.title_en.to_string(),
            roleplay_title_de: scenario.title_de.to_string(),
            communication_type: scenario.communication_type,
        }
    }

    /// True if this metadata still matches the given selection.
    pub fn matches(&self, scenario_id: u32, language: Language, batch: BatchState) -> bool {
        self.roleplay_id == scenario_id && self.language == language && self.batch == batch
    }
}
