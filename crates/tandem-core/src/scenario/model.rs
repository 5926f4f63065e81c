use serde::{Deserialize, Serialize};

use crate::language::Language;

/// The communication register a scenario trains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommunicationType {
    /// Goal-driven talk where the roles carry unequal social weight.
    Strategic,
    /// Listening-driven talk aimed at shared understanding.
    Understanding,
}

impl CommunicationType {
    /// Tag as stored in persisted records.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommunicationType::Strategic => "strategic",
            CommunicationType::Understanding => "understanding",
        }
    }
}

/// A static, bilingual role-play script.
///
/// Scenarios are immutable catalog entries; the learner text and the
/// hidden persona text are opaque configuration from the trainer's point
/// of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub id: u32,
    /// Batch phase this scenario belongs to (1 or 2).
    pub phase: u8,
    pub communication_type: CommunicationType,
    pub title_en: &'static str,
    pub title_de: &'static str,
    pub learner_en: &'static str,
    pub learner_de: &'static str,
    pub persona_en: &'static str,
    pub persona_de: &'static str,
}

impl Scenario {
    /// Localized title.
    pub fn title(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.title_en,
            Language::German => self.title_de,
        }
    }

    /// Localized learner instructions, with the common header prepended.
    pub fn learner_instructions(&self, language: Language) -> String {
        let body = match language {
            Language::English => self.learner_en,
            Language::German => self.learner_de,
        };
        format!("{}{}", super::learner_header(language), body)
    }

    /// Localized hidden persona script for the simulated partner.
    pub fn persona_script(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.persona_en,
            Language::German => self.persona_de,
        }
    }
}
