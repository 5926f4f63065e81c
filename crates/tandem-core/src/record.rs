//! Persisted record types and the persistence seam.
//!
//! One completed conversation produces two related rows (chat and
//! feedback) for the remote store, or one combined JSON line for the
//! local fallback log. All three are built here so the column layout
//! lives in a single place.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::conversation::Turn;
use crate::error::Result;
use crate::feedback::FeedbackAnswers;
use crate::session::SessionMeta;
use crate::transcript::format_transcript;

/// Where a persist attempt ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersistTarget {
    Remote,
    Local,
}

/// Outcome of one persist call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistOutcome {
    pub target: PersistTarget,
    /// Remote failure that forced the fallback, if any.
    pub remote_error: Option<String>,
}

impl PersistOutcome {
    pub fn remote() -> Self {
        Self {
            target: PersistTarget::Remote,
            remote_error: None,
        }
    }

    pub fn local(remote_error: Option<String>) -> Self {
        Self {
            target: PersistTarget::Local,
            remote_error,
        }
    }
}

/// Row for the remote chat table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRecord {
    pub timestamp: String,
    pub student_id: String,
    pub language: String,
    pub batch_step: String,
    pub roleplay_id: u32,
    pub roleplay_title_en: String,
    pub roleplay_title_de: String,
    pub communication_type: String,
    pub messages_json: String,
    pub transcript: String,
}

impl ChatRecord {
    /// Builds the chat row from session state.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the turn sequence cannot be
    /// encoded as JSON.
    pub fn build(meta: &SessionMeta, turns: &[Turn], timestamp: &str) -> Result<Self> {
        Ok(Self {
            timestamp: timestamp.to_string(),
            student_id: meta.student_id.clone(),
            language: meta.language.as_str().to_string(),
            batch_step: meta.batch.as_str().to_string(),
            roleplay_id: meta.roleplay_id,
            roleplay_title_en: meta.roleplay_title_en.clone(),
            roleplay_title_de: meta.roleplay_title_de.clone(),
            communication_type: meta.communication_type.as_str().to_string(),
            messages_json: serde_json::to_string(turns)?,
            transcript: format_transcript(turns, meta.language),
        })
    }
}

/// Row for the remote feedback table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub timestamp: String,
    pub student_id: String,
    pub language: String,
    pub batch_step: String,
    pub roleplay_id: u32,
    pub q1: u8,
    pub q2: u8,
    pub q3: u8,
    pub q4: u8,
    pub q5: u8,
    pub q6: u8,
    pub q7: u8,
    pub q8: u8,
    pub q9: u8,
    pub q10: u8,
    pub q11: u8,
    pub q12: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl FeedbackRecord {
    /// Builds the feedback row from session state.
    pub fn build(meta: &SessionMeta, feedback: &FeedbackAnswers, timestamp: &str) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            student_id: meta.student_id.clone(),
            language: meta.language.as_str().to_string(),
            batch_step: meta.batch.as_str().to_string(),
            roleplay_id: meta.roleplay_id,
            q1: feedback.q1,
            q2: feedback.q2,
            q3: feedback.q3,
            q4: feedback.q4,
            q5: feedback.q5,
            q6: feedback.q6,
            q7: feedback.q7,
            q8: feedback.q8,
            q9: feedback.q9,
            q10: feedback.q10,
            q11: feedback.q11,
            q12: feedback.q12,
            comment: feedback.comment.clone(),
        }
    }
}

/// The combined record appended as one line to the local fallback log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedRecord {
    pub timestamp: String,
    pub meta: SessionMeta,
    pub feedback: FeedbackAnswers,
    pub messages: Vec<Turn>,
    pub transcript: String,
}

impl CombinedRecord {
    /// Builds the fallback-log record from session state.
    pub fn build(
        meta: &SessionMeta,
        turns: &[Turn],
        feedback: &FeedbackAnswers,
        timestamp: &str,
    ) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            meta: meta.clone(),
            feedback: feedback.clone(),
            messages: turns.to_vec(),
            transcript: format_transcript(turns, meta.language),
        }
    }
}

/// Destination for completed sessions.
///
/// One call persists the conversation and its feedback as a single
/// logical operation; implementations decide between the remote store
/// and the local fallback and report where the data ended up.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Persists one completed conversation plus its survey.
    ///
    /// # Errors
    ///
    /// Returns an error only if the final fallback write failed; a remote
    /// failure alone surfaces through `PersistOutcome::remote_error`.
    async fn persist(
        &self,
        meta: &SessionMeta,
        turns: &[Turn],
        feedback: &FeedbackAnswers,
    ) -> Result<PersistOutcome>;
}

/// Row-insert access to the remote tabular store.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    async fn insert_chat(&self, record: &ChatRecord) -> Result<()>;
    async fn insert_feedback(&self, record: &FeedbackRecord) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::scenario;
    use crate::session::BatchState;

    fn sample_meta() -> SessionMeta {
        SessionMeta::new(
            "student-7",
            Language::English,
            BatchState::Batch1,
            scenario::find(1).unwrap(),
        )
    }

    #[test]
    fn test_chat_record_columns() {
        let turns = vec![Turn::system("persona"), Turn::user("Hello")];
        let record = ChatRecord::build(&sample_meta(), &turns, "2026-01-01T00:00:00Z").unwrap();
        assert_eq!(record.batch_step, "batch1");
        assert_eq!(record.language, "English");
        assert_eq!(record.communication_type, "strategic");
        assert_eq!(record.transcript, "You: Hello");
        // messages_json keeps the system turn even though the transcript drops it
        assert!(record.messages_json.contains("\"system\""));
    }

    #[test]
    fn test_combined_record_round_trips_as_json() {
        let turns = vec![Turn::system("persona"), Turn::user("Hi")];
        let feedback = FeedbackAnswers::new([4; 12], None).unwrap();
        let record = CombinedRecord::build(&sample_meta(), &turns, &feedback, "t");
        let line = serde_json::to_string(&record).unwrap();
        let parsed: CombinedRecord = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, record);
    }
}
