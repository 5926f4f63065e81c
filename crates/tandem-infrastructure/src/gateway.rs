//! Persistence gateway: remote store first, local fallback second.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tandem_core::conversation::Turn;
use tandem_core::error::Result;
use tandem_core::feedback::FeedbackAnswers;
use tandem_core::record::{
    ChatRecord, CombinedRecord, FeedbackRecord, PersistOutcome, RecordSink, RemoteStore,
};
use tandem_core::session::SessionMeta;
use tracing::{info, warn};

use crate::fallback_log::FallbackLog;

/// Persists completed sessions.
///
/// Attempts the remote store when one is configured; on any remote
/// failure (including a missing configuration) the combined record is
/// appended to the local fallback log and the remote error travels back
/// in the outcome for display. Only a failed fallback write makes the
/// persist call itself fail.
pub struct PersistenceGateway {
    remote: Option<Arc<dyn RemoteStore>>,
    log: FallbackLog,
}

impl PersistenceGateway {
    pub fn new(remote: Option<Arc<dyn RemoteStore>>, log: FallbackLog) -> Self {
        Self { remote, log }
    }

    /// True if a remote store is configured.
    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    async fn try_remote(
        &self,
        chat: &ChatRecord,
        feedback: &FeedbackRecord,
    ) -> std::result::Result<(), String> {
        let remote = self
            .remote
            .as_ref()
            .ok_or_else(|| "Remote store not configured".to_string())?;

        // Two rows, one logical operation: any failure fails the whole
        // attempt and routes the combined record to the fallback log, so
        // a partial commit is never silent.
        remote
            .insert_chat(chat)
            .await
            .map_err(|err| err.to_string())?;
        remote
            .insert_feedback(feedback)
            .await
            .map_err(|err| err.to_string())?;
        Ok(())
    }
}

#[async_trait]
impl RecordSink for PersistenceGateway {
    async fn persist(
        &self,
        meta: &SessionMeta,
        turns: &[Turn],
        feedback: &FeedbackAnswers,
    ) -> Result<PersistOutcome> {
        let timestamp = Utc::now().to_rfc3339();
        let chat_record = ChatRecord::build(meta, turns, &timestamp)?;
        let feedback_record = FeedbackRecord::build(meta, feedback, &timestamp);

        match self.try_remote(&chat_record, &feedback_record).await {
            Ok(()) => {
                info!(roleplay_id = meta.roleplay_id, "session saved to remote store");
                Ok(PersistOutcome::remote())
            }
            Err(remote_error) => {
                warn!(error = %remote_error, "remote save failed, using local fallback");
                let record = CombinedRecord::build(meta, turns, feedback, &timestamp);
                self.log.append(&record)?;
                info!(path = %self.log.path().display(), "session saved to local fallback log");
                Ok(PersistOutcome::local(Some(remote_error)))
            }
        }
    }
}
