//! The session controller state machine.

use tracing::{debug, warn};

use crate::conversation::Turn;
use crate::error::{Result, TandemError};
use crate::feedback::FeedbackAnswers;
use crate::language::Language;
use crate::partner::ConversationPartner;
use crate::record::{PersistOutcome, RecordSink};
use crate::scenario;

use super::batch::BatchState;
use super::meta::SessionMeta;

/// Drives one learner's session through its states.
///
/// States: Idle (no conversation), Active (learner turns flowing),
/// AwaitingFeedback (conversation ended, survey pending), Finished
/// (both batches done, terminal). Batch state advances `Batch1 ->
/// Batch2 -> Finished` on each submitted survey and never regresses.
pub struct SessionController {
    student_id: String,
    batch: BatchState,
    meta: Option<SessionMeta>,
    turns: Vec<Turn>,
    conversation_active: bool,
    feedback_submitted: bool,
}

impl SessionController {
    /// Creates a fresh controller at the start of batch 1.
    pub fn new(student_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            batch: BatchState::Batch1,
            meta: None,
            turns: Vec::new(),
            conversation_active: false,
            feedback_submitted: false,
        }
    }

    pub fn batch(&self) -> BatchState {
        self.batch
    }

    pub fn is_finished(&self) -> bool {
        self.batch == BatchState::Finished
    }

    pub fn conversation_active(&self) -> bool {
        self.conversation_active
    }

    pub fn feedback_submitted(&self) -> bool {
        self.feedback_submitted
    }

    /// The conversation ended and its survey has not been submitted yet.
    pub fn awaiting_feedback(&self) -> bool {
        !self.conversation_active && !self.feedback_submitted && self.turns.len() > 1
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn meta(&self) -> Option<&SessionMeta> {
        self.meta.as_ref()
    }

    /// Scenario ids offered for the current batch; empty once finished.
    pub fn available_scenarios(&self) -> Vec<u32> {
        match self.batch.phase() {
            Some(phase) => scenario::ids_for_phase(phase),
            None => Vec::new(),
        }
    }

    /// Applies the learner's scenario/language selection.
    ///
    /// If the selection differs from the recorded session metadata in
    /// scenario, language, or batch, the in-progress conversation is
    /// discarded silently - even mid-conversation - and the metadata is
    /// rebuilt. Selection change wins over in-progress state.
    ///
    /// # Errors
    ///
    /// Rejects selection once the session is finished, for unknown
    /// scenario ids, and for scenarios outside the current batch's phase.
    pub fn select(&mut self, scenario_id: u32, language: Language) -> Result<&SessionMeta> {
        let phase = self
            .batch
            .phase()
            .ok_or_else(|| TandemError::invalid_input("Session is finished; nothing to select"))?;

        let scenario = scenario::find(scenario_id)
            .ok_or_else(|| TandemError::not_found("scenario", scenario_id.to_string()))?;
        if scenario.phase != phase {
            return Err(TandemError::invalid_input(format!(
                "Scenario {} belongs to phase {}, but the current batch is {}",
                scenario_id, scenario.phase, self.batch
            )));
        }

        let unchanged = self
            .meta
            .as_ref()
            .is_some_and(|meta| meta.matches(scenario_id, language, self.batch));
        if !unchanged {
            if self.conversation_active {
                debug!(scenario_id, %language, "selection changed mid-conversation, discarding turns");
            }
            self.turns.clear();
            self.conversation_active = false;
            self.feedback_submitted = false;
            self.meta = Some(SessionMeta::new(
                self.student_id.clone(),
                language,
                self.batch,
                scenario,
            ));
        }

        Ok(self.meta.as_ref().unwrap())
    }

    /// Starts (or restarts) the conversation for the current selection.
    ///
    /// Clears any prior turns and seeds the history with the single
    /// `system` turn carrying the scenario's hidden persona script.
    ///
    /// # Errors
    ///
    /// Fails if nothing is selected, if the session is finished, or if a
    /// completed conversation is still awaiting its survey.
    pub fn start_conversation(&mut self) -> Result<()> {
        if self.is_finished() {
            return Err(TandemError::invalid_input(
                "Session is finished; no further conversations",
            ));
        }
        if self.awaiting_feedback() {
            return Err(TandemError::invalid_input(
                "Submit feedback for the completed conversation first",
            ));
        }
        let meta = self
            .meta
            .as_ref()
            .ok_or_else(|| TandemError::invalid_input("Select a scenario before starting"))?;

        // Restart semantics: always reseed from scratch.
        let scenario = scenario::find(meta.roleplay_id)
            .ok_or_else(|| TandemError::internal("Selected scenario vanished from the catalog"))?;
        self.turns.clear();
        self.feedback_submitted = false;
        self.turns
            .push(Turn::system(scenario.persona_script(meta.language)));
        self.conversation_active = true;
        debug!(scenario_id = meta.roleplay_id, "conversation started");
        Ok(())
    }

    /// Relays one learner turn to the conversation partner.
    ///
    /// Appends the user turn, awaits the partner's reply, and appends it.
    /// A partner failure is converted into a visible assistant-role error
    /// turn so the conversation continues instead of aborting; the turn
    /// sequence grows by exactly one assistant turn either way.
    ///
    /// # Errors
    ///
    /// Fails only if no conversation is active.
    pub async fn send_learner_turn(
        &mut self,
        text: &str,
        partner: &dyn ConversationPartner,
    ) -> Result<&Turn> {
        if !self.conversation_active {
            return Err(TandemError::invalid_input("No active conversation"));
        }

        self.turns.push(Turn::user(text));
        let reply = match partner.reply(&self.turns).await {
            Ok(turn) => turn,
            Err(err) => {
                warn!(error = %err, "conversation partner call failed");
                Turn::assistant(format!("[Error from conversation partner: {err}]"))
            }
        };
        self.turns.push(reply);
        Ok(self.turns.last().unwrap())
    }

    /// Ends the active conversation and moves to the feedback stage.
    ///
    /// # Errors
    ///
    /// Fails if no conversation is active, or if nothing beyond the seed
    /// turn was exchanged (a seed-only conversation has nothing to rate).
    pub fn end_conversation(&mut self) -> Result<()> {
        if !self.conversation_active {
            return Err(TandemError::invalid_input("No active conversation"));
        }
        if self.turns.len() <= 1 {
            return Err(TandemError::invalid_input(
                "Nothing was said yet; send at least one message before ending",
            ));
        }
        self.conversation_active = false;
        Ok(())
    }

    /// Persists the completed conversation with its survey and advances
    /// the batch.
    ///
    /// The batch advances and the conversation clears regardless of
    /// whether the record landed remotely or in the local fallback. Only
    /// a failed fallback write leaves the state untouched, so the whole
    /// submission can be retried.
    ///
    /// # Errors
    ///
    /// Fails if no conversation is awaiting feedback, or if the persist
    /// call itself failed terminally (local fallback write error).
    pub async fn submit_feedback(
        &mut self,
        answers: FeedbackAnswers,
        sink: &dyn RecordSink,
    ) -> Result<PersistOutcome> {
        if !self.awaiting_feedback() {
            return Err(TandemError::invalid_input(
                "No completed conversation awaiting feedback",
            ));
        }
        let meta = self
            .meta
            .as_ref()
            .ok_or_else(|| TandemError::internal("Conversation without session metadata"))?;

        let outcome = sink.persist(meta, &self.turns, &answers).await?;

        self.feedback_submitted = true;
        self.batch = self.batch.advanced();
        self.turns.clear();
        self.conversation_active = false;
        debug!(batch = %self.batch, "feedback submitted, batch advanced");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::PersistTarget;
    use async_trait::async_trait;
    use std::sync::Mutex;

    // Mock partner that either echoes or always fails.
    struct MockPartner {
        fail: bool,
    }

    #[async_trait]
    impl ConversationPartner for MockPartner {
        async fn reply(&self, turns: &[Turn]) -> Result<Turn> {
            assert!(!turns.is_empty());
            assert_eq!(turns[0].role, crate::conversation::Role::System);
            if self.fail {
                Err(TandemError::provider("connection refused"))
            } else {
                Ok(Turn::assistant(format!("echo: {}", turns.last().unwrap().content)))
            }
        }
    }

    // Mock sink recording every persisted meta.
    struct MockSink {
        persisted: Mutex<Vec<SessionMeta>>,
        fail: bool,
    }

    impl MockSink {
        fn new() -> Self {
            Self {
                persisted: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                persisted: Mutex::new(Vec::new()),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl RecordSink for MockSink {
        async fn persist(
            &self,
            meta: &SessionMeta,
            _turns: &[Turn],
            _feedback: &FeedbackAnswers,
        ) -> Result<PersistOutcome> {
            if self.fail {
                return Err(TandemError::io("disk full"));
            }
            self.persisted.lock().unwrap().push(meta.clone());
            Ok(PersistOutcome::local(None))
        }
    }

    fn answers() -> FeedbackAnswers {
        FeedbackAnswers::new([3; 12], None).unwrap()
    }

    async fn run_through_conversation(controller: &mut SessionController) {
        controller.start_conversation().unwrap();
        controller
            .send_learner_turn("Hello", &MockPartner { fail: false })
            .await
            .unwrap();
        controller.end_conversation().unwrap();
    }

    #[test]
    fn test_available_scenarios_follow_batch() {
        let controller = SessionController::new("s1");
        assert_eq!(controller.available_scenarios(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_select_rejects_wrong_phase() {
        let mut controller = SessionController::new("s1");
        // scenario 6 is phase 2, batch is still batch1
        assert!(controller.select(6, Language::English).is_err());
        assert!(controller.select(42, Language::English).is_err());
    }

    #[tokio::test]
    async fn test_start_and_hello_yields_three_turns() {
        let mut controller = SessionController::new("s1");
        controller.select(1, Language::English).unwrap();
        controller.start_conversation().unwrap();

        assert_eq!(controller.turns().len(), 1);
        assert_eq!(controller.turns()[0].role, crate::conversation::Role::System);

        controller
            .send_learner_turn("Hello", &MockPartner { fail: false })
            .await
            .unwrap();
        assert_eq!(controller.turns().len(), 3);
        assert_eq!(controller.turns()[1].content, "Hello");
        assert_eq!(controller.turns()[2].content, "echo: Hello");
    }

    #[tokio::test]
    async fn test_partner_failure_becomes_visible_error_turn() {
        let mut controller = SessionController::new("s1");
        controller.select(1, Language::English).unwrap();
        controller.start_conversation().unwrap();

        let before = controller.turns().len();
        let reply = controller
            .send_learner_turn("Hello", &MockPartner { fail: true })
            .await
            .unwrap()
            .clone();

        // user turn + exactly one assistant turn, not zero, not two
        assert_eq!(controller.turns().len(), before + 2);
        assert_eq!(reply.role, crate::conversation::Role::Assistant);
        assert!(reply.content.contains("[Error from conversation partner:"));
    }

    #[tokio::test]
    async fn test_selection_change_resets_mid_conversation() {
        let mut controller = SessionController::new("s1");
        controller.select(1, Language::English).unwrap();
        controller.start_conversation().unwrap();
        controller
            .send_learner_turn("Hello", &MockPartner { fail: false })
            .await
            .unwrap();

        // switching scenario mid-conversation silently discards everything
        controller.select(2, Language::English).unwrap();
        assert!(controller.turns().is_empty());
        assert!(!controller.conversation_active());
        assert!(!controller.feedback_submitted());

        // language change triggers the same reset
        controller.start_conversation().unwrap();
        controller.select(2, Language::German).unwrap();
        assert!(controller.turns().is_empty());
    }

    #[tokio::test]
    async fn test_reselecting_same_scenario_keeps_conversation() {
        let mut controller = SessionController::new("s1");
        controller.select(1, Language::English).unwrap();
        controller.start_conversation().unwrap();
        controller
            .send_learner_turn("Hello", &MockPartner { fail: false })
            .await
            .unwrap();

        controller.select(1, Language::English).unwrap();
        assert_eq!(controller.turns().len(), 3);
        assert!(controller.conversation_active());
    }

    #[test]
    fn test_end_requires_substance() {
        let mut controller = SessionController::new("s1");
        controller.select(1, Language::English).unwrap();
        controller.start_conversation().unwrap();
        // seed-only conversation cannot be ended into the feedback stage
        assert!(controller.end_conversation().is_err());
        assert!(controller.conversation_active());
    }

    #[tokio::test]
    async fn test_batch_progression_through_both_submissions() {
        let mut controller = SessionController::new("s1");
        let sink = MockSink::new();

        controller.select(1, Language::English).unwrap();
        run_through_conversation(&mut controller).await;
        let outcome = controller.submit_feedback(answers(), &sink).await.unwrap();
        assert_eq!(outcome.target, PersistTarget::Local);
        assert_eq!(controller.batch(), BatchState::Batch2);
        assert!(controller.turns().is_empty());
        assert_eq!(controller.available_scenarios(), vec![6, 7, 8, 9, 10]);

        controller.select(7, Language::English).unwrap();
        run_through_conversation(&mut controller).await;
        controller.submit_feedback(answers(), &sink).await.unwrap();
        assert_eq!(controller.batch(), BatchState::Finished);
        assert!(controller.is_finished());
        assert!(controller.available_scenarios().is_empty());
        assert!(controller.select(1, Language::English).is_err());

        assert_eq!(sink.persisted.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_start_blocked_while_feedback_pending() {
        let mut controller = SessionController::new("s1");
        controller.select(1, Language::English).unwrap();
        run_through_conversation(&mut controller).await;

        assert!(controller.awaiting_feedback());
        assert!(controller.start_conversation().is_err());
    }

    #[tokio::test]
    async fn test_failed_persist_leaves_state_for_retry() {
        let mut controller = SessionController::new("s1");
        controller.select(1, Language::English).unwrap();
        run_through_conversation(&mut controller).await;

        let err = controller
            .submit_feedback(answers(), &MockSink::failing())
            .await
            .unwrap_err();
        assert!(err.is_io());

        // still awaiting feedback, batch unchanged, turns intact
        assert!(controller.awaiting_feedback());
        assert_eq!(controller.batch(), BatchState::Batch1);
        assert_eq!(controller.turns().len(), 3);

        // the retry with a working sink succeeds and advances
        controller
            .submit_feedback(answers(), &MockSink::new())
            .await
            .unwrap();
        assert_eq!(controller.batch(), BatchState::Batch2);
    }

    #[tokio::test]
    async fn test_submit_without_conversation_rejected() {
        let mut controller = SessionController::new("s1");
        controller.select(1, Language::English).unwrap();
        let result = controller.submit_feedback(answers(), &MockSink::new()).await;
        assert!(result.is_err());
    }
}
