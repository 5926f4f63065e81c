use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use tandem_core::conversation::Turn;
use tandem_core::error::{Result, TandemError};
use tandem_core::feedback::FeedbackAnswers;
use tandem_core::language::Language;
use tandem_core::record::{ChatRecord, CombinedRecord, FeedbackRecord, PersistTarget, RecordSink, RemoteStore};
use tandem_core::scenario;
use tandem_core::session::{BatchState, SessionMeta};
use tandem_infrastructure::{FallbackLog, PersistenceGateway};
use tempfile::TempDir;

struct MockRemote {
    fail_feedback: bool,
    chats: AtomicUsize,
    feedbacks: AtomicUsize,
}

impl MockRemote {
    fn new(fail_feedback: bool) -> Self {
        Self {
            fail_feedback,
            chats: AtomicUsize::new(0),
            feedbacks: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl RemoteStore for MockRemote {
    async fn insert_chat(&self, _record: &ChatRecord) -> Result<()> {
        self.chats.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn insert_feedback(&self, _record: &FeedbackRecord) -> Result<()> {
        if self.fail_feedback {
            return Err(TandemError::storage("permission denied for table"));
        }
        self.feedbacks.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn sample_session() -> (SessionMeta, Vec<Turn>, FeedbackAnswers) {
    let meta = SessionMeta::new(
        "student-9",
        Language::German,
        BatchState::Batch1,
        scenario::find(2).unwrap(),
    );
    let turns = vec![
        Turn::system("persona"),
        Turn::user("Guten Tag"),
        Turn::assistant("Guten Tag, worum geht es?"),
    ];
    let feedback = FeedbackAnswers::new([2; 12], Some("gut".into())).unwrap();
    (meta, turns, feedback)
}

fn line_count(path: &std::path::Path) -> usize {
    std::fs::read_to_string(path)
        .map(|s| s.lines().count())
        .unwrap_or(0)
}

#[tokio::test]
async fn unconfigured_remote_falls_back_to_exactly_one_local_line() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("chatlogs.jsonl");
    let gateway = PersistenceGateway::new(None, FallbackLog::new(&log_path));

    let (meta, turns, feedback) = sample_session();
    let outcome = gateway.persist(&meta, &turns, &feedback).await.unwrap();

    assert_eq!(outcome.target, PersistTarget::Local);
    assert!(outcome.remote_error.is_some());
    assert_eq!(line_count(&log_path), 1);

    // the line matches the combined record schema
    let contents = std::fs::read_to_string(&log_path).unwrap();
    let record: CombinedRecord = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
    assert_eq!(record.meta.roleplay_id, 2);
    assert_eq!(record.messages.len(), 3);
    assert!(record.transcript.starts_with("Sie: Guten Tag"));
    assert_eq!(record.feedback.q1, 2);
}

#[tokio::test]
async fn successful_remote_writes_no_local_line() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("chatlogs.jsonl");
    let remote = Arc::new(MockRemote::new(false));
    let gateway = PersistenceGateway::new(Some(remote.clone()), FallbackLog::new(&log_path));

    let (meta, turns, feedback) = sample_session();
    let outcome = gateway.persist(&meta, &turns, &feedback).await.unwrap();

    assert_eq!(outcome.target, PersistTarget::Remote);
    assert!(outcome.remote_error.is_none());
    assert_eq!(remote.chats.load(Ordering::SeqCst), 1);
    assert_eq!(remote.feedbacks.load(Ordering::SeqCst), 1);
    assert_eq!(line_count(&log_path), 0);
}

#[tokio::test]
async fn partial_remote_failure_routes_combined_record_to_fallback() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("chatlogs.jsonl");
    let remote = Arc::new(MockRemote::new(true));
    let gateway = PersistenceGateway::new(Some(remote), FallbackLog::new(&log_path));

    let (meta, turns, feedback) = sample_session();
    let outcome = gateway.persist(&meta, &turns, &feedback).await.unwrap();

    // feedback insert failed after the chat insert: the whole attempt
    // counts as failed and the full record lands locally
    assert_eq!(outcome.target, PersistTarget::Local);
    assert!(outcome.remote_error.unwrap().contains("permission denied"));
    assert_eq!(line_count(&log_path), 1);
}

#[tokio::test]
async fn unwritable_fallback_is_terminal() {
    let gateway = PersistenceGateway::new(None, FallbackLog::new("/nonexistent-dir/x.jsonl"));
    let (meta, turns, feedback) = sample_session();
    let err = gateway.persist(&meta, &turns, &feedback).await.unwrap_err();
    assert!(err.is_io());
}
