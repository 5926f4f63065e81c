//! Local append-only fallback log.
//!
//! Newline-delimited JSON, one independently parseable record per line.
//! Each append is a single buffered write followed by a flush, so
//! concurrent sessions appending to the same file never interleave
//! within a line and never read-modify-write. The file grows unbounded;
//! there is no rotation or compaction.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tandem_core::error::Result;
use tandem_core::record::CombinedRecord;

/// Append-only writer for the local fallback log.
#[derive(Debug, Clone)]
pub struct FallbackLog {
    path: PathBuf,
}

impl FallbackLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one record as a single JSON line.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the record cannot be encoded,
    /// or an IO error if the write fails. A failure here is terminal
    /// for the persist attempt; the caller surfaces it.
    pub fn append(&self, record: &CombinedRecord) -> Result<()> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tandem_core::conversation::Turn;
    use tandem_core::feedback::FeedbackAnswers;
    use tandem_core::language::Language;
    use tandem_core::scenario;
    use tandem_core::session::{BatchState, SessionMeta};

    fn sample_record() -> CombinedRecord {
        let meta = SessionMeta::new(
            "student-1",
            Language::English,
            BatchState::Batch1,
            scenario::find(1).unwrap(),
        );
        let turns = vec![Turn::system("persona"), Turn::user("Hello")];
        let feedback = FeedbackAnswers::new([4; 12], Some("fine".into())).unwrap();
        CombinedRecord::build(&meta, &turns, &feedback, "2026-01-01T00:00:00Z")
    }

    #[test]
    fn test_append_writes_one_parseable_line() {
        let dir = tempfile::TempDir::new().unwrap();
        let log = FallbackLog::new(dir.path().join("chatlogs.jsonl"));

        log.append(&sample_record()).unwrap();
        log.append(&sample_record()).unwrap();

        let contents = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let parsed: CombinedRecord = serde_json::from_str(line).unwrap();
            assert_eq!(parsed.meta.student_id, "student-1");
            assert_eq!(parsed.transcript, "You: Hello");
        }
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let log = FallbackLog::new("/nonexistent-dir/chatlogs.jsonl");
        assert!(log.append(&sample_record()).is_err());
    }
}
