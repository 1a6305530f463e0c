//! Record sources (the Loader boundary).
//!
//! This module provides input sources for the member payload:
//! - HTTP(S) URL fetch with a blocking client
//! - Local JSON file
//! - `PendingLoad`, which runs one fetch on a background thread so the UI
//!   can render an empty table until the result arrives

use crate::model::{LoadError, Record};
use crate::parser;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;
use tracing::{info, warn};

pub mod file;
pub mod http;

pub use file::FileSource;
pub use http::HttpSource;

/// Unified record source.
///
/// Sum type enforces exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSource {
    /// Remote JSON list fetched over HTTP(S)
    Http(HttpSource),
    /// Local JSON file
    File(FileSource),
}

impl RecordSource {
    /// Pick a source from a user-supplied location.
    ///
    /// `http://` and `https://` locations are fetched over the network,
    /// anything else is treated as a file path.
    pub fn detect(location: &str, timeout: Duration) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            RecordSource::Http(HttpSource::new(location, timeout))
        } else {
            RecordSource::File(FileSource::new(location))
        }
    }

    /// Human readable location, for logs and the title bar.
    pub fn describe(&self) -> String {
        match self {
            RecordSource::Http(h) => h.url().to_string(),
            RecordSource::File(f) => f.path().display().to_string(),
        }
    }

    /// Fetch and parse the payload.
    ///
    /// Skipped elements are logged at warn level and dropped.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` when the payload cannot be fetched or is not a
    /// JSON array.
    pub fn load(&self) -> Result<Vec<Record>, LoadError> {
        let bytes = match self {
            RecordSource::Http(h) => h.fetch()?,
            RecordSource::File(f) => f.fetch()?,
        };

        let parsed = parser::parse_payload(&bytes)?;
        for err in &parsed.errors {
            warn!(error = %err, "Skipping record");
        }
        info!(
            source = %self.describe(),
            loaded = parsed.records.len(),
            skipped = parsed.errors.len(),
            "Records loaded"
        );

        Ok(parsed.records)
    }
}

/// A load running on a background thread.
///
/// Polled from the event loop; yields its result exactly once.
#[derive(Debug)]
pub struct PendingLoad {
    rx: Option<Receiver<Result<Vec<Record>, LoadError>>>,
}

impl PendingLoad {
    /// Start loading `source` on a new thread.
    pub fn spawn(source: RecordSource) -> Self {
        let (tx, rx) = mpsc::channel();
        let spawned = thread::Builder::new()
            .name("roster-loader".to_string())
            .spawn(move || {
                // Receiver may already be gone if the UI quit early
                let _ = tx.send(source.load());
            });

        if let Err(e) = spawned {
            // No thread means no sender; the next poll reports Disconnected
            warn!(error = %e, "Failed to spawn loader thread");
        }

        Self { rx: Some(rx) }
    }

    /// A load whose result is already known. Used by tests and by callers
    /// that fetched synchronously.
    pub fn ready(result: Result<Vec<Record>, LoadError>) -> Self {
        let (tx, rx) = mpsc::channel();
        let _ = tx.send(result);
        Self { rx: Some(rx) }
    }

    /// Non-blocking poll.
    ///
    /// Returns `None` while the load is running and after the result has
    /// been taken. Returns `Some(result)` exactly once.
    pub fn poll(&mut self) -> Option<Result<Vec<Record>, LoadError>> {
        let rx = self.rx.as_ref()?;
        match rx.try_recv() {
            Ok(result) => {
                self.rx = None;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.rx = None;
                Some(Err(LoadError::Disconnected))
            }
        }
    }

    /// Whether a result is still outstanding.
    pub fn is_pending(&self) -> bool {
        self.rx.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Instant;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[test]
    fn detect_picks_http_for_urls() {
        let source = RecordSource::detect("https://example.com/members.json", TIMEOUT);
        assert!(matches!(source, RecordSource::Http(_)));

        let source = RecordSource::detect("HTTP://EXAMPLE.COM/m.json", TIMEOUT);
        assert!(matches!(source, RecordSource::Http(_)));
    }

    #[test]
    fn detect_picks_file_for_paths() {
        let source = RecordSource::detect("./members.json", TIMEOUT);
        assert_eq!(source, RecordSource::File(FileSource::new("./members.json")));
    }

    #[test]
    fn load_parses_file_payload() {
        let test_file = std::env::temp_dir().join("roster_source_load.json");
        fs::write(
            &test_file,
            r#"[{"id":"1","name":"Ann"},{"id":"2","name":"Bob"},{"name":"no id"}]"#,
        )
        .unwrap();

        let source = RecordSource::File(FileSource::new(&test_file));
        let result = source.load();

        let _ = fs::remove_file(&test_file);

        let records = result.unwrap();
        assert_eq!(records.len(), 2, "Element without id should be skipped");
        assert_eq!(records[1].name(), "Bob");
    }

    #[test]
    fn load_propagates_not_an_array() {
        let test_file = std::env::temp_dir().join("roster_source_not_array.json");
        fs::write(&test_file, r#"{"id":"1"}"#).unwrap();

        let result = RecordSource::File(FileSource::new(&test_file)).load();

        let _ = fs::remove_file(&test_file);

        assert!(matches!(result, Err(LoadError::NotAnArray { .. })));
    }

    #[test]
    fn ready_load_yields_result_once() {
        let mut pending = PendingLoad::ready(Ok(vec![]));
        assert!(pending.is_pending());

        let first = pending.poll();
        assert!(matches!(first, Some(Ok(ref v)) if v.is_empty()));
        assert!(!pending.is_pending());
        assert!(pending.poll().is_none(), "Result is delivered only once");
    }

    #[test]
    fn spawned_load_eventually_reports_failure() {
        let missing = std::env::temp_dir().join("roster_source_missing_98765.json");
        let mut pending = PendingLoad::spawn(RecordSource::File(FileSource::new(&missing)));

        let deadline = Instant::now() + Duration::from_secs(5);
        let result = loop {
            if let Some(result) = pending.poll() {
                break result;
            }
            assert!(Instant::now() < deadline, "Loader thread did not finish");
            thread::sleep(Duration::from_millis(10));
        };

        assert!(matches!(result, Err(LoadError::FileNotFound { .. })));
    }
}
