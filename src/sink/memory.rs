//! In-memory capture, for tests and for callers that post-process lines.

use super::Sink;
use std::sync::{Arc, Mutex, PoisonError};

/// Records every accepted line. Clones share the same buffer, so a test can keep
/// one handle while the logger owns another.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines accepted so far, trailing newlines included.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of `accept` calls so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Everything accepted so far, concatenated.
    #[must_use]
    pub fn contents(&self) -> String {
        self.lines().concat()
    }
}

impl Sink for MemorySink {
    fn accept(&self, line: &str) -> Result<(), crate::Error> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
        Ok(())
    }
}
