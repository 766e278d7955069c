//! Operator-visible diagnostics.
//!
//! [`BookList`](crate::BookList) never prints on its own. Rejected insertions
//! and out-of-range accesses are handed to a [`Reporter`] as single lines of
//! text, and the embedding program decides where those lines go.

use std::sync::{Arc, Mutex, PoisonError};

/// Receives diagnostic lines from a [`BookList`](crate::BookList).
pub trait Reporter: Send + Sync {
    /// Report one diagnostic line.
    fn report(&self, line: &str);
}

/// Reports each line as a `tracing` warning.
///
/// This is the default reporter for [`BookList::new`](crate::BookList::new).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, line: &str) {
        tracing::warn!(target: "bookshelf", "{}", line);
    }
}

/// Keeps every reported line in memory.
///
/// Clones share the same buffer, so a test can hand one clone to a list and
/// inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the lines reported so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}

impl<R: Reporter + ?Sized> Reporter for Arc<R> {
    fn report(&self, line: &str) {
        (**self).report(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_reporter_clones_share_lines() {
        let reporter = MemoryReporter::new();
        let handle = reporter.clone();

        reporter.report("first");
        reporter.report("second");

        assert_eq!(handle.lines(), vec!["first", "second"]);
    }
}
