//! Append-only narration log.
//!
//! Every command appends human-readable lines here; it is both the
//! audience-facing narration and the only channel through which rule
//! violations are reported. Entries are never removed. Readers follow the
//! log with a monotonic cursor:
//!
//! - `pending()` / `drain()` track a single built-in reader (the host that
//!   renders `getState()` responses).
//! - `since(cursor)` lets any number of other readers follow independently.
//!
//! Backed by `im::Vector` so snapshots clone in O(1).

use im::Vector;

/// Append-only log of narration lines with a drain cursor.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    entries: Vector<String>,
    drained: usize,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push_back(line.into());
    }

    /// Total lines ever appended.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the built-in drain cursor.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.drained
    }

    /// Lines appended since the last drain, without advancing.
    #[must_use]
    pub fn pending(&self) -> Vec<String> {
        self.since(self.drained).0
    }

    /// Return the lines appended since the last drain and advance past them.
    pub fn drain(&mut self) -> Vec<String> {
        let (lines, next) = self.since(self.drained);
        self.drained = next;
        lines
    }

    /// Lines at or after `cursor`, plus the cursor to pass next time.
    ///
    /// A cursor beyond the end yields nothing.
    #[must_use]
    pub fn since(&self, cursor: usize) -> (Vec<String>, usize) {
        let start = cursor.min(self.entries.len());
        let lines = self.entries.skip(start).into_iter().collect();
        (lines, self.entries.len())
    }

    /// Every line ever appended.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_does_not_advance() {
        let mut log = EventLog::new();
        log.push("a");
        log.push("b");

        assert_eq!(log.pending(), vec!["a", "b"]);
        assert_eq!(log.pending(), vec!["a", "b"]);
        assert_eq!(log.cursor(), 0);
    }

    #[test]
    fn test_drain_advances() {
        let mut log = EventLog::new();
        log.push("a");
        assert_eq!(log.drain(), vec!["a"]);
        assert!(log.drain().is_empty());

        log.push("b");
        assert_eq!(log.pending(), vec!["b"]);
        assert_eq!(log.drain(), vec!["b"]);

        // Drained lines remain in the history
        assert_eq!(log.len(), 2);
        assert_eq!(log.iter().cloned().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_independent_readers() {
        let mut log = EventLog::new();
        log.push("one");
        log.push("two");

        let (first, cursor) = log.since(0);
        assert_eq!(first, vec!["one", "two"]);
        assert_eq!(cursor, 2);

        log.push("three");
        let (next, cursor) = log.since(cursor);
        assert_eq!(next, vec!["three"]);
        assert_eq!(cursor, 3);

        // The built-in cursor is unaffected
        assert_eq!(log.pending().len(), 3);

        let (beyond, cursor) = log.since(99);
        assert!(beyond.is_empty());
        assert_eq!(cursor, 3);
    }
}
