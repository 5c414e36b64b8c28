//! Calculation tape.
//!
//! A bounded record of completed calculations, shared by every front end.
//! Entries only ever live in memory; the JSON helpers exist for handing the
//! tape across the web interop boundary.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A single completed calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TapeEntry {
    /// The expression as the user entered it, e.g. `"6 + 4"`.
    pub expression: String,
    /// The display text of the result, e.g. `"10"`.
    pub result: String,
    /// When the calculation completed (Unix epoch millis).
    pub timestamp: u64,
}

impl TapeEntry {
    /// Creates an entry stamped with the current time.
    #[must_use]
    pub fn new(expression: String, result: String) -> Self {
        Self {
            expression,
            result,
            timestamp: current_timestamp(),
        }
    }

    /// Creates an entry with a fixed timestamp (for testing).
    #[must_use]
    pub fn with_timestamp(expression: String, result: String, timestamp: u64) -> Self {
        Self {
            expression,
            result,
            timestamp,
        }
    }

    /// One-line rendering, e.g. `"6 + 4 = 10"`.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression, self.result)
    }
}

fn current_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Bounded queue of completed calculations.
#[derive(Debug, Clone)]
pub struct Tape {
    entries: VecDeque<TapeEntry>,
    max_entries: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// Default maximum tape length.
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates an empty tape with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: Self::DEFAULT_MAX_ENTRIES,
        }
    }

    /// Creates an empty tape holding at most `max_entries` entries.
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Appends an entry, evicting the oldest when full.
    pub fn push(&mut self, entry: TapeEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Records a completed calculation.
    pub fn record(&mut self, expression: &str, result: &str) {
        self.push(TapeEntry::new(expression.to_string(), result.to_string()));
    }

    /// Number of entries on the tape.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The configured maximum length.
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter()
    }

    /// Iterates newest first.
    pub fn iter_rev(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter().rev()
    }

    /// The most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&TapeEntry> {
        self.entries.back()
    }

    /// The entry at `index`, oldest first.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TapeEntry> {
        self.entries.get(index)
    }

    /// The newest `n` entries, newest first.
    #[must_use]
    pub fn last_n(&self, n: usize) -> Vec<&TapeEntry> {
        self.entries.iter().rev().take(n).collect()
    }

    /// Serializes the tape to JSON for the web boundary.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries.iter().collect::<Vec<_>>())
    }

    /// Rebuilds a tape from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<TapeEntry> = serde_json::from_str(json)?;
        let mut tape = Self::new();
        for entry in entries {
            tape.push(entry);
        }
        Ok(tape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_display() {
        let entry = TapeEntry::with_timestamp("6 + 4".into(), "10".into(), 1000);
        assert_eq!(entry.display(), "6 + 4 = 10");
    }

    #[test]
    fn test_entry_new_stamps_time() {
        let entry = TapeEntry::new("1 + 1".into(), "2".into());
        assert!(entry.timestamp > 0);
    }

    #[test]
    fn test_record_and_last() {
        let mut tape = Tape::new();
        assert!(tape.is_empty());
        tape.record("2 * 3", "6");
        assert_eq!(tape.len(), 1);
        assert_eq!(tape.last().unwrap().expression, "2 * 3");
        assert_eq!(tape.last().unwrap().result, "6");
    }

    #[test]
    fn test_bounded_eviction() {
        let mut tape = Tape::with_capacity(2);
        tape.record("a", "1");
        tape.record("b", "2");
        tape.record("c", "3");
        assert_eq!(tape.len(), 2);
        assert_eq!(tape.get(0).unwrap().expression, "b");
        assert_eq!(tape.last().unwrap().expression, "c");
    }

    #[test]
    fn test_iteration_orders() {
        let mut tape = Tape::new();
        tape.record("a", "1");
        tape.record("b", "2");
        let oldest_first: Vec<_> = tape.iter().map(|e| e.expression.as_str()).collect();
        assert_eq!(oldest_first, vec!["a", "b"]);
        let newest_first: Vec<_> = tape.iter_rev().map(|e| e.expression.as_str()).collect();
        assert_eq!(newest_first, vec!["b", "a"]);
    }

    #[test]
    fn test_last_n() {
        let mut tape = Tape::new();
        for i in 0..5 {
            tape.record(&format!("expr{i}"), &i.to_string());
        }
        let last_two = tape.last_n(2);
        assert_eq!(last_two.len(), 2);
        assert_eq!(last_two[0].expression, "expr4");
        assert_eq!(last_two[1].expression, "expr3");
    }

    #[test]
    fn test_clear() {
        let mut tape = Tape::new();
        tape.record("x", "1");
        tape.clear();
        assert!(tape.is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let mut tape = Tape::new();
        tape.push(TapeEntry::with_timestamp("1 + 1".into(), "2".into(), 100));
        tape.push(TapeEntry::with_timestamp("7 / 2".into(), "3.5".into(), 200));
        let json = tape.to_json().unwrap();
        let restored = Tape::from_json(&json).unwrap();
        assert_eq!(restored.len(), 2);
        for (a, b) in tape.iter().zip(restored.iter()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(Tape::from_json("not json").is_err());
    }
}
