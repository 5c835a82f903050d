//! Ordered label-to-value lookup with pluggable match rules.
//!
//! Resolution walks the entries in declaration order and returns the first
//! match. Overlapping patterns are legal; whichever is declared first wins,
//! and the table performs no conflict detection. A failed lookup is a normal
//! outcome, not an error.

use serde::{Deserialize, Serialize};

/// How an entry's pattern is compared against a label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Literal `str::starts_with`. Case-sensitive, no trimming.
    #[default]
    Prefix,
    /// Whole-label equality.
    Exact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Entry {
    pattern: String,
    mode: MatchMode,
    value: String,
}

impl Entry {
    fn matches(&self, label: &str) -> bool {
        match self.mode {
            MatchMode::Prefix => label.starts_with(&self.pattern),
            MatchMode::Exact => label == self.pattern,
        }
    }
}

/// Static, ordered lookup table. Built once at startup, read-only afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchTable {
    entries: Vec<Entry>,
}

impl MatchTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table of prefix entries from `(pattern, value)` pairs,
    /// preserving iteration order.
    pub fn from_prefix_entries<I, P, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, V)>,
        P: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::new();
        for (pattern, value) in pairs {
            table.push(pattern, value);
        }
        table
    }

    /// Append a prefix-matched entry.
    pub fn push(&mut self, pattern: impl Into<String>, value: impl Into<String>) {
        self.push_with_mode(pattern, MatchMode::Prefix, value);
    }

    /// Append an entry with an explicit match mode.
    pub fn push_with_mode(
        &mut self,
        pattern: impl Into<String>,
        mode: MatchMode,
        value: impl Into<String>,
    ) {
        self.entries.push(Entry {
            pattern: pattern.into(),
            mode,
            value: value.into(),
        });
    }

    /// Resolve a label to the value of the first matching entry.
    pub fn resolve(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.matches(label))
            .map(|entry| entry.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
