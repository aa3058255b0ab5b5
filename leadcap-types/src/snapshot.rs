//! Field snapshots — the per-session record of acknowledged field values.
//!
//! A snapshot maps field labels to the last value the backend has
//! acknowledged. It exists for change detection: a commit for a field whose
//! value equals the snapshot entry is a no-op. Insertion order is irrelevant.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from field label to last-acknowledged raw value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSnapshot(HashMap<String, String>);

impl FieldSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded value for a label.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.0.get(label).map(String::as_str)
    }

    /// Records a value under a label, replacing any previous entry.
    pub fn set(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.0.insert(label.into(), value.into());
    }

    /// Returns true if `value` equals the value already recorded for
    /// `label`. A label with no entry is never "unchanged".
    pub fn is_unchanged(&self, label: &str, value: &str) -> bool {
        self.get(label) == Some(value)
    }

    /// Returns a copy of this snapshot with `{label: value}` merged in.
    /// The new value wins over any existing entry for the same label.
    #[must_use]
    pub fn merged(&self, label: impl Into<String>, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.set(label, value);
        next
    }

    /// Number of recorded fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no fields have been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over (label, value) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
