//! The candidate update: decoded attribute changes that have not been applied.

use std::collections::btree_map;
use std::collections::BTreeMap;

use yoga_core::Value;

/// Attribute name to proposed new value.
///
/// Keys are kept in sorted order so every stage visits them the same way,
/// whatever order the request body listed them in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateUpdate {
    changes: BTreeMap<String, Value>,
}

impl CandidateUpdate {
    /// Create an empty candidate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a proposed change.
    pub fn insert(&mut self, attr: impl Into<String>, value: impl Into<Value>) {
        self.changes.insert(attr.into(), value.into());
    }

    /// Get the proposed value for an attribute.
    pub fn get(&self, attr: &str) -> Option<&Value> {
        self.changes.get(attr)
    }

    /// Attribute names, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.changes.keys().map(String::as_str)
    }

    /// Proposed changes in attribute name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.changes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of proposed changes.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Check if nothing is proposed.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

impl FromIterator<(String, Value)> for CandidateUpdate {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            changes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for CandidateUpdate {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.into_iter()
    }
}
