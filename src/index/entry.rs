//! Index entry type.

use serde::{Deserialize, Serialize};

/// A single keyword's record in the word index.
///
/// `locations` holds the character offset of every indexed occurrence in
/// append order: build-time occurrences arrive in document order, runtime
/// inserts append wherever the word landed. The list is never sorted or
/// deduplicated.
///
/// `tombstoned` is only ever set by the linear-probing table, which
/// deletes logically; a tombstoned entry keeps its keyword and locations
/// but is excluded from every positive match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// The indexed keyword.
    pub keyword: String,

    /// Offsets of each indexed occurrence, in insertion order.
    pub locations: Vec<usize>,

    /// Whether this entry has been logically deleted.
    pub tombstoned: bool,
}

impl IndexEntry {
    /// Create a live entry recording its first occurrence.
    pub fn new<S: Into<String>>(keyword: S, offset: usize) -> Self {
        IndexEntry {
            keyword: keyword.into(),
            locations: vec![offset],
            tombstoned: false,
        }
    }

    /// Record another occurrence of this keyword.
    pub fn push_location(&mut self, offset: usize) {
        self.locations.push(offset);
    }

    /// Check whether the entry is live (not tombstoned).
    pub fn is_live(&self) -> bool {
        !self.tombstoned
    }
}
