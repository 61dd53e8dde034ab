//! Open-addressing table storage with tombstones.

use std::fmt;

use log::warn;

use super::comparator::KeyComparator;
use super::entry::IndexEntry;
use super::{InsertOutcome, TABLE_CAPACITY, hash_keyword};

/// A fixed-capacity hash table with linear probing.
///
/// Each slot holds at most one entry. Deletion is logical: the entry is
/// tombstoned in place so probe chains running through it stay reachable
/// for other keys. Insertion reuses the first vacant or tombstoned slot
/// it probes; a probe sequence that wraps back to its home slot reports
/// the table as full for that key.
pub(crate) struct ProbedTable {
    slots: Vec<Option<IndexEntry>>,
    comparator: Box<dyn KeyComparator>,
}

enum ProbeStep {
    Append,
    Claim,
    Continue,
}

impl ProbedTable {
    pub(crate) fn new(comparator: Box<dyn KeyComparator>) -> Self {
        let mut slots = Vec::with_capacity(TABLE_CAPACITY);
        slots.resize_with(TABLE_CAPACITY, || None);
        ProbedTable { slots, comparator }
    }

    /// Append `offset` to a live matching entry, or claim the first
    /// vacant or tombstoned slot along the probe sequence.
    pub(crate) fn insert(&mut self, word: &str, offset: usize) -> InsertOutcome {
        let home = hash_keyword(word);
        let mut idx = home;
        loop {
            let step = match &self.slots[idx] {
                Some(entry) if entry.is_live() && self.comparator.keys_equal(&entry.keyword, word) => {
                    ProbeStep::Append
                }
                Some(entry) if entry.tombstoned => ProbeStep::Claim,
                None => ProbeStep::Claim,
                Some(_) => ProbeStep::Continue,
            };

            match step {
                ProbeStep::Append => {
                    if let Some(entry) = self.slots[idx].as_mut() {
                        entry.push_location(offset);
                    }
                    return InsertOutcome::Appended;
                }
                ProbeStep::Claim => {
                    self.slots[idx] = Some(IndexEntry::new(word, offset));
                    return InsertOutcome::Inserted;
                }
                ProbeStep::Continue => {
                    idx = (idx + 1) % TABLE_CAPACITY;
                    if idx == home {
                        warn!("index table full, dropping insert of {word:?}");
                        return InsertOutcome::TableFull;
                    }
                }
            }
        }
    }

    /// Tombstone a live matching entry. The probe stops at the first
    /// vacant slot or after a full wrap.
    pub(crate) fn erase(&mut self, word: &str) -> bool {
        let home = hash_keyword(word);
        let mut idx = home;
        loop {
            let matched = match &self.slots[idx] {
                Some(entry) => {
                    entry.is_live() && self.comparator.keys_equal(&entry.keyword, word)
                }
                None => return false,
            };

            if matched {
                if let Some(entry) = self.slots[idx].as_mut() {
                    entry.tombstoned = true;
                }
                return true;
            }

            idx = (idx + 1) % TABLE_CAPACITY;
            if idx == home {
                return false;
            }
        }
    }

    /// Get the locations of a live matching entry, skipping tombstones.
    pub(crate) fn lookup(&self, word: &str) -> Option<&[usize]> {
        let home = hash_keyword(word);
        let mut idx = home;
        loop {
            match &self.slots[idx] {
                Some(entry) if entry.is_live() && self.comparator.keys_equal(&entry.keyword, word) => {
                    return Some(entry.locations.as_slice());
                }
                Some(_) => {}
                None => return None,
            }

            idx = (idx + 1) % TABLE_CAPACITY;
            if idx == home {
                return None;
            }
        }
    }

    /// Live entries in table order.
    pub(crate) fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.slots
            .iter()
            .filter_map(|slot| slot.as_ref())
            .filter(|entry| entry.is_live())
    }

    pub(crate) fn len(&self) -> usize {
        self.entries().count()
    }
}

impl fmt::Debug for ProbedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbedTable")
            .field("live", &self.len())
            .field("comparator", &self.comparator.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::comparator::{ExactComparator, MatcherComparator};

    fn table() -> ProbedTable {
        ProbedTable::new(Box::new(ExactComparator))
    }

    #[test]
    fn test_insert_then_append() {
        let mut table = table();
        assert_eq!(table.insert("the", 0), InsertOutcome::Inserted);
        assert_eq!(table.insert("the", 15), InsertOutcome::Appended);
        assert_eq!(table.lookup("the"), Some(&[0, 15][..]));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_erase_is_logical() {
        let mut table = table();
        table.insert("cat", 4);
        assert!(table.erase("cat"));
        assert_eq!(table.lookup("cat"), None);
        assert_eq!(table.len(), 0);
        // A second erase finds nothing live
        assert!(!table.erase("cat"));
    }

    #[test]
    fn test_tombstone_keeps_probe_chain_reachable() {
        // "aa" and "J" share a home slot under the rolling hash, so "J"
        // lands one past it and its probe runs through "aa"'s slot
        assert_eq!(hash_keyword("aa"), hash_keyword("J"));

        let mut table = table();
        table.insert("aa", 1);
        table.insert("J", 2);

        assert!(table.erase("aa"));
        assert_eq!(table.lookup("J"), Some(&[2][..]));
        assert_eq!(table.lookup("aa"), None);
    }

    #[test]
    fn test_insert_reuses_tombstoned_slot() {
        let mut table = table();
        table.insert("cat", 4);
        table.erase("cat");

        assert_eq!(table.insert("cat", 9), InsertOutcome::Inserted);
        assert_eq!(table.lookup("cat"), Some(&[9][..]));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_probe_stops_at_vacant_slot() {
        let mut table = table();
        table.insert("cat", 4);
        assert!(!table.erase("dog"));
        assert_eq!(table.lookup("dog"), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_full_table_surfaces_dropped_insert() {
        let mut table = table();
        let words: Vec<String> = (0..TABLE_CAPACITY)
            .map(|i| format!("w{i}"))
            .collect();
        for (i, word) in words.iter().enumerate() {
            assert_eq!(table.insert(word, i), InsertOutcome::Inserted);
        }
        assert_eq!(table.len(), TABLE_CAPACITY);

        assert_eq!(table.insert("overflow", 0), InsertOutcome::TableFull);
        assert_eq!(table.lookup("overflow"), None);

        // Existing keys still append fine
        assert_eq!(table.insert("w0", 7), InsertOutcome::Appended);
    }

    #[test]
    fn test_matcher_comparator_probing() {
        let mut table = ProbedTable::new(Box::new(MatcherComparator));
        table.insert("cat", 4);
        table.insert("cat", 9);
        assert_eq!(table.lookup("cat"), Some(&[4, 9][..]));
        assert_eq!(table.lookup("mat"), None);
    }
}
