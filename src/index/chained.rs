//! Separate-chaining table storage.

use super::entry::IndexEntry;
use super::{InsertOutcome, TABLE_CAPACITY, hash_keyword};

/// A fixed-capacity hash table whose slots are independent buckets of
/// owned entries.
///
/// Keyword equality within a bucket is exact, case-sensitive string
/// equality. Deletion removes the entry physically; this discipline has
/// no tombstones.
#[derive(Clone, Debug)]
pub(crate) struct ChainedTable {
    buckets: Vec<Vec<IndexEntry>>,
}

impl ChainedTable {
    pub(crate) fn new() -> Self {
        ChainedTable {
            buckets: vec![Vec::new(); TABLE_CAPACITY],
        }
    }

    /// Append `offset` to the keyword's entry, creating the entry at the
    /// back of its bucket when the keyword is not yet indexed.
    pub(crate) fn insert(&mut self, word: &str, offset: usize) -> InsertOutcome {
        let bucket = &mut self.buckets[hash_keyword(word)];
        if let Some(entry) = bucket.iter_mut().find(|e| e.keyword == word) {
            entry.push_location(offset);
            InsertOutcome::Appended
        } else {
            bucket.push(IndexEntry::new(word, offset));
            InsertOutcome::Inserted
        }
    }

    /// Physically remove the keyword's entry. Returns whether an entry
    /// was found.
    pub(crate) fn erase(&mut self, word: &str) -> bool {
        let bucket = &mut self.buckets[hash_keyword(word)];
        match bucket.iter().position(|e| e.keyword == word) {
            Some(i) => {
                bucket.remove(i);
                true
            }
            None => false,
        }
    }

    /// Get the keyword's recorded locations, if indexed.
    pub(crate) fn lookup(&self, word: &str) -> Option<&[usize]> {
        self.buckets[hash_keyword(word)]
            .iter()
            .find(|e| e.keyword == word)
            .map(|e| e.locations.as_slice())
    }

    /// All entries, bucket order first, insertion order within a bucket.
    pub(crate) fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.buckets.iter().flatten()
    }

    pub(crate) fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_then_append() {
        let mut table = ChainedTable::new();
        assert_eq!(table.insert("the", 0), InsertOutcome::Inserted);
        assert_eq!(table.insert("the", 15), InsertOutcome::Appended);
        assert_eq!(table.lookup("the"), Some(&[0, 15][..]));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_duplicate_offsets_append() {
        let mut table = ChainedTable::new();
        table.insert("cat", 4);
        table.insert("cat", 4);
        assert_eq!(table.lookup("cat"), Some(&[4, 4][..]));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let mut table = ChainedTable::new();
        table.insert("cat", 4);
        assert_eq!(table.lookup("Cat"), None);
        table.insert("Cat", 9);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_erase_is_physical() {
        let mut table = ChainedTable::new();
        table.insert("cat", 4);
        assert!(table.erase("cat"));
        assert_eq!(table.lookup("cat"), None);
        assert_eq!(table.len(), 0);
        assert!(!table.erase("cat"));
    }

    #[test]
    fn test_erase_missing_leaves_table_unchanged() {
        let mut table = ChainedTable::new();
        table.insert("cat", 4);
        assert!(!table.erase("dog"));
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("cat"), Some(&[4][..]));
    }

    #[test]
    fn test_colliding_keys_share_a_bucket() {
        // "aa" and "J" hash to the same slot under the rolling hash
        assert_eq!(hash_keyword("aa"), hash_keyword("J"));

        let mut table = ChainedTable::new();
        table.insert("aa", 1);
        table.insert("J", 2);
        assert_eq!(table.lookup("aa"), Some(&[1][..]));
        assert_eq!(table.lookup("J"), Some(&[2][..]));

        assert!(table.erase("aa"));
        assert_eq!(table.lookup("J"), Some(&[2][..]));
    }
}
