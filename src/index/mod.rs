//! The word index.
//!
//! A fixed-capacity hash table mapping each indexed keyword to the
//! ordered list of character offsets where it occurs. Capacity is 101, a
//! prime, fixed at construction; there is no resizing or rehashing. Keys
//! hash with a polynomial rolling hash (`h = h * 31 + byte`) over
//! unsigned wrapping accumulation, reduced mod capacity.
//!
//! Two collision-resolution disciplines are available behind one public
//! type, selected at construction via [`CollisionPolicy`]:
//!
//! - **Chaining** — each slot is an independent bucket of owned entries;
//!   deletion removes entries physically.
//! - **Linear probing** — each slot holds at most one entry; deletion
//!   tombstones the entry so probe chains for other keys stay reachable;
//!   a fully wrapped probe surfaces as [`InsertOutcome::TableFull`].
//!
//! # Examples
//!
//! ```
//! use concord::index::{CollisionPolicy, WordIndex};
//!
//! let mut index = WordIndex::new(CollisionPolicy::Chaining);
//! index.insert("the", 0);
//! index.insert("the", 15);
//! assert_eq!(index.lookup("the"), Some(&[0, 15][..]));
//! ```

use serde::{Deserialize, Serialize};

pub mod builder;
pub mod comparator;
pub mod dump;
pub mod entry;

mod chained;
mod probed;

pub use builder::{IndexBuilder, IndexConfig};
pub use comparator::{ExactComparator, KeyComparator, MatcherComparator};
pub use entry::IndexEntry;

use chained::ChainedTable;
use probed::ProbedTable;

/// Number of slots in every table. Prime, to spread clustered hashes.
pub const TABLE_CAPACITY: usize = 101;

/// Collision-resolution discipline for a [`WordIndex`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionPolicy {
    /// Bucket per slot, physical deletion.
    #[default]
    Chaining,
    /// One entry per slot, linear probing, tombstone deletion.
    LinearProbe,
}

/// Outcome of an insert operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsertOutcome {
    /// A new entry was created for the keyword.
    Inserted,
    /// The offset was appended to an existing live entry.
    Appended,
    /// The probe sequence wrapped without finding a usable slot; the
    /// insert was dropped.
    TableFull,
}

impl InsertOutcome {
    /// Whether the insert was dropped because the table was full.
    pub fn is_table_full(&self) -> bool {
        matches!(self, InsertOutcome::TableFull)
    }
}

/// Hash a keyword to its home slot.
pub fn hash_keyword(word: &str) -> usize {
    let mut h: u32 = 0;
    for &b in word.as_bytes() {
        h = h.wrapping_mul(31).wrapping_add(u32::from(b));
    }
    h as usize % TABLE_CAPACITY
}

#[derive(Debug)]
enum Storage {
    Chained(ChainedTable),
    Probed(ProbedTable),
}

/// A fixed-capacity keyword-to-locations hash table.
///
/// The table owns every entry it creates. At most one live entry exists
/// per distinct keyword.
#[derive(Debug)]
pub struct WordIndex {
    storage: Storage,
}

impl WordIndex {
    /// Create an empty index with the given collision policy.
    ///
    /// The probing table compares keys with direct string equality; use
    /// [`WordIndex::probing_with_comparator`] to swap the comparator.
    pub fn new(policy: CollisionPolicy) -> Self {
        let storage = match policy {
            CollisionPolicy::Chaining => Storage::Chained(ChainedTable::new()),
            CollisionPolicy::LinearProbe => {
                Storage::Probed(ProbedTable::new(Box::new(ExactComparator)))
            }
        };
        WordIndex { storage }
    }

    /// Create an empty linear-probing index with a custom key comparator.
    pub fn probing_with_comparator(comparator: Box<dyn KeyComparator>) -> Self {
        WordIndex {
            storage: Storage::Probed(ProbedTable::new(comparator)),
        }
    }

    /// The collision policy this index was built with.
    pub fn policy(&self) -> CollisionPolicy {
        match self.storage {
            Storage::Chained(_) => CollisionPolicy::Chaining,
            Storage::Probed(_) => CollisionPolicy::LinearProbe,
        }
    }

    /// Table capacity in slots.
    pub fn capacity(&self) -> usize {
        TABLE_CAPACITY
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        match &self.storage {
            Storage::Chained(table) => table.len(),
            Storage::Probed(table) => table.len(),
        }
    }

    /// Check whether the index has no live entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Record an occurrence of `word` at `offset`.
    ///
    /// Appends to the keyword's live entry when one exists, otherwise
    /// creates one. Under [`CollisionPolicy::Chaining`] this always
    /// succeeds; under [`CollisionPolicy::LinearProbe`] a fully wrapped
    /// probe returns [`InsertOutcome::TableFull`] and drops the insert.
    pub fn insert(&mut self, word: &str, offset: usize) -> InsertOutcome {
        match &mut self.storage {
            Storage::Chained(table) => table.insert(word, offset),
            Storage::Probed(table) => table.insert(word, offset),
        }
    }

    /// Remove `word` from the index. Returns whether a live entry was
    /// found.
    ///
    /// Chaining removes the entry physically; probing tombstones it in
    /// place.
    pub fn erase(&mut self, word: &str) -> bool {
        match &mut self.storage {
            Storage::Chained(table) => table.erase(word),
            Storage::Probed(table) => table.erase(word),
        }
    }

    /// Get the recorded locations of a live entry for `word`.
    pub fn lookup(&self, word: &str) -> Option<&[usize]> {
        match &self.storage {
            Storage::Chained(table) => table.lookup(word),
            Storage::Probed(table) => table.lookup(word),
        }
    }

    /// Live `(keyword, locations)` pairs in table order: bucket order
    /// then insertion order for chaining, slot order for probing.
    pub fn entries(&self) -> Vec<(&str, &[usize])> {
        match &self.storage {
            Storage::Chained(table) => table
                .entries()
                .map(|e| (e.keyword.as_str(), e.locations.as_slice()))
                .collect(),
            Storage::Probed(table) => table
                .entries()
                .map(|e| (e.keyword.as_str(), e.locations.as_slice()))
                .collect(),
        }
    }
}
