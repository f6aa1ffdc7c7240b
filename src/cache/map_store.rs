//! Map Store Module
//!
//! Concurrent fingerprint -> value storage, last writer wins.

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::cache::Fingerprint;

// == Map Store ==
/// Keyed store guarded by a single lock.
///
/// Entries keep the position of their first insertion; overwriting a value
/// does not move it. Nothing is ever removed.
#[derive(Debug, Default)]
pub struct MapStore {
    entries: RwLock<IndexMap<Fingerprint, String>>,
}

impl MapStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Set ==
    /// Inserts or overwrites the value stored under `fingerprint`.
    pub fn set(&self, fingerprint: Fingerprint, value: String) {
        self.entries.write().insert(fingerprint, value);
    }

    // == Get ==
    /// Returns the value stored under `fingerprint`, or `None` if absent.
    ///
    /// An empty string is a present value, distinct from `None`.
    pub fn get(&self, fingerprint: &Fingerprint) -> Option<String> {
        self.entries.read().get(fingerprint).cloned()
    }

    // == Update Value ==
    /// Same effect as [`MapStore::set`]. Does not require the key to exist.
    pub fn update_value(&self, fingerprint: Fingerprint, new_value: String) -> Fingerprint {
        self.entries
            .write()
            .insert(fingerprint.clone(), new_value);
        fingerprint
    }

    // == All ==
    /// Returns a snapshot of every entry in insertion order.
    ///
    /// The copy is taken under the lock; later writes are not visible in it.
    pub fn all(&self) -> IndexMap<Fingerprint, String> {
        self.entries.read().clone()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
