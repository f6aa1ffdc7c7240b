//! Queue Store Module
//!
//! Concurrent insertion-ordered storage with FIFO removal and update-by-key.

use std::collections::VecDeque;
use std::time::Duration;

use parking_lot::RwLock;

use crate::cache::{Fingerprint, QueueEntry};

// == Queue Store ==
/// Ordered store guarded by a single lock.
///
/// Fingerprints are not unique across entries. Lookups by key always act on
/// the first match in current order.
#[derive(Debug, Default)]
pub struct QueueStore {
    entries: RwLock<VecDeque<QueueEntry>>,
}

impl QueueStore {
    // == Constructor ==
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    // == Set ==
    /// Appends an entry at the tail. The TTL is recorded, not enforced.
    pub fn set(&self, fingerprint: Fingerprint, value: String, ttl: Option<Duration>) {
        let entry = QueueEntry::new(fingerprint, value, ttl);
        self.entries.write().push_back(entry);
    }

    // == Dequeue ==
    /// Removes and returns the head entry, or `None` when the queue is empty.
    pub fn dequeue(&self) -> Option<QueueEntry> {
        self.entries.write().pop_front()
    }

    // == Peek ==
    /// Returns a copy of the head entry without removing it.
    pub fn peek(&self) -> Option<QueueEntry> {
        self.entries.read().front().cloned()
    }

    // == Update ==
    /// Rewrites the value of the first entry whose fingerprint matches.
    ///
    /// Position and TTL are unchanged. Returns `false` when nothing matched,
    /// in which case the queue is untouched.
    pub fn update(&self, fingerprint: &Fingerprint, new_value: String) -> bool {
        let mut entries = self.entries.write();
        match entries.iter_mut().find(|e| &e.fingerprint == fingerprint) {
            Some(entry) => {
                entry.value = new_value;
                true
            }
            None => false,
        }
    }

    // == All ==
    /// Returns a snapshot of every entry, head first.
    pub fn all(&self) -> Vec<QueueEntry> {
        self.entries.read().iter().cloned().collect()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    // == Is Empty ==
    /// Returns true if the queue holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
