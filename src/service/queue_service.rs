//! Queue Service Module
//!
//! Fingerprints caller keys, delegates to the queue store and shapes listings.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};

use crate::cache::{fingerprint, ordering, ordering::SortableEntry, QueueEntry, QueueStore};
use crate::error::Result;
use crate::service::{listing_limit, KeyIndex, SortSelector};

// == Queue Item ==
/// A queue entry as presented to callers, with the original key restored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueItem {
    pub key: String,
    pub value: String,
    /// Recorded TTL in seconds. Not enforced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl_secs: Option<u64>,
    /// When the TTL would elapse (Unix milliseconds). Not enforced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<u64>,
}

impl QueueItem {
    fn from_entry(key: String, entry: QueueEntry) -> Self {
        Self {
            key,
            ttl_secs: entry.ttl_secs(),
            expires_at: entry.expires_at(),
            value: entry.value,
        }
    }
}

impl SortableEntry for QueueItem {
    fn sort_key(&self) -> &str {
        &self.key
    }

    fn sort_value(&self) -> &str {
        &self.value
    }
}

// == Queue Service ==
/// FIFO cache operations over an injected [`QueueStore`].
#[derive(Debug)]
pub struct QueueService {
    store: Arc<QueueStore>,
    index: KeyIndex,
}

impl QueueService {
    // == Constructor ==
    /// Creates a service over `store`.
    pub fn new(store: Arc<QueueStore>) -> Self {
        Self {
            store,
            index: KeyIndex::new(),
        }
    }

    // == Set ==
    /// Appends `key`/`value` at the tail. Returns the caller's key.
    pub fn set(&self, key: &str, value: String) -> String {
        self.enqueue(key, value, None)
    }

    // == Set With TTL ==
    /// Appends `key`/`value` with a recorded time-to-live.
    ///
    /// The entry is not removed when the TTL elapses; only a dequeue removes it.
    pub fn set_with_ttl(&self, key: &str, value: String, ttl: Duration) -> String {
        self.enqueue(key, value, Some(ttl))
    }

    // == Get ==
    /// Removes and returns the head of the queue, or `None` when empty.
    pub fn get(&self) -> Option<QueueItem> {
        self.store.dequeue().map(|entry| self.present(entry))
    }

    // == Peek ==
    /// Returns the head of the queue without removing it.
    pub fn peek(&self) -> Option<QueueItem> {
        self.store.peek().map(|entry| self.present(entry))
    }

    // == All ==
    /// Returns every resolvable entry, head first.
    pub fn all(&self) -> Vec<QueueItem> {
        self.collect_items(usize::MAX)
    }

    // == Get Entry List ==
    /// Returns at most `n` entries from the head.
    ///
    /// `n == 0` yields an empty list; a negative `n` is rejected.
    pub fn get_entry_list(&self, n: i64) -> Result<Vec<QueueItem>> {
        let limit = listing_limit(n)?;
        Ok(self.collect_items(limit))
    }

    // == Get Sorted Entries ==
    /// Takes the first `n` entries and orders them by key or by value.
    pub fn get_sorted_entries(&self, selector: SortSelector, n: i64) -> Result<Vec<QueueItem>> {
        let items = self.get_entry_list(n)?;
        Ok(match selector {
            SortSelector::ByKey => ordering::sort_entries_by_key(&items),
            SortSelector::ByValue => ordering::sort_entries_by_value(&items),
        })
    }

    // == Update Value ==
    /// Rewrites the value of the first entry queued under `key`.
    ///
    /// Returns the caller's key whether or not an entry matched. A key that
    /// matched nothing is not recorded in the index.
    pub fn update_value(&self, key: &str, new_value: String) -> String {
        if !self.store.update(&fingerprint(key), new_value) {
            debug!(key, "queue update matched no entry");
        }
        key.to_string()
    }

    // == Length ==
    /// Number of entries currently queued.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn enqueue(&self, key: &str, value: String, ttl: Option<Duration>) -> String {
        let fp = self.index.register(key);
        debug!(key, fingerprint = %fp, ttl = ?ttl, "queue set");
        self.store.set(fp, value, ttl);
        key.to_string()
    }

    /// The entry is already out of the store, so an unresolvable key falls
    /// back to the fingerprint rather than dropping the value.
    fn present(&self, entry: QueueEntry) -> QueueItem {
        let key = match self.index.resolve(&entry.fingerprint) {
            Some(key) => key,
            None => {
                warn!(fingerprint = %entry.fingerprint, "cannot resolve fingerprint to a key");
                entry.fingerprint.to_string()
            }
        };
        QueueItem::from_entry(key, entry)
    }

    fn collect_items(&self, limit: usize) -> Vec<QueueItem> {
        if limit == 0 {
            return Vec::new();
        }

        self.store
            .all()
            .into_iter()
            .filter_map(|entry| match self.index.resolve(&entry.fingerprint) {
                Some(key) => Some(QueueItem::from_entry(key, entry)),
                None => {
                    warn!(fingerprint = %entry.fingerprint, "cannot resolve fingerprint to a key, skipping entry");
                    None
                }
            })
            .take(limit)
            .collect()
    }
}
