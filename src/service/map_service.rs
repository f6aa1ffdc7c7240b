//! Map Service Module
//!
//! Fingerprints caller keys, delegates to the map store and shapes listings.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

use crate::cache::{fingerprint, ordering, MapStore};
use crate::error::{CacheError, Result};
use crate::service::{listing_limit, KeyIndex, SortSelector};

// == Value Metadata ==
/// Structural facts about a stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueMetadata {
    /// Length in bytes
    pub length: usize,
    /// True for the empty string
    pub is_empty: bool,
}

// == Map Service ==
/// Keyed cache operations over an injected [`MapStore`].
#[derive(Debug)]
pub struct MapService {
    store: Arc<MapStore>,
    index: KeyIndex,
}

impl MapService {
    // == Constructor ==
    /// Creates a service over `store`.
    ///
    /// Entries already in the store that were not written through this
    /// service cannot be resolved back to a key and are left out of listings.
    pub fn new(store: Arc<MapStore>) -> Self {
        Self {
            store,
            index: KeyIndex::new(),
        }
    }

    // == Set ==
    /// Stores `value` under `key`, overwriting any previous value.
    ///
    /// Returns the caller's key, not the fingerprint.
    pub fn set(&self, key: &str, value: String) -> String {
        let fp = self.index.register(key);
        debug!(key, fingerprint = %fp, "map set");
        self.store.set(fp, value);
        key.to_string()
    }

    // == Get ==
    /// Returns the value stored under `key`, or `None` if absent.
    pub fn get(&self, key: &str) -> Option<String> {
        self.store.get(&fingerprint(key))
    }

    // == All ==
    /// Returns every resolvable entry in insertion order.
    pub fn all(&self) -> IndexMap<String, String> {
        self.collect_entries(usize::MAX)
    }

    // == Get Entry List ==
    /// Returns at most `n` entries in insertion order.
    ///
    /// `n == 0` yields an empty map; a negative `n` is rejected.
    pub fn get_entry_list(&self, n: i64) -> Result<IndexMap<String, String>> {
        let limit = listing_limit(n)?;
        Ok(self.collect_entries(limit))
    }

    // == Get Sorted Entry List ==
    /// Takes the first `n` entries and orders them by key or by value.
    pub fn get_sorted_entry_list(
        &self,
        selector: SortSelector,
        n: i64,
    ) -> Result<IndexMap<String, String>> {
        let entries = self.get_entry_list(n)?;
        Ok(match selector {
            SortSelector::ByKey => ordering::sort_map_by_key(&entries),
            SortSelector::ByValue => ordering::sort_map_by_value(&entries),
        })
    }

    // == Update Cache Entry ==
    /// Overwrites the value under `key`. A missing key is simply created.
    pub fn update_cache_entry(&self, key: &str, value: String) -> String {
        let fp = self.index.register(key);
        debug!(key, fingerprint = %fp, "map update");
        self.store.update_value(fp, value);
        key.to_string()
    }

    // == Get List Of Values ==
    /// Looks up each key in order and returns the values found.
    ///
    /// Keys with no stored value are skipped. An empty key makes the whole
    /// list malformed.
    pub fn get_list_of_values(&self, keys: &[String]) -> Result<Vec<String>> {
        if let Some(pos) = keys.iter().position(|k| k.is_empty()) {
            warn!(position = pos, "rejecting key list with empty key");
            return Err(CacheError::InvalidArgument(format!(
                "key at position {} is empty",
                pos
            )));
        }

        let values = keys
            .iter()
            .filter_map(|key| {
                let value = self.get(key);
                if value.is_none() {
                    debug!(key = %key, "no value for key, skipping");
                }
                value
            })
            .collect();

        Ok(values)
    }

    // == Metadata ==
    /// Returns structural metadata for the value under `key`.
    pub fn metadata(&self, key: &str) -> Option<ValueMetadata> {
        self.get(key).map(|value| ValueMetadata {
            length: value.len(),
            is_empty: value.is_empty(),
        })
    }

    // == Length ==
    /// Number of entries in the underlying store.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if the underlying store is empty.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn collect_entries(&self, limit: usize) -> IndexMap<String, String> {
        let mut entries = IndexMap::new();
        if limit == 0 {
            return entries;
        }

        for (fp, value) in self.store.all() {
            match self.index.resolve(&fp) {
                Some(key) => {
                    entries.insert(key, value);
                }
                None => {
                    warn!(fingerprint = %fp, "cannot resolve fingerprint to a key, skipping entry");
                    continue;
                }
            }
            if entries.len() >= limit {
                break;
            }
        }

        entries
    }
}
