//! Key Index Module
//!
//! Side index from fingerprint back to the caller's original key, so listings
//! can show human-readable keys while storage stays on one-way digests.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::cache::{fingerprint, Fingerprint};

// == Key Index ==
/// Fingerprint -> original key lookup owned by one service.
///
/// Entries are never removed. A dequeued queue key keeps its mapping, which
/// is harmless because the mapping is a pure function of the key.
#[derive(Debug, Default)]
pub struct KeyIndex {
    keys: RwLock<HashMap<Fingerprint, String>>,
}

impl KeyIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fingerprints `raw_key` and remembers the pair.
    pub fn register(&self, raw_key: &str) -> Fingerprint {
        let fp = fingerprint(raw_key);
        self.keys
            .write()
            .entry(fp.clone())
            .or_insert_with(|| raw_key.to_string());
        fp
    }

    /// Returns the original key for `fp`, if this index has seen it.
    pub fn resolve(&self, fp: &Fingerprint) -> Option<String> {
        self.keys.read().get(fp).cloned()
    }

    /// Number of distinct keys recorded.
    pub fn len(&self) -> usize {
        self.keys.read().len()
    }

    /// Returns true if no key has been recorded.
    pub fn is_empty(&self) -> bool {
        self.keys.read().is_empty()
    }
}
