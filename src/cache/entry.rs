//! Queue Entry Module
//!
//! Defines the structure for individual queue entries with an optional TTL.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::cache::Fingerprint;

// == Queue Entry ==
/// A single entry in the queue store.
///
/// The TTL is recorded only. Nothing removes an entry when it elapses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueEntry {
    /// Storage key
    pub fingerprint: Fingerprint,
    /// The stored value
    pub value: String,
    /// Time-to-live supplied on enqueue, if any
    pub ttl: Option<Duration>,
    /// Enqueue timestamp (Unix milliseconds)
    pub created_at: u64,
}

impl QueueEntry {
    // == Constructor ==
    /// Creates a new queue entry stamped with the current time.
    pub fn new(fingerprint: Fingerprint, value: String, ttl: Option<Duration>) -> Self {
        Self {
            fingerprint,
            value,
            ttl,
            created_at: current_timestamp_ms(),
        }
    }

    // == Expires At ==
    /// Returns the instant (Unix milliseconds) the TTL would elapse.
    ///
    /// Informational only: the store keeps the entry past this point.
    pub fn expires_at(&self) -> Option<u64> {
        self.ttl.map(|ttl| {
            let ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
            self.created_at.saturating_add(ttl_ms)
        })
    }

    /// TTL in whole seconds, as accepted on enqueue.
    pub fn ttl_secs(&self) -> Option<u64> {
        self.ttl.map(|ttl| ttl.as_secs())
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
