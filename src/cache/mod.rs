//! Cache Module
//!
//! In-memory storage: a keyed map store and an insertion-ordered queue store,
//! both addressed by key fingerprints.

mod entry;
mod key_hash;
mod map_store;
pub mod ordering;
mod queue_store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::{current_timestamp_ms, QueueEntry};
pub use key_hash::{fingerprint, Fingerprint, FINGERPRINT_LEN};
pub use map_store::MapStore;
pub use queue_store::QueueStore;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB
