//! Service Module
//!
//! Orchestration over the stores: fingerprinting, bounded and sorted listings,
//! and recovery of original keys for display.

mod key_index;
mod map_service;
mod queue_service;
mod selector;

pub use key_index::KeyIndex;
pub use map_service::{MapService, ValueMetadata};
pub use queue_service::{QueueItem, QueueService};
pub use selector::SortSelector;

use tracing::warn;

use crate::error::{CacheError, Result};

/// Converts a caller-supplied listing count into an entry limit.
///
/// Zero means "no entries"; negative counts are rejected.
pub(crate) fn listing_limit(n: i64) -> Result<usize> {
    if n < 0 {
        warn!(count = n, "rejecting negative listing count");
        return Err(CacheError::InvalidArgument(format!(
            "count must not be negative, got {}",
            n
        )));
    }
    Ok(usize::try_from(n).unwrap_or(usize::MAX))
}
