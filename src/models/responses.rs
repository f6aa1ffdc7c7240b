//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use indexmap::IndexMap;
use serde::Serialize;

use crate::service::{QueueItem, ValueMetadata};

/// Response body for a map lookup (GET /map/entries/:key)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The stored value
    pub value: String,
}

impl GetResponse {
    /// Creates a new GetResponse
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Response body for map and queue writes (PUT /map, PUT /queue)
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Success message
    pub message: String,
    /// The key that was set
    pub key: String,
}

impl SetResponse {
    /// Creates a new SetResponse
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' set successfully", key),
            key,
        }
    }
}

/// Response body for updates. Returned even when no queue entry matched.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateResponse {
    /// The key that was addressed
    pub key: String,
}

impl UpdateResponse {
    /// Creates a new UpdateResponse
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Response body for map listings, entries in listing order
#[derive(Debug, Clone, Serialize)]
pub struct MapEntriesResponse {
    /// Number of entries returned
    pub count: usize,
    /// Original key -> value
    pub entries: IndexMap<String, String>,
}

impl MapEntriesResponse {
    pub fn new(entries: IndexMap<String, String>) -> Self {
        Self {
            count: entries.len(),
            entries,
        }
    }
}

/// Response body for queue listings, head first unless sorted
#[derive(Debug, Clone, Serialize)]
pub struct QueueEntriesResponse {
    /// Number of entries returned
    pub count: usize,
    pub entries: Vec<QueueItem>,
}

impl QueueEntriesResponse {
    pub fn new(entries: Vec<QueueItem>) -> Self {
        Self {
            count: entries.len(),
            entries,
        }
    }
}

/// Response body for a multi-key lookup (POST /map/values)
#[derive(Debug, Clone, Serialize)]
pub struct ValuesResponse {
    pub values: Vec<String>,
}

/// Response body for value metadata (GET /map/entries/:key/metadata)
#[derive(Debug, Clone, Serialize)]
pub struct MetadataResponse {
    pub key: String,
    #[serde(flatten)]
    pub metadata: ValueMetadata,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
