//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::cache::{MAX_KEY_LENGTH, MAX_VALUE_SIZE};

fn validate_key(key: &str) -> Option<String> {
    if key.is_empty() {
        return Some("Key cannot be empty".to_string());
    }
    if key.len() > MAX_KEY_LENGTH {
        return Some(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        ));
    }
    None
}

fn validate_value(value: &str) -> Option<String> {
    if value.len() > MAX_VALUE_SIZE {
        return Some(format!(
            "Value exceeds maximum size of {} bytes",
            MAX_VALUE_SIZE
        ));
    }
    None
}

/// Request body for storing into the map (PUT /map)
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: String,
}

impl SetRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_key(&self.key).or_else(|| validate_value(&self.value))
    }
}

/// Request body for appending to the queue (PUT /queue)
#[derive(Debug, Clone, Deserialize)]
pub struct EnqueueRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: String,
    /// Optional TTL in seconds, recorded on the entry
    #[serde(default, alias = "time-to-live")]
    pub ttl: Option<u64>,
}

impl EnqueueRequest {
    /// Validates the request data
    pub fn validate(&self) -> Option<String> {
        validate_key(&self.key).or_else(|| validate_value(&self.value))
    }
}

/// Request body for rewriting a value (PUT /map/entries/:key, PUT /queue/entries/:key)
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRequest {
    /// The replacement value
    #[serde(alias = "new-val")]
    pub value: String,
}

impl UpdateRequest {
    /// Validates the request data against the key taken from the path
    pub fn validate(&self, key: &str) -> Option<String> {
        validate_key(key).or_else(|| validate_value(&self.value))
    }
}

/// Request body for a multi-key lookup (POST /map/values)
#[derive(Debug, Clone, Deserialize)]
pub struct ValuesRequest {
    /// Keys to look up, in order
    pub keys: Vec<String>,
}
