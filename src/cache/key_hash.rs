//! Key Hash Module
//!
//! Derives fixed-length storage keys from caller-supplied keys.

use std::fmt;

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Length in characters of every fingerprint (hex-encoded SHA-256).
pub const FINGERPRINT_LEN: usize = 64;

// == Fingerprint ==
/// Storage key derived from a raw key by a one-way digest.
///
/// Equal raw keys always yield equal fingerprints. The original key cannot be
/// recovered from a fingerprint; see `service::KeyIndex` for that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Computes the fingerprint of `raw_key`.
    pub fn of(raw_key: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(raw_key.as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    /// Returns the hex digest.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fingerprints `raw_key`. Total over all strings, including the empty one.
pub fn fingerprint(raw_key: &str) -> Fingerprint {
    Fingerprint::of(raw_key)
}
