//! Sort Selector Module

use std::str::FromStr;

use crate::error::CacheError;

// == Sort Selector ==
/// Chooses the ordering applied by the sorted listing operations.
///
/// On the wire `0` means by value and `1` means by key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortSelector {
    ByValue,
    ByKey,
}

impl TryFrom<i64> for SortSelector {
    type Error = CacheError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(SortSelector::ByValue),
            1 => Ok(SortSelector::ByKey),
            other => Err(CacheError::InvalidArgument(format!(
                "unknown sort selector {}, expected 0 (by value) or 1 (by key)",
                other
            ))),
        }
    }
}

impl FromStr for SortSelector {
    type Err = CacheError;

    /// Numeric selectors go through [`TryFrom<i64>`]; names are matched
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(raw) = s.parse::<i64>() {
            return SortSelector::try_from(raw);
        }

        match s.to_ascii_lowercase().as_str() {
            "value" | "by_value" => Ok(SortSelector::ByValue),
            "key" | "by_key" => Ok(SortSelector::ByKey),
            other => Err(CacheError::InvalidArgument(format!(
                "unknown sort selector '{}', expected 'key' or 'value'",
                other
            ))),
        }
    }
}
