//! Ordering Module
//!
//! Pure helpers returning sorted copies of store contents. Inputs are never
//! mutated. Ties between equal sort keys come out in no guaranteed order.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::cache::QueueEntry;

// == Sortable Entry ==
/// An ordered-sequence element that can be sorted by key or by value.
pub trait SortableEntry {
    /// Key used by [`sort_entries_by_key`].
    fn sort_key(&self) -> &str;
    /// Value used by [`sort_entries_by_value`].
    fn sort_value(&self) -> &str;
}

impl SortableEntry for QueueEntry {
    fn sort_key(&self) -> &str {
        self.fingerprint.as_str()
    }

    fn sort_value(&self) -> &str {
        &self.value
    }
}

// == Map Ordering ==
/// Returns a copy of `map` ordered by key, ascending.
pub fn sort_map_by_key<K>(map: &IndexMap<K, String>) -> IndexMap<K, String>
where
    K: Ord + Hash + Clone,
{
    let mut sorted = map.clone();
    sorted.sort_keys();
    sorted
}

/// Returns a copy of `map` ordered by value, ascending.
pub fn sort_map_by_value<K>(map: &IndexMap<K, String>) -> IndexMap<K, String>
where
    K: Hash + Eq + Clone,
{
    let mut sorted = map.clone();
    sorted.sort_by(|_, v1, _, v2| v1.cmp(v2));
    sorted
}

// == Sequence Ordering ==
/// Returns a copy of `entries` ordered by key, ascending.
pub fn sort_entries_by_key<T>(entries: &[T]) -> Vec<T>
where
    T: SortableEntry + Clone,
{
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
    sorted
}

/// Returns a copy of `entries` ordered by value, ascending.
pub fn sort_entries_by_value<T>(entries: &[T]) -> Vec<T>
where
    T: SortableEntry + Clone,
{
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| a.sort_value().cmp(b.sort_value()));
    sorted
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::fingerprint;

    fn sample_map() -> IndexMap<String, String> {
        let mut map = IndexMap::new();
        map.insert("gamma".to_string(), "1".to_string());
        map.insert("alpha".to_string(), "3".to_string());
        map.insert("beta".to_string(), "2".to_string());
        map
    }

    #[test]
    fn test_sort_map_by_key() {
        let sorted = sort_map_by_key(&sample_map());
        let keys: Vec<&String> = sorted.keys().collect();
        assert_eq!(keys, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_sort_map_by_value() {
        let sorted = sort_map_by_value(&sample_map());
        let pairs: Vec<(&str, &str)> = sorted.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(pairs, vec![("gamma", "1"), ("beta", "2"), ("alpha", "3")]);
    }

    #[test]
    fn test_sort_map_leaves_input_untouched() {
        let map = sample_map();
        let _ = sort_map_by_key(&map);
        let _ = sort_map_by_value(&map);
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, vec!["gamma", "alpha", "beta"]);
    }

    #[test]
    fn test_sort_map_is_repeatable() {
        let map = sample_map();
        assert_eq!(
            sort_map_by_key(&map).into_iter().collect::<Vec<_>>(),
            sort_map_by_key(&map).into_iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_sort_empty_inputs() {
        let map: IndexMap<String, String> = IndexMap::new();
        assert!(sort_map_by_key(&map).is_empty());
        assert!(sort_map_by_value(&map).is_empty());

        let entries: Vec<QueueEntry> = Vec::new();
        assert!(sort_entries_by_key(&entries).is_empty());
        assert!(sort_entries_by_value(&entries).is_empty());
    }

    #[test]
    fn test_sort_entries_by_value() {
        let entries = vec![
            QueueEntry::new(fingerprint("a"), "pear".to_string(), None),
            QueueEntry::new(fingerprint("b"), "apple".to_string(), None),
            QueueEntry::new(fingerprint("c"), "fig".to_string(), None),
        ];

        let values: Vec<String> = sort_entries_by_value(&entries)
            .into_iter()
            .map(|e| e.value)
            .collect();
        assert_eq!(values, vec!["apple", "fig", "pear"]);
        assert_eq!(entries[0].value, "pear");
    }

    #[test]
    fn test_sort_entries_by_key_uses_fingerprint() {
        let entries = vec![
            QueueEntry::new(fingerprint("a"), "1".to_string(), None),
            QueueEntry::new(fingerprint("b"), "2".to_string(), None),
            QueueEntry::new(fingerprint("c"), "3".to_string(), None),
        ];

        let sorted = sort_entries_by_key(&entries);
        let fps: Vec<&str> = sorted.iter().map(|e| e.fingerprint.as_str()).collect();
        let mut expected: Vec<&str> = entries.iter().map(|e| e.fingerprint.as_str()).collect();
        expected.sort();
        assert_eq!(fps, expected);
    }
}
