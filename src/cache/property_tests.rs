//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the store and service guarantees over generated inputs.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::cache::{fingerprint, ordering, MapStore, QueueStore};
use crate::service::{MapService, QueueService, SortSelector};

// == Strategies ==
/// Generates realistic cache keys
fn valid_key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_:-]{1,64}".prop_map(|s| s)
}

/// Generates cache values, including the empty string
fn valid_value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,128}".prop_map(|s| s)
}

/// Generates a sequence of queue operations for testing
#[derive(Debug, Clone)]
enum QueueOp {
    Set { key: String, value: String },
    Dequeue,
    Update { key: String, value: String },
}

fn queue_op_strategy() -> impl Strategy<Value = QueueOp> {
    prop_oneof![
        (valid_key_strategy(), valid_value_strategy())
            .prop_map(|(key, value)| QueueOp::Set { key, value }),
        Just(QueueOp::Dequeue),
        (valid_key_strategy(), valid_value_strategy())
            .prop_map(|(key, value)| QueueOp::Update { key, value }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Set followed by Get returns the stored value.
    #[test]
    fn prop_map_roundtrip(key in valid_key_strategy(), value in valid_value_strategy()) {
        let svc = MapService::new(Arc::new(MapStore::new()));

        svc.set(&key, value.clone());

        prop_assert_eq!(svc.get(&key), Some(value));
    }

    // Overwriting keeps one entry holding the last value.
    #[test]
    fn prop_map_last_writer_wins(
        key in valid_key_strategy(),
        value1 in valid_value_strategy(),
        value2 in valid_value_strategy()
    ) {
        let svc = MapService::new(Arc::new(MapStore::new()));

        svc.set(&key, value1);
        svc.update_cache_entry(&key, value2.clone());

        prop_assert_eq!(svc.get(&key), Some(value2));
        prop_assert_eq!(svc.len(), 1);
    }

    // Distinct keys never share a fingerprint.
    #[test]
    fn prop_fingerprint_injective(keys in prop::collection::hash_set(valid_key_strategy(), 1..100)) {
        let fingerprints: HashSet<_> = keys.iter().map(|k| fingerprint(k)).collect();
        prop_assert_eq!(fingerprints.len(), keys.len());
    }

    // Bounded listing never exceeds n and returns everything once n covers the store.
    #[test]
    fn prop_entry_list_bounded(
        entries in prop::collection::hash_map(valid_key_strategy(), valid_value_strategy(), 0..40),
        n in 0i64..60
    ) {
        let svc = MapService::new(Arc::new(MapStore::new()));
        for (key, value) in &entries {
            svc.set(key, value.clone());
        }

        let list = svc.get_entry_list(n).unwrap();
        prop_assert!(list.len() as i64 <= n);
        if n as usize >= entries.len() {
            let expected: HashMap<String, String> = entries.clone();
            let got: HashMap<String, String> = list.into_iter().collect();
            prop_assert_eq!(got, expected);
        }
    }

    // Sorting the same input twice yields identical output.
    #[test]
    fn prop_sort_by_key_repeatable(
        entries in prop::collection::hash_map(valid_key_strategy(), valid_value_strategy(), 0..40)
    ) {
        let svc = MapService::new(Arc::new(MapStore::new()));
        for (key, value) in &entries {
            svc.set(key, value.clone());
        }

        let first: Vec<_> = svc.get_sorted_entry_list(SortSelector::ByKey, 40).unwrap().into_iter().collect();
        let second: Vec<_> = svc.get_sorted_entry_list(SortSelector::ByKey, 40).unwrap().into_iter().collect();
        prop_assert_eq!(&first, &second);
        prop_assert!(first.windows(2).all(|w| w[0].0 <= w[1].0));
    }

    // Value ordering is ascending.
    #[test]
    fn prop_sort_by_value_ascending(
        entries in prop::collection::hash_map(valid_key_strategy(), valid_value_strategy(), 0..40)
    ) {
        let map: indexmap::IndexMap<String, String> = entries.into_iter().collect();
        let sorted = ordering::sort_map_by_value(&map);
        let values: Vec<&String> = sorted.values().collect();
        prop_assert!(values.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(sorted.len(), map.len());
    }

    // Dequeue order matches enqueue order.
    #[test]
    fn prop_queue_fifo(items in prop::collection::vec((valid_key_strategy(), valid_value_strategy()), 0..50)) {
        let svc = QueueService::new(Arc::new(QueueStore::new()));
        for (key, value) in &items {
            svc.set(key, value.clone());
        }

        for (key, value) in &items {
            let item = svc.get().unwrap();
            prop_assert_eq!(&item.key, key);
            prop_assert_eq!(&item.value, value);
        }
        prop_assert!(svc.get().is_none());
    }

    // Repeating an update leaves the queue unchanged.
    #[test]
    fn prop_queue_update_idempotent(
        items in prop::collection::vec((valid_key_strategy(), valid_value_strategy()), 1..30),
        pick in any::<prop::sample::Index>(),
        new_value in valid_value_strategy()
    ) {
        let svc = QueueService::new(Arc::new(QueueStore::new()));
        for (key, value) in &items {
            svc.set(key, value.clone());
        }
        let key = &items[pick.index(items.len())].0;

        svc.update_value(key, new_value.clone());
        let once = svc.all();
        svc.update_value(key, new_value);

        prop_assert_eq!(svc.all(), once);
    }

    // The queue store agrees with a VecDeque model under mixed operations.
    #[test]
    fn prop_queue_matches_model(ops in prop::collection::vec(queue_op_strategy(), 1..60)) {
        let svc = QueueService::new(Arc::new(QueueStore::new()));
        let mut model: std::collections::VecDeque<(String, String)> = Default::default();

        for op in ops {
            match op {
                QueueOp::Set { key, value } => {
                    svc.set(&key, value.clone());
                    model.push_back((key, value));
                }
                QueueOp::Dequeue => {
                    let got = svc.get().map(|i| (i.key, i.value));
                    prop_assert_eq!(got, model.pop_front());
                }
                QueueOp::Update { key, value } => {
                    prop_assert_eq!(svc.update_value(&key, value.clone()), key.clone());
                    if let Some(entry) = model.iter_mut().find(|(k, _)| *k == key) {
                        entry.1 = value;
                    }
                }
            }
        }

        let got: Vec<(String, String)> = svc.all().into_iter().map(|i| (i.key, i.value)).collect();
        let expected: Vec<(String, String)> = model.into_iter().collect();
        prop_assert_eq!(got, expected);
    }
}
