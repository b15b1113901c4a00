//! Core OrderedMap operations: set, get, delete, reset and ordering.

use ordmap::OrderedMap;

use crate::helpers::*;

// ===== SET / GET =====

#[test]
fn test_new_map_is_empty() {
    let map: OrderedMap<String, i64> = OrderedMap::new();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert!(map.entries().is_empty());
    assert_eq!(map.get("missing"), None);
}

#[test]
fn test_set_preserves_insertion_order() {
    let map = map_of(&[("zeta", 1), ("alpha", 2), ("mu", 3), ("beta", 4)]);
    assert_entries(&map, &[("zeta", 1), ("alpha", 2), ("mu", 3), ("beta", 4)]);
}

#[test]
fn test_set_many_keys_keeps_order() {
    let map = setup_numbered_map(1000);
    assert_eq!(map.len(), 1000);
    for (i, (key, value)) in map.iter().enumerate() {
        assert_eq!(key, &format!("key_{i}"));
        assert_eq!(*value, i);
    }
}

#[test]
fn test_first_write_wins() {
    let mut map = OrderedMap::new();
    assert!(map.set("k".to_string(), 1));
    assert!(!map.set("k".to_string(), 2));

    assert_eq!(map.get("k"), Some(&1));
    assert_eq!(map.len(), 1);
}

#[test]
fn test_duplicate_set_keeps_position() {
    let mut map = map_of(&[("a", 1), ("b", 2), ("c", 3)]);
    map.set("a".to_string(), 100);
    assert_entries(&map, &[("a", 1), ("b", 2), ("c", 3)]);
}

#[test]
fn test_get_does_not_affect_order() {
    let map = map_of(&[("a", 1), ("b", 2), ("c", 3)]);
    assert_eq!(map.get("c"), Some(&3));
    assert_eq!(map.get("a"), Some(&1));
    assert_entries(&map, &[("a", 1), ("b", 2), ("c", 3)]);
}

#[test]
fn test_get_mut_changes_value_in_place() {
    let mut map = map_of(&[("a", 1), ("b", 2)]);
    if let Some(value) = map.get_mut("a") {
        *value = 10;
    }
    assert_entries(&map, &[("a", 10), ("b", 2)]);
    assert!(map.get_mut("missing").is_none());
}

#[test]
fn test_contains_key() {
    let map = map_of(&[("a", 1)]);
    assert!(map.contains_key("a"));
    assert!(!map.contains_key("b"));
}

#[test]
fn test_non_string_keys() {
    let mut map = OrderedMap::new();
    map.set(30u32, "thirty");
    map.set(10u32, "ten");
    map.set(20u32, "twenty");

    assert_eq!(map.get(&10), Some(&"ten"));
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [30, 10, 20]);
}

// ===== DELETE =====

#[test]
fn test_delete_middle_and_reinsert_moves_to_tail() {
    let mut map = map_of(&[("a", 1), ("b", 2), ("c", 3)]);

    assert_eq!(map.delete("b"), Some(2));
    assert_entries(&map, &[("a", 1), ("c", 3)]);

    map.set("b".to_string(), 20);
    assert_entries(&map, &[("a", 1), ("c", 3), ("b", 20)]);
}

#[test]
fn test_delete_head_and_tail() {
    let mut map = map_of(&[("a", 1), ("b", 2), ("c", 3)]);

    map.delete("a");
    assert_entries(&map, &[("b", 2), ("c", 3)]);

    map.delete("c");
    assert_entries(&map, &[("b", 2)]);

    map.delete("b");
    assert!(map.is_empty());

    map.set("d".to_string(), 4);
    assert_entries(&map, &[("d", 4)]);
}

#[test]
fn test_delete_absent_is_noop() {
    let mut map = map_of(&[("a", 1)]);
    assert_eq!(map.delete("missing"), None);
    assert_entries(&map, &[("a", 1)]);

    assert_eq!(map.delete("a"), Some(1));
    assert_eq!(map.delete("a"), None);
    assert!(map.is_empty());
}

#[test]
fn test_interleaved_set_and_delete() {
    let mut map = OrderedMap::new();
    for i in 0..10 {
        map.set(i, i * 10);
    }
    for i in (0..10).filter(|i| i % 2 == 0) {
        map.delete(&i);
    }
    for i in [4, 11, 0] {
        map.set(i, i * 100);
    }

    let entries = map.entries();
    assert_eq!(
        entries,
        vec![
            (1, 10),
            (3, 30),
            (5, 50),
            (7, 70),
            (9, 90),
            (4, 400),
            (11, 1100),
            (0, 0)
        ]
    );
}

// ===== RESET =====

#[test]
fn test_reset_empties_map() {
    let mut map = map_of(&[("a", 1), ("b", 2)]);
    map.reset();

    assert!(map.is_empty());
    assert_eq!(map.get("a"), None);
    assert!(map.entries().is_empty());

    map.set("b".to_string(), 3);
    assert_entries(&map, &[("b", 3)]);
}

#[test]
fn test_reset_on_empty_is_noop() {
    let mut map: OrderedMap<String, i64> = OrderedMap::new();
    assert_eq!(map.len(), 0);
    map.reset();
    assert_eq!(map.len(), 0);
    map.reset();
    assert_eq!(map.len(), 0);
}

// ===== CONCURRENT USE =====

#[test]
fn test_external_lock_allows_shared_mutation() {
    use std::sync::{Arc, Mutex};
    use std::thread;

    let shared = Arc::new(Mutex::new(OrderedMap::new()));
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for i in 0..25 {
                    shared.lock().unwrap().set(format!("t{t}_{i}"), i);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let map = shared.lock().unwrap();
    assert_eq!(map.len(), 100);
    // Each thread's own keys still appear in the order it set them.
    for t in 0..4 {
        let prefix = format!("t{t}_");
        let mine: Vec<i32> = map
            .iter()
            .filter(|(k, _)| k.starts_with(&prefix))
            .map(|(_, v)| *v)
            .collect();
        assert_eq!(mine, (0..25).collect::<Vec<_>>());
    }
}
