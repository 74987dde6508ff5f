use test_log::test;

use super::{Entry, OrderedHashMap};

#[test]
fn iteration_follows_insertion_order() {
    let map: OrderedHashMap<&str, u64> =
        [("c", 0), ("a", 1), ("b", 2)].into_iter().collect();
    assert_eq!(map.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(), vec![
        ("c", 0),
        ("a", 1),
        ("b", 2)
    ]);
}

#[test]
fn insert_replaces_and_reports_previous() {
    let mut map = OrderedHashMap::default();
    assert_eq!(map.insert("slot", 5), None);
    assert_eq!(map.insert("slot", 7), Some(5));
    assert_eq!(map.get(&"slot"), Some(&7));
    assert_eq!(map.len(), 1);
}

#[test]
fn entry_detects_occupied() {
    let mut map: OrderedHashMap<&str, u64> = [("used_id", 1)].into_iter().collect();
    assert!(matches!(map.entry("used_id"), Entry::Occupied(_)));
    assert!(matches!(map.entry("fresh_id"), Entry::Vacant(_)));
}

#[test]
fn swap_remove_drops_the_entry() {
    let mut map: OrderedHashMap<&str, u64> = [("a", 1), ("b", 2)].into_iter().collect();
    assert_eq!(map.swap_remove(&"a"), Some(1));
    assert_eq!(map.swap_remove(&"a"), None);
    assert_eq!(map.get(&"b"), Some(&2));
    assert!(!map.is_empty());
}

#[test]
fn equality_ignores_insertion_order() {
    let ab: OrderedHashMap<&str, u64> = [("a", 1), ("b", 2)].into_iter().collect();
    let ba: OrderedHashMap<&str, u64> = [("b", 2), ("a", 1)].into_iter().collect();
    assert_eq!(ab, ba);
}
