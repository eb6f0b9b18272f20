//! Basic State Operations Tests
//!
//! Tests for exists, init, get, set, delete without namespaces.

use crate::*;
use proptest::prelude::*;

// =============================================================================
// GET-OR-INIT TESTS
// =============================================================================

#[test]
fn test_get_absent_writes_default() {
    let state = create_state();

    let value = state.get_or("theme", "light").unwrap();

    assert_eq!(value, Value::from("light"));
    assert!(state.exists("theme").unwrap());
    assert_eq!(
        state.session_store().read("theme").unwrap(),
        Some(Value::from("light"))
    );
}

#[test]
fn test_get_without_default_writes_null() {
    let state = create_state();

    assert_eq!(state.get("anything").unwrap(), Value::Null);
    assert_eq!(state.keys().unwrap(), vec!["anything"]);
}

#[test]
fn test_get_ignores_second_default() {
    let state = create_state();

    assert_eq!(state.get_or("k", 1).unwrap(), Value::Int(1));
    assert_eq!(state.get_or("k", 2).unwrap(), Value::Int(1));
    assert_eq!(state.session_store().read("k").unwrap(), Some(Value::Int(1)));
}

#[test]
fn test_init_and_get_are_interchangeable() {
    let state = create_state();

    state.get_or("a", 10).unwrap();
    assert_eq!(state.init("a", 20).unwrap(), Value::Int(10));

    state.init("b", 30).unwrap();
    assert_eq!(state.get_or("b", 40).unwrap(), Value::Int(30));
}

#[test]
fn test_init_does_not_overwrite_null() {
    let state = create_state();

    state.set("k", Value::Null).unwrap();
    assert_eq!(state.init("k", 5).unwrap(), Value::Null);
}

#[test]
fn test_init_writes_once() {
    let state = StateStore::new(PickyStore::default());

    state.init("k", 1).unwrap();
    state.init("k", 2).unwrap();
    state.get("k").unwrap();

    assert_eq!(*state.session_store().writes.lock(), vec!["k".to_string()]);
}

#[test]
fn test_init_absent_key_reads_once() {
    let state = StateStore::new(PickyStore::default());

    assert_eq!(state.init_in("ns", "k", 1).unwrap(), Value::Int(1));

    let store = state.session_store();
    assert_eq!(*store.reads.lock(), vec!["ns_k".to_string()]);
    assert_eq!(*store.writes.lock(), vec!["ns_k".to_string()]);
}

#[test]
fn test_init_present_key_reads_once_without_writing() {
    let state = StateStore::new(PickyStore::default());
    state.set("k", 5).unwrap();

    assert_eq!(state.get_or("k", 9).unwrap(), Value::Int(5));

    let store = state.session_store();
    assert_eq!(store.reads.lock().len(), 1);
    assert_eq!(store.writes.lock().len(), 1);
}

// =============================================================================
// SET TESTS
// =============================================================================

#[test]
fn test_set_overwrites_existing() {
    let state = create_state();

    state.set("k", 1).unwrap();
    state.set("k", 2).unwrap();

    assert_eq!(state.get_or("k", 99).unwrap(), Value::Int(2));
}

#[test]
fn test_set_creates_absent_key() {
    let state = create_state();

    state.set("fresh", true).unwrap();
    assert!(state.exists("fresh").unwrap());
}

#[test]
fn test_set_all_value_types() {
    let state = create_sharded_state();

    for (name, value) in standard_test_values() {
        let key = format!("type_{}", name);
        state.set(&key, value.clone()).unwrap();
        assert_eq!(state.get(&key).unwrap(), value, "Failed for type: {}", name);
    }
}

// =============================================================================
// EXISTS / DELETE TESTS
// =============================================================================

#[test]
fn test_exists_has_no_side_effects() {
    let state = create_state();

    assert!(!state.exists("ghost").unwrap());
    assert!(state.keys().unwrap().is_empty());
}

#[test]
fn test_delete_absent_is_noop() {
    let state = create_state();
    state.set("other", 1).unwrap();

    assert!(!state.delete("missing").unwrap());
    assert_eq!(state.keys().unwrap(), vec!["other"]);
}

#[test]
fn test_delete_twice_same_as_once() {
    let state = create_state();
    state.set("k", 1).unwrap();
    state.set("keep", 2).unwrap();

    assert!(state.delete("k").unwrap());
    let after_once = state.keys().unwrap();
    assert!(!state.delete("k").unwrap());

    assert_eq!(state.keys().unwrap(), after_once);
    assert!(!state.exists("k").unwrap());
}

#[test]
fn test_get_after_delete_reinitializes() {
    let state = create_state();

    state.set("k", 1).unwrap();
    state.delete("k").unwrap();

    assert_eq!(state.get_or("k", 7).unwrap(), Value::Int(7));
}

// =============================================================================
// STORE HANDLES
// =============================================================================

#[test]
fn test_borrowed_store_sees_writes() {
    let store = MemoryStore::new();
    {
        let state = StateStore::new(&store);
        state.set("k", "v").unwrap();
    }
    assert_eq!(store.read("k").unwrap(), Some(Value::from("v")));
}

#[test]
fn test_shared_store_between_state_stores() {
    let store = std::sync::Arc::new(MemoryStore::new());
    let a = StateStore::new(std::sync::Arc::clone(&store));
    let b = StateStore::new(std::sync::Arc::clone(&store));

    a.set_in("ui", "tab", 2).unwrap();
    assert_eq!(b.get_in("ui", "tab").unwrap(), Value::Int(2));
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_get_or_init_idempotent(key in "[a-z]{1,8}", d1 in any::<i64>(), d2 in any::<i64>()) {
        let state = create_state();

        prop_assert_eq!(state.get_or(&key, d1).unwrap(), Value::Int(d1));
        prop_assert_eq!(state.session_store().read(&key).unwrap(), Some(Value::Int(d1)));
        prop_assert_eq!(state.get_or(&key, d2).unwrap(), Value::Int(d1));
    }

    #[test]
    fn prop_last_set_wins(key in "[a-z_]{1,8}", values in proptest::collection::vec(any::<i64>(), 1..8)) {
        let state = create_sharded_state();
        for v in &values {
            state.set(&key, *v).unwrap();
        }
        let last = *values.last().unwrap();
        prop_assert_eq!(state.get_or(&key, 0).unwrap(), Value::Int(last));
    }
}
