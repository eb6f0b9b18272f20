//! Namespace Tests
//!
//! Isolation between namespaces, the prefix collision, namespace
//! discovery, and namespace views.

use crate::*;

// =============================================================================
// ISOLATION
// =============================================================================

#[test]
fn test_namespace_isolation() {
    let state = create_state();

    state.set_in("a", "x", 1).unwrap();

    assert_eq!(state.get_in("b", "x").unwrap(), Value::Null);
    assert_eq!(state.get_or_in("c", "x", 5).unwrap(), Value::Int(5));
    assert_eq!(state.get_in("a", "x").unwrap(), Value::Int(1));
}

#[test]
fn test_namespaced_and_plain_keys_are_distinct() {
    let state = create_state();

    state.set("x", "plain").unwrap();
    state.set_in("a", "x", "namespaced").unwrap();

    assert_eq!(state.get("x").unwrap(), Value::from("plain"));
    assert_eq!(state.get_in("a", "x").unwrap(), Value::from("namespaced"));
}

#[test]
fn test_exists_and_delete_in_namespace() {
    let state = create_state();

    state.set_in("a", "x", 1).unwrap();
    assert!(state.exists_in("a", "x").unwrap());
    assert!(!state.exists_in("b", "x").unwrap());
    assert!(!state.exists("x").unwrap());

    assert!(!state.delete_in("b", "x").unwrap());
    assert!(state.delete_in("a", "x").unwrap());
    assert!(!state.exists_in("a", "x").unwrap());
}

#[test]
fn test_empty_namespace_argument_means_no_namespace() {
    let state = create_state();

    state.set_in("", "k", 1).unwrap();
    assert_eq!(state.keys().unwrap(), vec!["k"]);
    assert_eq!(state.get("k").unwrap(), Value::Int(1));
}

// =============================================================================
// COLLISION (prefix composition is ambiguous)
// =============================================================================

#[test]
fn test_namespaced_and_plain_collide_on_flat_key() {
    let state = create_state();

    state.set_in("a", "b", 1).unwrap();
    state.set("a_b", 2).unwrap();

    assert_eq!(state.keys().unwrap(), vec!["a_b"]);
    assert_eq!(state.get_in("a", "b").unwrap(), Value::Int(2));
}

#[test]
fn test_nested_namespaces_collide() {
    let state = create_state();

    state.set_in("a_b", "c", 1).unwrap();
    assert_eq!(state.get_in("a", "b_c").unwrap(), Value::Int(1));
}

#[test]
fn test_strict_mode_refuses_colliding_namespace() {
    let state = StateStoreBuilder::new()
        .strict_namespaces(true)
        .build(OrderedStore::new())
        .unwrap();

    let err = state.set_in("a_b", "c", 1).unwrap_err();
    assert!(err.is_invalid_namespace());
    assert!(state.keys().unwrap().is_empty());
}

// =============================================================================
// KEY LISTING
// =============================================================================

#[test]
fn test_keys_in_requires_separator() {
    let state = create_state();
    for flat in ["a_x", "a_y", "ab_z", "b_w", "a"] {
        state.set(flat, 0).unwrap();
    }

    assert_eq!(state.keys_in("a").unwrap(), vec!["a_x", "a_y"]);
    assert_eq!(state.keys_in("b").unwrap(), vec!["b_w"]);
    assert!(state.keys_in("c").unwrap().is_empty());
}

#[test]
fn test_keys_lists_everything() {
    let state = create_sharded_state();
    state.set("plain", 1).unwrap();
    state.set_in("ns", "k", 2).unwrap();

    assert_eq!(sorted(state.keys().unwrap()), vec!["ns_k", "plain"]);
}

// =============================================================================
// NAMESPACE DISCOVERY
// =============================================================================

#[test]
fn test_namespaces_from_keys() {
    let state = create_state();
    state.set_in("profile", "name", "").unwrap();
    state.set_in("profile", "email", "").unwrap();
    state.set_in("cart", "items", 0).unwrap();
    state.set("counter", 0).unwrap();

    let namespaces: Vec<String> = state.namespaces().unwrap().into_iter().collect();
    assert_eq!(namespaces, vec!["cart", "profile"]);
}

#[test]
fn test_namespaces_heuristic_misreads_plain_keys() {
    let state = create_state();
    state.set("user_id", 7).unwrap();

    assert!(state.namespaces().unwrap().contains("user"));
}

#[test]
fn test_namespaces_heuristic_truncates_nested_namespace() {
    let state = create_state();
    state.set_in("user_profile", "name", "Alice").unwrap();

    let namespaces = state.namespaces().unwrap();
    assert!(namespaces.contains("user"));
    assert!(!namespaces.contains("user_profile"));
}

#[test]
fn test_namespaces_empty_store() {
    let state = create_state();
    assert!(state.namespaces().unwrap().is_empty());
}

// =============================================================================
// NAMESPACE VIEWS
// =============================================================================

#[test]
fn test_create_namespace_rejects_empty() {
    let state = create_state();
    let err = state.create_namespace("").unwrap_err();
    assert!(matches!(err, Error::InvalidNamespace(_)));
}

#[test]
fn test_view_mirrors_state_store() {
    let state = create_state();
    let profile = state.create_namespace("profile").unwrap();

    assert_eq!(profile.init("name", "").unwrap(), Value::from(""));
    assert_eq!(profile.get_or("name", "ignored").unwrap(), Value::from(""));
    profile.set("name", "Alice").unwrap();
    assert_eq!(profile.get("name").unwrap(), Value::from("Alice"));
    assert!(profile.exists("name").unwrap());

    assert_eq!(state.get_in("profile", "name").unwrap(), Value::from("Alice"));
    assert_eq!(profile.keys().unwrap(), state.keys_in("profile").unwrap());

    assert!(profile.delete("name").unwrap());
    assert!(!profile.delete("name").unwrap());
    assert!(!state.exists_in("profile", "name").unwrap());
}

#[test]
fn test_two_views_are_isolated() {
    let state = create_state();
    let a = state.create_namespace("a").unwrap();
    let b = state.create_namespace("b").unwrap();

    a.set("x", 1).unwrap();
    assert_eq!(b.get("x").unwrap(), Value::Null);
    assert_eq!(a.get("x").unwrap(), Value::Int(1));
}

#[test]
fn test_view_clear() {
    let state = create_state();
    let a = state.create_namespace("a").unwrap();
    a.set("x", 1).unwrap();
    a.set("y", 2).unwrap();
    state.set("ab_z", 3).unwrap();

    assert_eq!(a.clear().unwrap(), 2);
    assert!(a.keys().unwrap().is_empty());
    assert_eq!(state.keys().unwrap(), vec!["ab_z"]);
}

#[test]
fn test_view_typed_access() {
    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Prefs {
        dark_mode: bool,
        notifications: bool,
    }

    let state = create_state();
    let profile = state.create_namespace("profile").unwrap();
    let prefs = Prefs {
        dark_mode: false,
        notifications: true,
    };

    profile.set_as("preferences", &prefs).unwrap();
    assert_eq!(
        profile.get("preferences").unwrap().field("notifications"),
        Some(&Value::Bool(true))
    );
    assert_eq!(profile.read_as::<Prefs>("preferences").unwrap(), Some(prefs));
}
