use super::*;
use crate::util::storage::MemoryStorage;

fn user_with(role: Role, is_superuser: bool) -> User {
    User {
        id: 1,
        username: "u".to_owned(),
        email: "u@example.com".to_owned(),
        first_name: None,
        last_name: None,
        role,
        is_active: true,
        is_superuser,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        updated_at: "2024-01-01T00:00:00Z".to_owned(),
    }
}

#[test]
fn fresh_store_is_unauthenticated() {
    let store = SessionStore::restore(MemoryStorage::new());
    assert!(!store.is_authenticated());
    assert_eq!(store.token(), "");
    assert_eq!(store.role(), None);
}

#[test]
fn set_session_then_restore_round_trips() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::restore(storage.clone());
    store.set_session("tok-1", user_with(Role::Admin, false));

    let restored = SessionStore::restore(storage);
    assert!(restored.is_authenticated());
    assert_eq!(restored.token(), "tok-1");
    assert_eq!(restored.user(), store.user());
}

#[test]
fn restore_ignores_profile_without_token() {
    let storage = MemoryStorage::new();
    storage.write("user_info", r#"{"id":1}"#);
    let store = SessionStore::restore(storage);
    assert!(!store.is_authenticated());
    assert_eq!(store.user(), None);
}

#[test]
fn restore_tolerates_corrupt_profile_snapshot() {
    let storage = MemoryStorage::new();
    storage.write("access_token", "tok-1");
    storage.write("user_info", "not json");
    let store = SessionStore::restore(storage);
    assert!(store.is_authenticated());
    assert_eq!(store.user(), None);
}

#[test]
fn clear_removes_state_and_snapshot() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::restore(storage.clone());
    store.set_session("tok-1", user_with(Role::User, false));
    store.clear();

    assert!(!store.is_authenticated());
    assert_eq!(store.user(), None);
    assert_eq!(storage.read("access_token"), None);
    assert_eq!(storage.read("user_info"), None);
}

#[test]
fn clear_twice_is_identical_to_once() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::restore(storage.clone());
    store.set_session("tok-1", user_with(Role::User, false));
    store.clear();
    store.clear();

    assert!(!store.is_authenticated());
    assert_eq!(storage.read("access_token"), None);
}

#[test]
fn role_dominance_follows_hierarchy() {
    let mut store = SessionStore::restore(MemoryStorage::new());
    store.set_session("tok-1", user_with(Role::Operator, false));

    assert!(store.has_at_least(Role::User));
    assert!(store.has_at_least(Role::Operator));
    assert!(!store.has_at_least(Role::Admin));
    assert!(store.is_operator());
    assert!(!store.is_admin());
}

#[test]
fn superuser_flag_dominates_every_check() {
    let mut store = SessionStore::restore(MemoryStorage::new());
    store.set_session("tok-1", user_with(Role::User, true));

    assert!(store.has_at_least(Role::Admin));
    assert!(store.has_at_least(Role::Superuser));
    assert!(store.is_admin());
}

#[test]
fn no_user_fails_every_role_check() {
    let mut store = SessionStore::restore(MemoryStorage::new());
    store.set_token("tok-1");
    assert!(!store.has_at_least(Role::Guest));
    assert!(!store.is_operator());
}
