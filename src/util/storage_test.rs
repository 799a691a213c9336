use super::*;

#[test]
fn memory_storage_round_trips_values() {
    let storage = MemoryStorage::new();
    storage.write("access_token", "tok-1");
    assert_eq!(storage.read("access_token"), Some("tok-1".to_owned()));
}

#[test]
fn memory_storage_overwrites_existing_key() {
    let storage = MemoryStorage::new();
    storage.write("k", "a");
    storage.write("k", "b");
    assert_eq!(storage.read("k"), Some("b".to_owned()));
}

#[test]
fn memory_storage_remove_is_idempotent() {
    let storage = MemoryStorage::new();
    storage.write("k", "a");
    storage.remove("k");
    storage.remove("k");
    assert_eq!(storage.read("k"), None);
}

#[test]
fn memory_storage_clones_share_entries() {
    let storage = MemoryStorage::new();
    let alias = storage.clone();
    storage.write("k", "shared");
    assert_eq!(alias.read("k"), Some("shared".to_owned()));
}

#[test]
fn browser_storage_is_inert_off_wasm() {
    let storage = BrowserStorage;
    storage.write("k", "v");
    assert_eq!(storage.read("k"), None);
}
