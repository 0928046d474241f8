use super::*;

// =============================================================
// MemoryTokenStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    assert_eq!(MemoryTokenStore::default().load(), None);
}

#[test]
fn memory_store_clones_share_slot() {
    let store = MemoryTokenStore::default();
    let handle = store.clone();
    store.save("abc");
    assert_eq!(handle.load().as_deref(), Some("abc"));
    handle.remove();
    assert_eq!(store.load(), None);
}

// =============================================================
// Session
// =============================================================

#[test]
fn restore_picks_up_stored_token() {
    let store = MemoryTokenStore::default();
    store.save("T0");
    let session = Session::restore(store);
    assert!(session.is_active());
    assert_eq!(session.token().as_deref(), Some("T0"));
}

#[test]
fn restore_treats_empty_string_as_absent() {
    let store = MemoryTokenStore::default();
    store.save("");
    let session = Session::restore(store);
    assert!(!session.is_active());
    assert_eq!(session.token(), None);
}

#[test]
fn set_writes_through_to_store() {
    let store = MemoryTokenStore::default();
    let session = Session::restore(store.clone());
    session.set("T1");
    assert_eq!(session.token().as_deref(), Some("T1"));
    assert_eq!(store.load().as_deref(), Some("T1"));
}

#[test]
fn clear_removes_memory_and_stored_token() {
    let store = MemoryTokenStore::default();
    store.save("T1");
    let session = Session::restore(store.clone());
    session.clear();
    assert!(!session.is_active());
    assert_eq!(store.load(), None);
    assert_eq!(session.store().load(), None);
}
