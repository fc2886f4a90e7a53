use super::*;

#[test]
fn memory_storage_starts_empty() {
    let storage = MemoryStorage::default();
    assert_eq!(storage.load(), None);
}

#[test]
fn memory_storage_clones_share_the_record() {
    let storage = MemoryStorage::default();
    let observer = storage.clone();
    storage.save(r#"{"id":"u"}"#).unwrap();
    assert_eq!(observer.raw().as_deref(), Some(r#"{"id":"u"}"#));
    storage.clear();
    assert_eq!(observer.raw(), None);
}

#[test]
fn memory_storage_with_record_is_loadable() {
    let storage = MemoryStorage::with_record("raw");
    assert_eq!(storage.load().as_deref(), Some("raw"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_outside_browser_reads_nothing_and_refuses_writes() {
    let storage = BrowserStorage;
    assert_eq!(storage.load(), None);
    assert_eq!(storage.save("{}"), Err(StorageError::Unavailable));
    storage.clear();
}
