use folio_core::{
    default_content, ContentStorage, ContentStore, FileStorage, SiteContent, SqliteStorage,
    CONTENT_KEY,
};

#[test]
fn init_without_persisted_state_yields_default_document() {
    let storage = SqliteStorage::open_in_memory().unwrap();
    let store = ContentStore::init(storage);
    assert_eq!(store.get(), &default_content());
}

#[test]
fn init_with_persisted_document_yields_that_document() {
    let storage = SqliteStorage::open_in_memory().unwrap();

    let mut document = default_content();
    document.home.hero.name = "Persisted Name".to_string();
    document.projects.clear();
    storage
        .save(CONTENT_KEY, &serde_json::to_string(&document).unwrap())
        .unwrap();

    let store = ContentStore::init(storage);
    assert_eq!(store.get(), &document);
}

#[test]
fn init_with_unparseable_persisted_state_falls_back_to_default() {
    let storage = SqliteStorage::open_in_memory().unwrap();
    storage.save(CONTENT_KEY, "{ not json ").unwrap();

    let store = ContentStore::init(storage);
    assert_eq!(store.get(), &default_content());
}

#[test]
fn replace_then_get_round_trips() {
    let storage = SqliteStorage::open_in_memory().unwrap();
    let mut store = ContentStore::init(storage);

    let mut document = default_content();
    document.about.header = "About someone else".to_string();
    document.contact.formspree_id = "form42".to_string();

    store.replace(document.clone());
    assert_eq!(store.get(), &document);
}

#[test]
fn replace_is_whole_document_not_a_merge() {
    let storage = SqliteStorage::open_in_memory().unwrap();
    let mut store = ContentStore::init(storage);
    assert!(!store.get().projects.is_empty());

    store.replace(SiteContent::default());
    assert!(store.get().projects.is_empty());
    assert!(store.get().home.hero.name.is_empty());
}

#[test]
fn replaced_document_survives_a_new_session_on_file_storage() {
    let dir = tempfile::tempdir().unwrap();

    let mut document = default_content();
    document.home.currently = "Shipping the redesign.".to_string();

    {
        let storage = FileStorage::open(dir.path()).unwrap();
        let mut store = ContentStore::init(storage);
        store.replace(document.clone());
    }

    let storage = FileStorage::open(dir.path()).unwrap();
    let store = ContentStore::init(storage);
    assert_eq!(store.get(), &document);
}

#[test]
fn replaced_document_survives_a_new_session_on_sqlite_storage() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("content.db");

    let mut document = default_content();
    document.contact.email = "next@session.test".to_string();

    {
        let storage = SqliteStorage::open(&db_path).unwrap();
        let mut store = ContentStore::init(storage);
        store.replace(document.clone());
    }

    let storage = SqliteStorage::open(&db_path).unwrap();
    let store = ContentStore::init(storage);
    assert_eq!(store.get(), &document);
}
