use serde_json::json;
use std::fs;
use varejo_core::{CollectionStore, EntityKind, FieldMap, JsonFileStore, Record, StoreError};

fn record(pairs: &[(&str, serde_json::Value)]) -> Record {
    let fields: FieldMap = pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect();
    Record::from_fields(fields)
}

#[test]
fn save_then_load_roundtrips_records_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::for_entity(dir.path(), EntityKind::Suppliers);

    let collection = vec![
        record(&[("id", json!("s1")), ("supplier_name", json!("Judite Heeler"))]),
        record(&[("id", json!("s2")), ("supplier_name", json!("José"))]),
        record(&[("id", json!("s3")), ("supplier_name", json!("Açaí do Sul"))]),
    ];
    store.save(&collection).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, collection);
}

#[test]
fn artifact_is_a_human_readable_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::for_entity(dir.path(), EntityKind::Users);

    store
        .save(&[record(&[("id", json!("u1")), ("name", json!("Camila"))])])
        .unwrap();

    let text = fs::read_to_string(store.path()).unwrap();
    assert!(text.starts_with('['));
    assert!(text.contains('\n'));
    assert!(text.contains("\"name\": \"Camila\""));
}

#[test]
fn save_leaves_no_temporary_files_behind() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::for_entity(dir.path(), EntityKind::Users);

    store.save(&[record(&[("id", json!("u1"))])]).unwrap();
    store.save(&[record(&[("id", json!("u2"))])]).unwrap();

    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("users.json")]);
}

#[test]
fn save_creates_the_data_directory_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("data").join("nested");
    let store = JsonFileStore::for_entity(&nested, EntityKind::Orders);

    store.save(&[record(&[("id", json!("o1"))])]).unwrap();
    assert!(nested.join("orders.json").is_file());
}

#[test]
fn corrupt_content_is_a_parse_error_naming_the_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::for_entity(dir.path(), EntityKind::Campaigns);
    fs::write(store.path(), "{ definitely not an array").unwrap();

    let err = store.load().unwrap_err();
    match err {
        StoreError::Parse { path, .. } => assert_eq!(path, store.path()),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn collections_of_different_kinds_never_share_an_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let users = JsonFileStore::for_entity(dir.path(), EntityKind::Users);
    let products = JsonFileStore::for_entity(dir.path(), EntityKind::Products);

    users.save(&[record(&[("id", json!("u1"))])]).unwrap();
    products.save(&[record(&[("id", json!("p1"))])]).unwrap();

    assert_eq!(users.load().unwrap().len(), 1);
    assert_eq!(products.load().unwrap().len(), 1);
    assert_ne!(users.path(), products.path());
}
