use serde_json::json;
use std::collections::HashSet;
use std::thread;
use varejo_core::{EntityKind, FieldMap, JsonFileStore, RecordRepository};

const WRITERS: usize = 8;
const CREATES_PER_WRITER: usize = 8;

fn supplier_fields(label: String) -> FieldMap {
    [
        ("supplier_name", json!(label)),
        ("supplier_category", json!("Informática, Segurança")),
        ("contact_email", json!("j.heeler@gmail.com")),
        ("phone_number", json!("48 9696 5858")),
        ("status", json!("on")),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value))
    .collect()
}

#[test]
fn concurrent_creates_on_one_collection_lose_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let repo = RecordRepository::new(
        EntityKind::Suppliers,
        JsonFileStore::for_entity(dir.path(), EntityKind::Suppliers),
    );

    thread::scope(|scope| {
        for writer in 0..WRITERS {
            let repo = &repo;
            scope.spawn(move || {
                for n in 0..CREATES_PER_WRITER {
                    repo.create(supplier_fields(format!("supplier {writer}-{n}")))
                        .unwrap();
                }
            });
        }
    });

    let records = repo.list().unwrap();
    assert_eq!(records.len(), WRITERS * CREATES_PER_WRITER);

    let ids: HashSet<String> = records
        .iter()
        .map(|record| record.id().unwrap().to_string())
        .collect();
    assert_eq!(ids.len(), WRITERS * CREATES_PER_WRITER);
}

#[test]
fn concurrent_mixed_mutations_serialize_per_collection() {
    let dir = tempfile::tempdir().unwrap();
    let repo = RecordRepository::new(
        EntityKind::Suppliers,
        JsonFileStore::for_entity(dir.path(), EntityKind::Suppliers),
    );

    let keep: Vec<String> = (0..WRITERS)
        .map(|n| {
            repo.create(supplier_fields(format!("keeper {n}")))
                .unwrap()
                .id()
                .unwrap()
                .to_string()
        })
        .collect();
    let doomed: Vec<String> = (0..WRITERS)
        .map(|n| {
            repo.create(supplier_fields(format!("doomed {n}")))
                .unwrap()
                .id()
                .unwrap()
                .to_string()
        })
        .collect();

    thread::scope(|scope| {
        for id in &doomed {
            let repo = &repo;
            scope.spawn(move || repo.delete(id).unwrap());
        }
        for id in &keep {
            let repo = &repo;
            scope.spawn(move || {
                repo.update(
                    id,
                    [("status".to_string(), json!("off"))].into_iter().collect(),
                )
                .unwrap()
            });
        }
    });

    let records = repo.list().unwrap();
    assert_eq!(records.len(), keep.len());
    for record in &records {
        assert_eq!(record.get("status"), Some(&json!("off")));
        assert!(keep.contains(&record.id().unwrap().to_string()));
    }
}
