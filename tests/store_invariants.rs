//! Record store invariant tests
//!
//! Exercises the store's public contract: id uniqueness and immutability,
//! insertion-order enumeration, full-replace versus partial-merge
//! semantics, and not-found atomicity.

use serde_json::json;

use recstore::store::{RecordData, RecordId, RecordStore, StoreError};

fn payload(value: serde_json::Value) -> RecordData {
    RecordData::from_value(value)
}

fn ada() -> RecordData {
    payload(json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "age": 30,
        "email": "ada@x.com"
    }))
}

/// A valid-looking id that no longer resolves to a record.
fn dangling_id(store: &mut RecordStore) -> RecordId {
    let id = store.insert(payload(json!({"scratch": true}))).id();
    store.delete(id).unwrap();
    id
}

#[test]
fn inserted_ids_are_unique_across_store_lifetime() {
    let mut store = RecordStore::new();
    let mut ids = Vec::new();

    for i in 0..50 {
        ids.push(store.insert(payload(json!({"n": i}))).id());
    }
    // Interleave deletions; freed ids must not be reassigned
    store.delete(ids[10]).unwrap();
    store.delete(ids[20]).unwrap();
    for i in 50..60 {
        ids.push(store.insert(payload(json!({"n": i}))).id());
    }

    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
}

#[test]
fn find_all_enumerates_in_insertion_order() {
    let mut store = RecordStore::new();
    for name in ["Ada", "Grace", "Edsger", "Barbara"] {
        store.insert(payload(json!({"name": name})));
    }

    let names: Vec<_> = store
        .find_all()
        .iter()
        .map(|r| r.get("name").cloned().unwrap())
        .collect();
    assert_eq!(names, vec![json!("Ada"), json!("Grace"), json!("Edsger"), json!("Barbara")]);
}

#[test]
fn replace_restores_id_and_drops_absent_fields() {
    let mut store = RecordStore::new();
    let id = store.insert(ada()).id();

    let replaced = store
        .replace(id, payload(json!({"firstName": "Ada", "handle": "countess"})))
        .unwrap();

    assert_eq!(replaced.id(), id);
    let stored = store.find_by_id(id).unwrap();
    assert_eq!(stored.get("handle"), Some(&json!("countess")));
    assert!(stored.get("lastName").is_none());
    assert!(stored.get("age").is_none());
    assert!(stored.get("email").is_none());
}

#[test]
fn update_changes_exactly_the_named_field() {
    let mut store = RecordStore::new();
    let id = store.insert(ada()).id();

    store.update(id, payload(json!({"age": 31}))).unwrap();

    let stored = store.find_by_id(id).unwrap();
    assert_eq!(stored.to_value(), json!({
        "id": 1,
        "firstName": "Ada",
        "lastName": "Lovelace",
        "age": 31,
        "email": "ada@x.com"
    }));
}

#[test]
fn operations_on_missing_id_fail_and_leave_store_unchanged() {
    let mut store = RecordStore::new();
    store.insert(ada());
    let missing = dangling_id(&mut store);
    let before = store.find_all();

    assert_eq!(store.find_by_id(missing), Err(StoreError::NotFound(missing)));
    assert_eq!(
        store.replace(missing, payload(json!({"x": 1}))),
        Err(StoreError::NotFound(missing))
    );
    assert_eq!(
        store.update(missing, payload(json!({"x": 1}))),
        Err(StoreError::NotFound(missing))
    );
    assert_eq!(store.delete(missing), Err(StoreError::NotFound(missing)));

    assert_eq!(store.find_all(), before);
}

#[test]
fn returned_records_are_copies_not_aliases() {
    let mut store = RecordStore::new();
    let id = store.insert(ada()).id();

    // Mutating a returned value must not touch stored state
    let mut copy = store.find_by_id(id).unwrap().to_value();
    copy["age"] = json!(99);

    assert_eq!(store.find_by_id(id).unwrap().get("age"), Some(&json!(30)));
}

#[test]
fn ada_lovelace_lifecycle() {
    let mut store = RecordStore::new();
    assert!(store.find_all().is_empty());

    let inserted = store.insert(ada());
    assert_eq!(inserted.id().to_string(), "1");
    assert_eq!(store.len(), 1);

    let missing = dangling_id(&mut store);
    assert!(matches!(store.find_by_id(missing), Err(StoreError::NotFound(_))));

    store.update(inserted.id(), payload(json!({"age": 31}))).unwrap();
    assert_eq!(
        store.find_by_id(inserted.id()).unwrap().get("age"),
        Some(&json!(31))
    );

    assert_eq!(store.delete(inserted.id()), Ok(true));
    assert!(matches!(
        store.find_by_id(inserted.id()),
        Err(StoreError::NotFound(_))
    ));
    assert!(store.is_empty());
}

#[test]
fn find_where_filters_without_mutating() {
    let mut store = RecordStore::new();
    store.insert(payload(json!({"name": "Ada", "active": true})));
    store.insert(payload(json!({"name": "Grace", "active": false})));
    store.insert(payload(json!({"name": "Barbara", "active": true})));

    let active = store.find_where(|r| r.get("active") == Some(&json!(true)));
    assert_eq!(active.len(), 2);
    assert_eq!(store.len(), 3);
}

#[test]
fn seeded_store_resumes_id_counter_above_seeds() {
    let mut store = RecordStore::with_seed(vec![
        payload(json!({"name": "Ada"})),
        payload(json!({"name": "Grace"})),
    ]);

    let next = store.insert(payload(json!({"name": "Barbara"})));
    let all = store.find_all();
    assert_eq!(all.len(), 3);
    assert!(all.iter().filter(|r| r.id() == next.id()).count() == 1);
    assert_eq!(next.to_value()["id"], json!(3));
}
