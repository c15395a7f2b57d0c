mod common;

use common::{parse, parse_records, temp_planner};
use planner_core::{ErrorKind, ManagerError, UserOperations};
use serde_json::json;

#[test]
fn create_returns_input_verbatim_and_get_roundtrips() {
    let (_dir, planner) = temp_planner();
    let users = planner.users();
    let input = json!({"user_id": 1, "name": "Alice", "email": "alice@example.com", "age": 30});

    let created = parse(&users.create_user(&input.to_string()).unwrap());
    assert_eq!(created["user"], input);
    assert!(!created["timestamp"].as_str().unwrap().is_empty());

    let loaded = parse(&users.get_user(1).unwrap());
    assert_eq!(loaded, input);
}

#[test]
fn create_keeps_large_integers_and_floats_verbatim() {
    let (_dir, planner) = temp_planner();
    let users = planner.users();
    let input = r#"{"user_id":1,"name":"A","big":123456789012345678901234567890,"ratio":0.1}"#;

    users.create_user(input).unwrap();
    assert_eq!(users.get_user(1).unwrap(), input);

    let stored = std::fs::read_to_string(users.path()).unwrap();
    assert!(stored.contains("123456789012345678901234567890"));
    assert!(stored.contains("0.1"));
}

#[test]
fn create_payload_has_success_status() {
    let (_dir, planner) = temp_planner();
    let payload = parse(
        &planner
            .users()
            .create_user(r#"{"user_id": 2, "name": "Bo"}"#)
            .unwrap(),
    );
    assert_eq!(payload["status"], "success");
    assert_eq!(payload["user"]["name"], "Bo");
    assert!(payload["timestamp"].is_string());
}

#[test]
fn create_requires_user_id_and_name() {
    let (_dir, planner) = temp_planner();

    let err = planner
        .users()
        .create_user(r#"{"user_id": 1}"#)
        .unwrap_err();
    assert!(matches!(&err, ManagerError::MissingField(fields) if fields == &["name"]));
    assert!(parse_records(&planner.users().get_all_users().unwrap()).is_empty());
}

#[test]
fn create_rejects_malformed_json_and_non_integer_ids() {
    let (_dir, planner) = temp_planner();
    let users = planner.users();

    assert_eq!(
        users.create_user("{not json").unwrap_err().kind(),
        ErrorKind::MalformedInput
    );
    assert_eq!(
        users.create_user("[1, 2]").unwrap_err().kind(),
        ErrorKind::MalformedInput
    );
    assert_eq!(
        users
            .create_user(r#"{"user_id": "1", "name": "Alice"}"#)
            .unwrap_err()
            .kind(),
        ErrorKind::MalformedInput
    );
}

#[test]
fn duplicate_create_fails_and_leaves_collection_unchanged() {
    let (_dir, planner) = temp_planner();
    let users = planner.users();
    users
        .create_user(r#"{"user_id": 1, "name": "Alice"}"#)
        .unwrap();
    let before = users.get_all_users().unwrap();

    let err = users
        .create_user(r#"{"user_id": 1, "name": "Impostor"}"#)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateKey);
    assert_eq!(users.get_all_users().unwrap(), before);
}

#[test]
fn get_missing_user_returns_not_found() {
    let (_dir, planner) = temp_planner();
    let err = planner.users().get_user(42).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.to_string(), "User ID 42 not found");
}

#[test]
fn update_merges_only_supplied_fields() {
    let (_dir, planner) = temp_planner();
    let users = planner.users();
    users
        .create_user(r#"{"user_id": 1, "name": "Alice", "email": "a@x.com"}"#)
        .unwrap();

    let payload = parse(&users.update_user(r#"{"user_id": 1, "name": "Bob"}"#).unwrap());
    assert_eq!(payload["status"], "success");
    assert_eq!(
        payload["updated_user"],
        json!({"user_id": 1, "name": "Bob", "email": "a@x.com"})
    );
    assert_eq!(
        parse(&users.get_user(1).unwrap()),
        json!({"user_id": 1, "name": "Bob", "email": "a@x.com"})
    );
}

#[test]
fn update_requires_existing_user_id() {
    let (_dir, planner) = temp_planner();
    let users = planner.users();

    assert_eq!(
        users.update_user(r#"{"name": "Bob"}"#).unwrap_err().kind(),
        ErrorKind::MissingField
    );
    assert_eq!(
        users
            .update_user(r#"{"user_id": 7, "name": "Bob"}"#)
            .unwrap_err()
            .kind(),
        ErrorKind::NotFound
    );
}

#[test]
fn delete_removes_exactly_one_record() {
    let (_dir, planner) = temp_planner();
    let users = planner.users();
    users.create_user(r#"{"user_id": 1, "name": "A"}"#).unwrap();
    users.create_user(r#"{"user_id": 2, "name": "B"}"#).unwrap();

    let deleted = parse(&users.delete_user(1).unwrap());
    assert_eq!(deleted["deleted_user_id"], 1);
    assert_eq!(deleted["remaining_users"], 1);

    let remaining = parse_records(&users.get_all_users().unwrap());
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["user_id"], 2);
}

#[test]
fn delete_missing_user_fails_without_changes() {
    let (_dir, planner) = temp_planner();
    let users = planner.users();
    users.create_user(r#"{"user_id": 1, "name": "A"}"#).unwrap();
    let before = std::fs::read_to_string(users.path()).unwrap();

    let err = users.delete_user(9).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(std::fs::read_to_string(users.path()).unwrap(), before);
}

#[test]
fn get_all_preserves_insertion_order() {
    let (_dir, planner) = temp_planner();
    let users = planner.users();
    for id in [3, 1, 2] {
        users
            .create_user(&json!({"user_id": id, "name": format!("user-{id}")}).to_string())
            .unwrap();
    }

    let ids = parse_records(&users.get_all_users().unwrap())
        .iter()
        .map(|user| user["user_id"].as_i64().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![3, 1, 2]);
}
