//! Schema-less record representation.
//!
//! # Responsibility
//! - Represent stored users/teams/tasks as ordered field maps.
//! - Provide typed accessors for identity and reference fields.
//! - Define field-level merge used by update operations.
//!
//! # Invariants
//! - Field order is insertion order and survives a load/save cycle.
//! - Merge overwrites same-named fields in place and appends new ones.
//! - Identity fields are read as `i64`; any other JSON type is rejected.

use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One stored record: an ordered mapping from field name to JSON value.
pub type Record = Map<String, Value>;

/// Validation error raised while decoding caller-supplied records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Input is not valid JSON.
    Malformed(String),
    /// Input is valid JSON but not an object.
    NotAnObject,
    /// One or more required fields are absent.
    MissingFields(Vec<String>),
    /// A field that must hold an integer holds something else.
    NotAnInteger(String),
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(details) => write!(f, "invalid JSON format: {details}"),
            Self::NotAnObject => write!(f, "invalid JSON format: expected an object"),
            Self::MissingFields(fields) => {
                write!(f, "missing required fields: {}", fields.join(", "))
            }
            Self::NotAnInteger(field) => write!(f, "field `{field}` must be an integer"),
        }
    }
}

impl Error for RecordError {}

/// Parses a JSON-encoded object into a record.
///
/// # Errors
/// - `Malformed` when `input_json` is not valid JSON.
/// - `NotAnObject` when it parses to anything other than an object.
pub fn parse_record(input_json: &str) -> Result<Record, RecordError> {
    match serde_json::from_str::<Value>(input_json) {
        Ok(Value::Object(record)) => Ok(record),
        Ok(_) => Err(RecordError::NotAnObject),
        Err(err) => Err(RecordError::Malformed(err.to_string())),
    }
}

/// Checks that every field in `fields` is present (any value, including null).
pub fn require_fields(record: &Record, fields: &[&str]) -> Result<(), RecordError> {
    let missing = fields
        .iter()
        .filter(|field| !record.contains_key(**field))
        .map(|field| (*field).to_string())
        .collect::<Vec<_>>();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(RecordError::MissingFields(missing))
    }
}

/// Reads a required integer field.
pub fn integer_field(record: &Record, field: &str) -> Result<i64, RecordError> {
    match record.get(field) {
        None => Err(RecordError::MissingFields(vec![field.to_string()])),
        Some(value) => value
            .as_i64()
            .ok_or_else(|| RecordError::NotAnInteger(field.to_string())),
    }
}

/// Returns the integer stored under `field`, or `None` when absent or not an
/// integer. Used for scanning persisted data that may have been edited by hand.
pub fn key_of(record: &Record, field: &str) -> Option<i64> {
    record.get(field).and_then(Value::as_i64)
}

/// Shallow merge: every field of `patch` overwrites or extends `target`.
///
/// Nested values (for example a team's `members` list) are replaced whole.
pub fn merge_fields(target: &mut Record, patch: Record) {
    for (field, value) in patch {
        target.insert(field, value);
    }
}

#[cfg(test)]
mod tests {
    use super::{
        integer_field, key_of, merge_fields, parse_record, require_fields, RecordError,
    };
    use serde_json::json;

    #[test]
    fn parse_record_rejects_non_objects_and_bad_json() {
        assert_eq!(parse_record("[1, 2]").unwrap_err(), RecordError::NotAnObject);
        assert!(matches!(
            parse_record("{\"user_id\": ").unwrap_err(),
            RecordError::Malformed(_)
        ));
    }

    #[test]
    fn require_fields_lists_every_missing_field() {
        let record = parse_record(r#"{"task_id": 1, "status": null}"#).unwrap();
        let err = require_fields(&record, &["task_id", "title", "status", "team_id"]).unwrap_err();
        assert_eq!(
            err,
            RecordError::MissingFields(vec!["title".to_string(), "team_id".to_string()])
        );
    }

    #[test]
    fn integer_field_rejects_strings_and_floats() {
        let record = parse_record(r#"{"a": "1", "b": 1.5, "c": 7}"#).unwrap();
        assert_eq!(
            integer_field(&record, "a").unwrap_err(),
            RecordError::NotAnInteger("a".to_string())
        );
        assert!(integer_field(&record, "b").is_err());
        assert_eq!(integer_field(&record, "c").unwrap(), 7);
        assert_eq!(key_of(&record, "a"), None);
    }

    #[test]
    fn merge_keeps_field_positions_and_appends_new_fields() {
        let mut stored =
            parse_record(r#"{"user_id": 1, "name": "Alice", "email": "a@x.com"}"#).unwrap();
        let patch = parse_record(r#"{"user_id": 1, "name": "Bob", "role": "dev"}"#).unwrap();

        merge_fields(&mut stored, patch);

        let fields = stored.keys().map(String::as_str).collect::<Vec<_>>();
        assert_eq!(fields, vec!["user_id", "name", "email", "role"]);
        assert_eq!(stored["name"], json!("Bob"));
        assert_eq!(stored["email"], json!("a@x.com"));
    }
}
