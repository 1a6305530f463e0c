//! JSON parser for member record payloads.
//!
//! Pure functions converting the raw payload (a JSON array of objects)
//! into validated records. Individual bad elements are reported as
//! [`ParseError`]s and skipped; only a payload that is not a JSON array at
//! all fails the whole load.

use crate::model::record::FIELD_ID;
use crate::model::{LoadError, ParseError, Record, RecordId};
use serde_json::Value;
use std::collections::HashSet;

/// Outcome of parsing a payload: the accepted records in payload order and
/// the elements that were skipped.
#[derive(Debug, Default)]
pub struct ParsedRecords {
    /// Accepted records, unique by id.
    pub records: Vec<Record>,
    /// One entry per skipped element.
    pub errors: Vec<ParseError>,
}

/// Parse raw payload bytes.
///
/// # Errors
///
/// Returns `LoadError::InvalidJson` if the bytes are not JSON and
/// `LoadError::NotAnArray` if the top-level value is not an array.
pub fn parse_payload(bytes: &[u8]) -> Result<ParsedRecords, LoadError> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| LoadError::InvalidJson {
        reason: e.to_string(),
    })?;
    parse_value(value)
}

/// Parse an already decoded JSON value.
///
/// # Errors
///
/// Returns `LoadError::NotAnArray` if `value` is not an array.
pub fn parse_value(value: Value) -> Result<ParsedRecords, LoadError> {
    let elements = match value {
        Value::Array(elements) => elements,
        other => {
            return Err(LoadError::NotAnArray {
                found: json_type_name(&other),
            })
        }
    };

    let mut parsed = ParsedRecords::default();
    let mut seen: HashSet<RecordId> = HashSet::with_capacity(elements.len());

    for (index, element) in elements.into_iter().enumerate() {
        match parse_record(element, index) {
            Ok(record) => {
                if seen.insert(record.id().clone()) {
                    parsed.records.push(record);
                } else {
                    parsed.errors.push(ParseError::DuplicateId {
                        index,
                        id: record.id().to_string(),
                    });
                }
            }
            Err(err) => parsed.errors.push(err),
        }
    }

    Ok(parsed)
}

/// Parse a single array element into a record.
///
/// # Errors
///
/// Returns a `ParseError` if the element is not an object or has no usable id.
pub fn parse_record(element: Value, index: usize) -> Result<Record, ParseError> {
    let Value::Object(fields) = element else {
        return Err(ParseError::NotAnObject { index });
    };

    let raw_id = fields
        .get(FIELD_ID)
        .ok_or(ParseError::MissingId { index })?;

    let id = RecordId::from_json(raw_id).map_err(|e| ParseError::InvalidId {
        index,
        reason: e.to_string(),
    })?;

    Ok(Record::new(id, fields))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEMBERS: &str = r#"[
        {"id":"1","name":"Aaron Miles","email":"aaron@mailinator.com","role":"member"},
        {"id":"2","name":"Aishwarya Naik","email":"aishwarya@mailinator.com","role":"member"},
        {"id":"3","name":"Arvind Kumar","email":"arvind@mailinator.com","role":"admin"}
    ]"#;

    #[test]
    fn parse_payload_keeps_load_order() {
        let parsed = parse_payload(MEMBERS.as_bytes()).unwrap();
        assert!(parsed.errors.is_empty());
        let ids: Vec<&str> = parsed.records.iter().map(|r| r.id().as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(parsed.records[2].role(), "admin");
    }

    #[test]
    fn parse_payload_accepts_numeric_ids() {
        let parsed = parse_payload(br#"[{"id":1,"name":"Ann"},{"id":2,"name":"Bob"}]"#).unwrap();
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.records[0].id().as_str(), "1");
    }

    #[test]
    fn parse_payload_rejects_invalid_json() {
        let result = parse_payload(b"[{\"id\":");
        assert!(
            matches!(result, Err(LoadError::InvalidJson { .. })),
            "Expected InvalidJson, got {:?}",
            result
        );
    }

    #[test]
    fn parse_payload_rejects_non_array() {
        let result = parse_payload(br#"{"members":[]}"#);
        assert!(
            matches!(result, Err(LoadError::NotAnArray { found: "object" })),
            "Expected NotAnArray, got {:?}",
            result
        );
    }

    #[test]
    fn empty_array_yields_no_records() {
        let parsed = parse_payload(b"[]").unwrap();
        assert!(parsed.records.is_empty());
        assert!(parsed.errors.is_empty());
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let parsed = parse_payload(
            br#"[{"id":"1","name":"First"},{"id":"1","name":"Second"},{"id":1,"name":"Third"}]"#,
        )
        .unwrap();
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].name(), "First");
        assert_eq!(
            parsed.errors,
            vec![
                ParseError::DuplicateId {
                    index: 1,
                    id: "1".to_string()
                },
                ParseError::DuplicateId {
                    index: 2,
                    id: "1".to_string()
                },
            ]
        );
    }

    #[test]
    fn bad_elements_are_skipped_and_reported() {
        let parsed = parse_payload(
            br#"[{"id":"1","name":"Ok"}, 42, {"name":"No id"}, {"id":null}, {"id":""}]"#,
        )
        .unwrap();
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.errors.len(), 4);
        assert_eq!(parsed.errors[0], ParseError::NotAnObject { index: 1 });
        assert_eq!(parsed.errors[1], ParseError::MissingId { index: 2 });
        assert!(matches!(parsed.errors[2], ParseError::InvalidId { index: 3, .. }));
        assert!(matches!(parsed.errors[3], ParseError::InvalidId { index: 4, .. }));
    }

    #[test]
    fn extra_fields_are_preserved() {
        let parsed =
            parse_payload(br#"[{"id":"1","name":"Ann","team":"Platform","age":31}]"#).unwrap();
        let record = &parsed.records[0];
        assert_eq!(record.text_field("team"), "Platform");
        assert!(record.fields().contains_key("age"));
    }
}
