//! Record identifier newtype with a smart constructor.
//!
//! Identity of a member record is its `id`. The payload may carry it as a
//! JSON string or number; both normalise to the same text form.

use std::fmt;

/// Unique identifier of a record within the collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    /// Smart constructor: validates non-empty id
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidRecordId> {
        let raw = raw.into();
        if raw.is_empty() {
            Err(InvalidRecordId::Empty)
        } else {
            Ok(Self(raw))
        }
    }

    /// Build an id from a JSON value.
    ///
    /// Strings are taken as-is and numbers use their canonical text form.
    /// Anything else (null, bool, array, object) is rejected.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, InvalidRecordId> {
        match value {
            serde_json::Value::String(s) => Self::new(s.as_str()),
            serde_json::Value::Number(n) => Self::new(n.to_string()),
            _ => Err(InvalidRecordId::NotScalar),
        }
    }

    /// Id as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== Error Types =====

/// Reasons a raw value cannot be a record id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRecordId {
    /// Empty string.
    #[error("Record ID cannot be empty")]
    Empty,
    /// Null, boolean, array or object.
    #[error("Record ID must be a string or a number")]
    NotScalar,
}

// ===== Tests =====
