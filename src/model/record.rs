//! Member record.
//!
//! A record keeps the JSON object it was loaded from, so that every
//! string-valued field (known or not) takes part in search. The well-known
//! columns are exposed through typed accessors.

use super::identifiers::RecordId;
use serde_json::{Map, Value};

/// Field names shown as table columns.
pub const FIELD_ID: &str = "id";
/// Display name column.
pub const FIELD_NAME: &str = "name";
/// Email column.
pub const FIELD_EMAIL: &str = "email";
/// Role column.
pub const FIELD_ROLE: &str = "role";

/// One member entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: RecordId,
    fields: Map<String, Value>,
}

impl Record {
    /// Create a record from an id and its full JSON object.
    ///
    /// `fields` is expected to contain the `id` entry as well; it is kept
    /// verbatim so search sees exactly what the source sent.
    pub fn new(id: RecordId, fields: Map<String, Value>) -> Self {
        Self { id, fields }
    }

    /// Convenience constructor for the four table columns.
    pub fn from_columns(
        id: RecordId,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        let mut fields = Map::new();
        fields.insert(FIELD_ID.to_string(), Value::String(id.as_str().to_string()));
        fields.insert(FIELD_NAME.to_string(), Value::String(name.into()));
        fields.insert(FIELD_EMAIL.to_string(), Value::String(email.into()));
        fields.insert(FIELD_ROLE.to_string(), Value::String(role.into()));
        Self { id, fields }
    }

    /// Record identity.
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// `name` field, or `""`.
    pub fn name(&self) -> &str {
        self.text_field(FIELD_NAME)
    }

    /// `email` field, or `""`.
    pub fn email(&self) -> &str {
        self.text_field(FIELD_EMAIL)
    }

    /// `role` field, or `""`.
    pub fn role(&self) -> &str {
        self.text_field(FIELD_ROLE)
    }

    /// String value of a field, or `""` when absent or not a string.
    pub fn text_field(&self, key: &str) -> &str {
        self.fields.get(key).and_then(Value::as_str).unwrap_or("")
    }

    /// Iterate over every string-valued field. Non-string values are skipped.
    pub fn text_values(&self) -> impl Iterator<Item = &str> {
        self.fields.values().filter_map(Value::as_str)
    }

    /// Overwrite a string field. Used when committing an edit.
    pub fn set_text_field(&mut self, key: &str, value: String) {
        self.fields.insert(key.to_string(), Value::String(value));
    }

    /// The raw JSON object, for assertions on untouched fields.
    #[cfg(test)]
    pub(crate) fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

/// Fields that can be changed through inline editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditableField {
    /// The `name` field.
    Name,
    /// The `email` field.
    Email,
}

impl EditableField {
    /// All editable fields in column order.
    pub const ALL: [EditableField; 2] = [EditableField::Name, EditableField::Email];

    /// JSON key backing this field.
    pub fn key(self) -> &'static str {
        match self {
            EditableField::Name => FIELD_NAME,
            EditableField::Email => FIELD_EMAIL,
        }
    }

    /// Field that receives input after Tab.
    pub fn next(self) -> Self {
        match self {
            EditableField::Name => EditableField::Email,
            EditableField::Email => EditableField::Name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn id(raw: &str) -> RecordId {
        RecordId::new(raw).expect("valid id")
    }

    #[test]
    fn accessors_read_string_columns() {
        let record = Record::from_columns(id("1"), "Aaron Miles", "aaron@mailinator.com", "member");
        assert_eq!(record.id().as_str(), "1");
        assert_eq!(record.name(), "Aaron Miles");
        assert_eq!(record.email(), "aaron@mailinator.com");
        assert_eq!(record.role(), "member");
    }

    #[test]
    fn missing_or_non_string_columns_read_as_empty() {
        let fields = json!({"id": 3, "name": 12}).as_object().cloned().unwrap();
        let record = Record::new(id("3"), fields);
        assert_eq!(record.name(), "");
        assert_eq!(record.email(), "");
    }

    #[test]
    fn text_values_skip_non_strings() {
        let fields = json!({"id": 3, "name": "Ann", "active": true, "age": 40})
            .as_object()
            .cloned()
            .unwrap();
        let record = Record::new(id("3"), fields);
        let values: Vec<&str> = record.text_values().collect();
        assert_eq!(values, vec!["Ann"]);
    }

    #[test]
    fn set_text_field_overwrites_value() {
        let mut record = Record::from_columns(id("1"), "Ann", "ann@example.com", "admin");
        record.set_text_field(FIELD_NAME, "Anne".to_string());
        assert_eq!(record.name(), "Anne");
    }

    #[test]
    fn editable_field_next_cycles() {
        assert_eq!(EditableField::Name.next(), EditableField::Email);
        assert_eq!(EditableField::Email.next(), EditableField::Name);
    }
}
