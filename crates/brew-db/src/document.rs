//! # Documents
//!
//! The raw shape the store deals in: a store-assigned key plus a JSON
//! object of fields. Typed records are produced from documents only through
//! [`Document::into_record`], so a document that does not fit its record is
//! caught here instead of leaking half-filled values into the session.
//!
//! ```text
//! Document { key: "k1", fields: {"name": "Oat", "color": "#eee"} }
//!      │
//!      ▼  into_record::<Creamer>()
//! Creamer { id: "k1", name: "Oat", color: Some("#eee") }
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use brew_core::validation::validate_document_key;
use brew_core::ValidationError;

use crate::error::{DbError, DbResult};

/// Field map of a document.
pub type Fields = Map<String, Value>;

/// A document as stored: key plus fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub key: String,
    pub fields: Fields,
}

impl Document {
    /// Creates a document.
    pub fn new(key: impl Into<String>, fields: Fields) -> Self {
        Document {
            key: key.into(),
            fields,
        }
    }

    /// Maps the document into a typed record.
    ///
    /// The key becomes the record's `id`. An `id` inside the fields is
    /// ignored: identifiers come from the store only.
    ///
    /// ## Errors
    /// * `Required { field: "id" }` - the key is empty
    /// * `InvalidFormat` - the fields do not match the record
    pub fn into_record<T: DeserializeOwned>(self) -> Result<T, ValidationError> {
        validate_document_key(&self.key)?;

        let mut fields = self.fields;
        fields.insert("id".to_string(), Value::String(self.key));

        serde_json::from_value(Value::Object(fields)).map_err(|e| ValidationError::InvalidFormat {
            field: "document".to_string(),
            reason: e.to_string(),
        })
    }
}

/// Serializes a record into a field map suitable for `insert_document`.
///
/// A top-level `id` is stripped; the store assigns the key.
pub fn to_fields<T: Serialize>(record: &T) -> DbResult<Fields> {
    match serde_json::to_value(record)? {
        Value::Object(mut fields) => {
            fields.remove("id");
            Ok(fields)
        }
        other => Err(DbError::Serialization(format!(
            "expected a JSON object, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brew_core::{Base, Beverage, Creamer, SavedBeverage, Syrup, TemperaturePreset};
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            _ => panic!("test fixture must be an object"),
        }
    }

    #[test]
    fn test_key_becomes_id() {
        let doc = Document::new("b1", fields(json!({"name": "Espresso"})));
        let base: Base = doc.into_record().unwrap();
        assert_eq!(base, Base::new("b1", "Espresso"));
    }

    #[test]
    fn test_key_wins_over_field_id() {
        let doc = Document::new("real", fields(json!({"id": "fake", "name": "Oat"})));
        let creamer: Creamer = doc.into_record().unwrap();
        assert_eq!(creamer.id, "real");
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let doc = Document::new("s1", fields(json!({"color": "#fff"})));
        let err = doc.into_record::<Syrup>().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn test_empty_key_is_rejected() {
        let doc = Document::new("", fields(json!({"name": "Espresso"})));
        let err = doc.into_record::<Base>().unwrap_err();
        assert!(matches!(err, ValidationError::Required { .. }));
    }

    #[test]
    fn test_saved_beverage_from_document() {
        let doc = Document::new(
            "bev-1",
            fields(json!({
                "name": "Unnamed Beverage",
                "temp": "Hot",
                "base": {"id": "b1", "name": "Espresso"},
                "syrup": {"id": "s1", "name": "Vanilla"},
                "creamer": {"id": "c1", "name": "Oat"},
            })),
        );

        let saved: SavedBeverage = doc.into_record().unwrap();
        assert_eq!(saved.id, "bev-1");
        assert_eq!(saved.beverage.temperature, Some(TemperaturePreset::new("Hot")));
        assert_eq!(saved.beverage.base.id, "b1");
    }

    #[test]
    fn test_to_fields_keeps_nested_ids() {
        let beverage = Beverage {
            name: "Morning".to_string(),
            temperature: None,
            base: Base::new("b1", "Espresso"),
            syrup: Syrup::new("s1", "Vanilla"),
            creamer: Creamer::new("c1", "Oat"),
        };

        let map = to_fields(&beverage).unwrap();
        assert_eq!(map["base"]["id"], json!("b1"));
        assert_eq!(map["temp"], Value::Null);
        assert!(!map.contains_key("id"));
    }

    #[test]
    fn test_to_fields_rejects_non_objects() {
        assert!(matches!(
            to_fields(&"just a string"),
            Err(DbError::Serialization(_))
        ));
    }
}
