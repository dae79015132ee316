//! Schema descriptions read from JSON.
//!
//! The description format is an object with a `base` discriminator:
//!
//! ```json
//! {"base": "Array", "element_type": {"base": "Nullable", "inner": {"base": "String"}}}
//! ```

use keel_core::Literal;
use serde_json::Value;

use crate::error::SchemaError;

/// A decoder shape known only at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    Unknown,
    String,
    Number,
    Boolean,
    Literal(Vec<Literal>),
    Nullable(Box<Schema>),
    Array(Box<Schema>),
}

impl Schema {
    /// Parse a schema from its JSON description.
    pub fn from_json(v: &Value) -> Result<Schema, SchemaError> {
        let obj = v.as_object().ok_or_else(|| SchemaError::NotAnObject {
            found: kind_name(v).to_string(),
        })?;
        let base = obj
            .get("base")
            .and_then(|b| b.as_str())
            .ok_or(SchemaError::MissingBase)?;

        match base {
            "Unknown" => Ok(Schema::Unknown),
            "String" => Ok(Schema::String),
            "Number" => Ok(Schema::Number),
            "Boolean" => Ok(Schema::Boolean),
            "Literal" => {
                let raw = obj.get("values").ok_or_else(|| missing(base, "values"))?;
                let values = raw.as_array().ok_or_else(|| SchemaError::InvalidField {
                    base: base.to_string(),
                    field: "values".to_string(),
                    expected: "an array".to_string(),
                    found: kind_name(raw).to_string(),
                })?;
                let members = values
                    .iter()
                    .enumerate()
                    .map(|(index, v)| {
                        Literal::from_json(v).ok_or(SchemaError::InvalidLiteral { index })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Schema::Literal(members))
            }
            "Nullable" => {
                let inner = obj.get("inner").ok_or_else(|| missing(base, "inner"))?;
                Ok(Schema::Nullable(Box::new(Schema::from_json(inner)?)))
            }
            "Array" => {
                let element = obj
                    .get("element_type")
                    .ok_or_else(|| missing(base, "element_type"))?;
                Ok(Schema::Array(Box::new(Schema::from_json(element)?)))
            }
            other => Err(SchemaError::UnknownBase {
                base: other.to_string(),
            }),
        }
    }

    /// Serialize back to the JSON description format.
    pub fn to_json(&self) -> Value {
        match self {
            Schema::Unknown => serde_json::json!({ "base": "Unknown" }),
            Schema::String => serde_json::json!({ "base": "String" }),
            Schema::Number => serde_json::json!({ "base": "Number" }),
            Schema::Boolean => serde_json::json!({ "base": "Boolean" }),
            Schema::Literal(members) => {
                let values: Vec<Value> = members.iter().map(Literal::to_json).collect();
                serde_json::json!({ "base": "Literal", "values": values })
            }
            Schema::Nullable(inner) => {
                serde_json::json!({ "base": "Nullable", "inner": inner.to_json() })
            }
            Schema::Array(element) => {
                serde_json::json!({ "base": "Array", "element_type": element.to_json() })
            }
        }
    }
}

fn missing(base: &str, field: &str) -> SchemaError {
    SchemaError::MissingField {
        base: base.to_string(),
        field: field.to_string(),
    }
}

fn kind_name(v: &Value) -> &'static str {
    match v {
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
    use serde_json::json;

    #[test]
    fn test_parse_primitives() {
        assert_eq!(Schema::from_json(&json!({"base": "Unknown"})).unwrap(), Schema::Unknown);
        assert_eq!(Schema::from_json(&json!({"base": "String"})).unwrap(), Schema::String);
        assert_eq!(Schema::from_json(&json!({"base": "Number"})).unwrap(), Schema::Number);
        assert_eq!(Schema::from_json(&json!({"base": "Boolean"})).unwrap(), Schema::Boolean);
    }

    #[test]
    fn test_parse_literal_keeps_order() {
        let schema =
            Schema::from_json(&json!({"base": "Literal", "values": ["b", 1, null, true]})).unwrap();
        assert_eq!(
            schema,
            Schema::Literal(vec![
                Literal::from("b"),
                Literal::from(1),
                Literal::Null,
                Literal::from(true),
            ])
        );
    }

    #[test]
    fn test_parse_empty_literal() {
        let schema = Schema::from_json(&json!({"base": "Literal", "values": []})).unwrap();
        assert_eq!(schema, Schema::Literal(Vec::new()));
    }

    #[test]
    fn test_parse_nested() {
        let schema = Schema::from_json(&json!({
            "base": "Array",
            "element_type": {"base": "Nullable", "inner": {"base": "Number"}}
        }))
        .unwrap();
        assert_eq!(
            schema,
            Schema::Array(Box::new(Schema::Nullable(Box::new(Schema::Number))))
        );
    }

    #[test]
    fn test_not_an_object() {
        assert_eq!(
            Schema::from_json(&json!("String")).unwrap_err(),
            SchemaError::NotAnObject {
                found: "string".to_string()
            }
        );
    }

    #[test]
    fn test_missing_base() {
        assert_eq!(
            Schema::from_json(&json!({"kind": "String"})).unwrap_err(),
            SchemaError::MissingBase
        );
        assert_eq!(
            Schema::from_json(&json!({"base": 3})).unwrap_err(),
            SchemaError::MissingBase
        );
    }

    #[test]
    fn test_unknown_base() {
        let err = Schema::from_json(&json!({"base": "Record"})).unwrap_err();
        assert_eq!(err.to_string(), "unknown schema base 'Record'");
    }

    #[test]
    fn test_missing_required_fields() {
        let err = Schema::from_json(&json!({"base": "Array"})).unwrap_err();
        assert_eq!(err.to_string(), "Array schema missing required field 'element_type'");

        let err = Schema::from_json(&json!({"base": "Nullable"})).unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingField {
                base: "Nullable".to_string(),
                field: "inner".to_string()
            }
        );

        let err = Schema::from_json(&json!({"base": "Literal"})).unwrap_err();
        assert_eq!(err, missing("Literal", "values"));
    }

    #[test]
    fn test_wrongly_typed_field() {
        let err = Schema::from_json(&json!({"base": "Literal", "values": "a"})).unwrap_err();
        assert_eq!(
            err,
            SchemaError::InvalidField {
                base: "Literal".to_string(),
                field: "values".to_string(),
                expected: "an array".to_string(),
                found: "string".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Literal schema field 'values' must be an array, got string"
        );
    }

    #[test]
    fn test_nested_error_surfaces() {
        let err = Schema::from_json(&json!({
            "base": "Array",
            "element_type": {"base": "Nullable", "inner": 7}
        }))
        .unwrap_err();
        assert_eq!(
            err,
            SchemaError::NotAnObject {
                found: "number".to_string()
            }
        );
    }

    #[test]
    fn test_container_literal_rejected() {
        let err =
            Schema::from_json(&json!({"base": "Literal", "values": ["a", ["b"]]})).unwrap_err();
        assert_eq!(err, SchemaError::InvalidLiteral { index: 1 });
    }

    #[test]
    fn test_to_json_round_trip() {
        let description = json!({
            "base": "Nullable",
            "inner": {
                "base": "Array",
                "element_type": {"base": "Literal", "values": ["x", 2.5, false]}
            }
        });
        let schema = Schema::from_json(&description).unwrap();
        assert_eq!(schema.to_json(), description);
    }
}
