use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::literal::Literal;

/// The shape a decoder was looking for when it rejected a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Expected {
    String,
    Number,
    Boolean,
    Array,
    /// One of a declared set of literals, kept in declaration order.
    OneOf(Vec<Literal>),
    /// Free-form label for decoders defined outside this crate.
    Other(String),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::String => f.write_str("a string"),
            Expected::Number => f.write_str("a number"),
            Expected::Boolean => f.write_str("a boolean"),
            Expected::Array => f.write_str("an array"),
            Expected::OneOf(members) => {
                f.write_str("in [")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{}", member)?;
                }
                f.write_str("]")
            }
            Expected::Other(label) => f.write_str(label),
        }
    }
}

impl Serialize for Expected {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A value did not have the shape a decoder expected.
///
/// This is the only failure a [`Decoder`](crate::Decoder) produces. It keeps
/// the rejected value exactly as it was supplied so the `Display` form can show
/// the caller what was actually received.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("This is not {expected}: {value:#}")]
pub struct DecodeError {
    expected: Expected,
    value: Value,
}

impl DecodeError {
    pub fn new(value: Value, expected: Expected) -> Self {
        DecodeError { expected, value }
    }

    /// Shorthand for a rejection with a custom label.
    pub fn custom(value: Value, label: impl Into<String>) -> Self {
        DecodeError::new(value, Expected::Other(label.into()))
    }

    /// The rejected input.
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn expected(&self) -> &Expected {
        &self.expected
    }

    /// The rendered expected-shape label, e.g. `"a string"`.
    pub fn label(&self) -> String {
        self.expected.to_string()
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// Machine-readable form for diagnostics: `{"expected": ..., "value": ...}`.
    pub fn to_json_value(&self) -> Value {
        serde_json::json!({
            "expected": self.label(),
            "value": self.value,
        })
    }
}
