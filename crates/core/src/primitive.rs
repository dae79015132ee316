//! Leaf decoders that inspect a single value's kind.

use serde_json::{Number, Value};

use crate::decoder::Decoder;
use crate::error::{DecodeError, Expected};
use crate::literal::Literal;

/// Accepts anything. See [`unknown`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownDecoder;

/// Accepts JSON strings. See [`string`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StringDecoder;

/// Accepts JSON numbers. See [`number`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberDecoder;

/// Accepts JSON booleans. See [`boolean`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanDecoder;

/// Accepts values equal to one of a fixed set of literals. See [`literal`].
#[derive(Debug, Clone)]
pub struct LiteralDecoder {
    members: Vec<Literal>,
}

/// A decoder that never fails and returns its input.
pub const fn unknown() -> UnknownDecoder {
    UnknownDecoder
}

pub const fn string() -> StringDecoder {
    StringDecoder
}

/// Decodes a JSON number without converting it, so integers outside the
/// `f64` range keep their exact value.
pub const fn number() -> NumberDecoder {
    NumberDecoder
}

pub const fn boolean() -> BooleanDecoder {
    BooleanDecoder
}

/// A decoder accepting exactly the given literals.
///
/// Matching is by value (`1` matches `1.0`), never across kinds (`"1"` does
/// not match `1`). The declaration order is kept for the error label.
///
/// ```
/// use keel_core::{literal, Decoder, Literal};
/// use serde_json::json;
///
/// let status = literal(["open", "closed"]);
/// assert_eq!(status.decode(&json!("open")).unwrap(), Literal::from("open"));
/// assert_eq!(
///     status.decode(&json!("gone")).unwrap_err().label(),
///     r#"in ["open" | "closed"]"#,
/// );
/// ```
pub fn literal<I>(members: I) -> LiteralDecoder
where
    I: IntoIterator,
    I::Item: Into<Literal>,
{
    LiteralDecoder {
        members: members.into_iter().map(Into::into).collect(),
    }
}

impl LiteralDecoder {
    /// The accepted literals, in declaration order.
    pub fn members(&self) -> &[Literal] {
        &self.members
    }
}

impl Decoder for UnknownDecoder {
    type Output = Value;

    fn decode(&self, value: &Value) -> Result<Value, DecodeError> {
        Ok(value.clone())
    }
}

impl Decoder for StringDecoder {
    type Output = String;

    fn decode(&self, value: &Value) -> Result<String, DecodeError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(DecodeError::new(other.clone(), Expected::String)),
        }
    }
}

impl Decoder for NumberDecoder {
    type Output = Number;

    fn decode(&self, value: &Value) -> Result<Number, DecodeError> {
        match value {
            Value::Number(n) => Ok(n.clone()),
            other => Err(DecodeError::new(other.clone(), Expected::Number)),
        }
    }
}

impl Decoder for BooleanDecoder {
    type Output = bool;

    fn decode(&self, value: &Value) -> Result<bool, DecodeError> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(DecodeError::new(other.clone(), Expected::Boolean)),
        }
    }
}

impl Decoder for LiteralDecoder {
    type Output = Literal;

    fn decode(&self, value: &Value) -> Result<Literal, DecodeError> {
        if self.members.iter().any(|m| m.matches(value)) {
            if let Some(lit) = Literal::from_json(value) {
                return Ok(lit);
            }
        }
        Err(DecodeError::new(
            value.clone(),
            Expected::OneOf(self.members.clone()),
        ))
    }
}
