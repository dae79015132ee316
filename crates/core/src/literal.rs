//! Literal values accepted by the [`literal`](crate::literal()) decoder.

use std::fmt;

use serde_json::{Number, Value};

/// A scalar JSON value: the only kinds a literal set may contain.
///
/// `==` is structural, so `1` and `1.0` are different literals. Use
/// [`Literal::matches`] for the value equality the decoder applies.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl Literal {
    /// Converts a scalar JSON value. Arrays and objects have no literal form.
    pub fn from_json(value: &Value) -> Option<Literal> {
        match value {
            Value::Null => Some(Literal::Null),
            Value::Bool(b) => Some(Literal::Bool(*b)),
            Value::Number(n) => Some(Literal::Number(n.clone())),
            Value::String(s) => Some(Literal::String(s.clone())),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Literal::Null => Value::Null,
            Literal::Bool(b) => Value::Bool(*b),
            Literal::Number(n) => Value::Number(n.clone()),
            Literal::String(s) => Value::String(s.clone()),
        }
    }

    /// A floating-point literal. Returns `None` for NaN and infinities,
    /// which have no JSON representation.
    pub fn float(f: f64) -> Option<Literal> {
        Number::from_f64(f).map(Literal::Number)
    }

    /// Whether `value` is equal to this literal.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Literal::Null, Value::Null) => true,
            (Literal::Bool(a), Value::Bool(b)) => a == b,
            (Literal::Number(a), Value::Number(b)) => numbers_equal(a, b),
            (Literal::String(a), Value::String(b)) => a == b,
            _ => false,
        }
    }
}

/// Numeric equality across integer and float representations, so `1` and
/// `1.0` match. Two integers never go through `f64`.
fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    if a.is_f64() || b.is_f64() {
        return match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        };
    }
    // One side is a negative i64 and the other a u64 above i64::MAX.
    false
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl From<Literal> for Value {
    fn from(lit: Literal) -> Value {
        match lit {
            Literal::Null => Value::Null,
            Literal::Bool(b) => Value::Bool(b),
            Literal::Number(n) => Value::Number(n),
            Literal::String(s) => Value::String(s),
        }
    }
}

impl From<()> for Literal {
    fn from(_: ()) -> Literal {
        Literal::Null
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Literal {
        Literal::Bool(b)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Literal {
        Literal::String(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Literal {
        Literal::String(s)
    }
}

impl From<Number> for Literal {
    fn from(n: Number) -> Literal {
        Literal::Number(n)
    }
}

macro_rules! literal_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Literal {
                fn from(n: $t) -> Literal {
                    Literal::Number(Number::from(n))
                }
            }
        )*
    };
}

literal_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);
