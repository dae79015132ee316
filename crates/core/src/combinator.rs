//! Decoders built from other decoders.
//!
//! Every combinator here is transparent on failure: when an inner decoder
//! rejects a sub-value, the caller sees exactly the error that inner decoder
//! would have produced for that sub-value on its own. Errors are never
//! wrapped, so a message always describes the innermost mismatch.

use serde_json::Value;

use crate::decoder::Decoder;
use crate::error::{DecodeError, Expected};

/// See [`nullable`].
#[derive(Debug, Clone, Copy)]
pub struct Nullable<D> {
    inner: D,
}

/// See [`array`].
#[derive(Debug, Clone, Copy)]
pub struct Array<D> {
    element: D,
}

/// See [`Decoder::map`].
#[derive(Clone, Copy)]
pub struct Map<D, F> {
    inner: D,
    f: F,
}

/// Accepts `null` as `None` and otherwise defers to `inner`.
///
/// `inner` is never asked to decode `null`; for any other value the result is
/// exactly `inner`'s result.
pub fn nullable<D: Decoder>(inner: D) -> Nullable<D> {
    Nullable { inner }
}

/// Decodes a JSON array element by element, in order.
///
/// A non-array input fails with `an array` before `element` is consulted.
/// The first element that fails stops decoding and its error is returned
/// as-is; later elements are not inspected.
pub fn array<D: Decoder>(element: D) -> Array<D> {
    Array { element }
}

impl<D> Nullable<D> {
    pub fn inner(&self) -> &D {
        &self.inner
    }
}

impl<D> Array<D> {
    pub fn element(&self) -> &D {
        &self.element
    }
}

impl<D, F> Map<D, F> {
    pub(crate) fn new(inner: D, f: F) -> Self {
        Map { inner, f }
    }
}

impl<D: std::fmt::Debug, F> std::fmt::Debug for Map<D, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map").field("inner", &self.inner).finish()
    }
}

impl<D: Decoder> Decoder for Nullable<D> {
    type Output = Option<D::Output>;

    fn decode(&self, value: &Value) -> Result<Self::Output, DecodeError> {
        match value {
            Value::Null => Ok(None),
            other => self.inner.decode(other).map(Some),
        }
    }
}

impl<D: Decoder> Decoder for Array<D> {
    type Output = Vec<D::Output>;

    fn decode(&self, value: &Value) -> Result<Self::Output, DecodeError> {
        let items = value
            .as_array()
            .ok_or_else(|| DecodeError::new(value.clone(), Expected::Array))?;

        let mut out = Vec::with_capacity(items.len());
        for item in items {
            out.push(self.element.decode(item)?);
        }
        Ok(out)
    }
}

impl<D, F, B> Decoder for Map<D, F>
where
    D: Decoder,
    F: Fn(D::Output) -> B,
{
    type Output = B;

    fn decode(&self, value: &Value) -> Result<B, DecodeError> {
        self.inner.decode(value).map(&self.f)
    }
}
