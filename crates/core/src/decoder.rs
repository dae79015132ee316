//! The [`Decoder`] capability and its blanket impls.

use std::rc::Rc;
use std::sync::Arc;

use serde_json::Value;

use crate::combinator::Map;
use crate::error::DecodeError;

/// Validates an untyped JSON value and produces a typed one.
///
/// Implementations must be pure: no mutation of the input, no I/O, and no
/// failure other than [`DecodeError`]. A combinator that calls an inner
/// decoder returns the inner error unchanged unless it explicitly owns that
/// case (see [`nullable`](crate::nullable) and [`array`](crate::array)).
pub trait Decoder {
    type Output;

    fn decode(&self, value: &Value) -> Result<Self::Output, DecodeError>;

    /// Transforms the decoded output. Failures pass through untouched.
    fn map<F, B>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> B,
    {
        Map::new(self, f)
    }

    /// Erases the concrete decoder type, for decoders assembled at runtime.
    fn boxed<'a>(self) -> BoxDecoder<'a, Self::Output>
    where
        Self: Sized + Send + Sync + 'a,
    {
        Box::new(self)
    }
}

/// A type-erased decoder that can be shared across threads.
pub type BoxDecoder<'a, T> = Box<dyn Decoder<Output = T> + Send + Sync + 'a>;

impl<D: Decoder + ?Sized> Decoder for &D {
    type Output = D::Output;

    fn decode(&self, value: &Value) -> Result<Self::Output, DecodeError> {
        (**self).decode(value)
    }
}

impl<D: Decoder + ?Sized> Decoder for Box<D> {
    type Output = D::Output;

    fn decode(&self, value: &Value) -> Result<Self::Output, DecodeError> {
        (**self).decode(value)
    }
}

impl<D: Decoder + ?Sized> Decoder for Rc<D> {
    type Output = D::Output;

    fn decode(&self, value: &Value) -> Result<Self::Output, DecodeError> {
        (**self).decode(value)
    }
}

impl<D: Decoder + ?Sized> Decoder for Arc<D> {
    type Output = D::Output;

    fn decode(&self, value: &Value) -> Result<Self::Output, DecodeError> {
        (**self).decode(value)
    }
}
