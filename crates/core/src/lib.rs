//! keel-core: composable decoders for untyped JSON values.
//!
//! A [`Decoder`] takes a `serde_json::Value` produced by some external
//! deserializer and either returns a typed value or fails with a
//! [`DecodeError`] describing what was expected and what was received.
//!
//! # Building blocks
//!
//! - Primitives: [`unknown()`], [`string()`], [`number()`], [`boolean()`],
//!   [`literal()`]
//! - Combinators: [`nullable()`], [`array()`], [`Decoder::map`]
//! - Type erasure: [`Decoder::boxed`] and [`BoxDecoder`]
//!
//! Decoders hold no per-call state, so one instance can be reused and shared
//! between threads freely.
//!
//! ```
//! use keel_core::{array, nullable, string, Decoder};
//! use serde_json::json;
//!
//! let tags = array(nullable(string()));
//! assert_eq!(
//!     tags.decode(&json!(["a", null])).unwrap(),
//!     vec![Some("a".to_string()), None],
//! );
//!
//! let err = tags.decode(&json!(["a", 2])).unwrap_err();
//! assert_eq!(err.to_string(), "This is not a string: 2");
//! ```

pub mod combinator;
pub mod decoder;
pub mod error;
pub mod literal;
pub mod primitive;

// ── Convenience re-exports ───────────────────────────────────────────

pub use combinator::{array, nullable, Array, Map, Nullable};
pub use decoder::{BoxDecoder, Decoder};
pub use error::{DecodeError, Expected};
pub use literal::Literal;
pub use primitive::{
    boolean, literal, number, string, unknown, BooleanDecoder, LiteralDecoder, NumberDecoder,
    StringDecoder, UnknownDecoder,
};
