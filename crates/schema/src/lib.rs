//! keel-schema: decoders assembled from runtime schema descriptions.
//!
//! When the expected shape is only known at runtime (loaded from a config
//! file, received over the wire), describe it as JSON, parse it with
//! [`Schema::from_json`], and [`compile`](Schema::compile) it into a
//! [`SchemaDecoder`]. The compiled decoder is built from the same
//! `keel-core` primitives and combinators, behind dynamic dispatch.

pub mod compile;
pub mod error;
pub mod schema;

pub use compile::SchemaDecoder;
pub use error::SchemaError;
pub use schema::Schema;
