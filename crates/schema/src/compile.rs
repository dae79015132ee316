//! Compiling a [`Schema`] into a type-erased decoder.
//!
//! The compiled tree is assembled from the `keel-core` primitives and
//! combinators, so a runtime schema accepts and rejects exactly what the
//! equivalent statically-typed decoder would, with identical errors.

use keel_core::{
    array, boolean, literal, nullable, number, string, unknown, BoxDecoder, DecodeError, Decoder,
};
use serde_json::Value;

use crate::schema::Schema;

/// A decoder built from a [`Schema`]. Successful output is re-expressed as
/// JSON: `Nullable` yields `null` for absence and `Array` yields the decoded
/// elements in order.
pub struct SchemaDecoder {
    schema: Schema,
    decoder: BoxDecoder<'static, Value>,
}

impl SchemaDecoder {
    pub fn new(schema: &Schema) -> Self {
        SchemaDecoder {
            schema: schema.clone(),
            decoder: compile(schema),
        }
    }

    /// The schema this decoder was compiled from.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

impl Decoder for SchemaDecoder {
    type Output = Value;

    fn decode(&self, value: &Value) -> Result<Value, DecodeError> {
        self.decoder.decode(value)
    }
}

impl std::fmt::Debug for SchemaDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaDecoder")
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

impl Schema {
    /// Compile this schema into a reusable decoder.
    pub fn compile(&self) -> SchemaDecoder {
        SchemaDecoder::new(self)
    }
}

fn compile(schema: &Schema) -> BoxDecoder<'static, Value> {
    match schema {
        Schema::Unknown => unknown().boxed(),
        Schema::String => string().map(Value::String).boxed(),
        Schema::Number => number().map(Value::Number).boxed(),
        Schema::Boolean => boolean().map(Value::Bool).boxed(),
        Schema::Literal(members) => literal(members.clone()).map(Value::from).boxed(),
        Schema::Nullable(inner) => nullable(compile(inner))
            .map(|v| v.unwrap_or(Value::Null))
            .boxed(),
        Schema::Array(element) => array(compile(element)).map(Value::Array).boxed(),
    }
}
