/// Errors from reading a schema description.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The description (or a nested one) is not a JSON object.
    #[error("schema must be a JSON object, got {found}")]
    NotAnObject { found: String },

    /// The object has no string `base` field.
    #[error("schema missing 'base' field")]
    MissingBase,

    /// A base kind is missing one of its required fields.
    #[error("{base} schema missing required field '{field}'")]
    MissingField { base: String, field: String },

    /// A required field is present but has the wrong JSON kind.
    #[error("{base} schema field '{field}' must be {expected}, got {found}")]
    InvalidField {
        base: String,
        field: String,
        expected: String,
        found: String,
    },

    /// `base` names a kind this crate does not know.
    #[error("unknown schema base '{base}'")]
    UnknownBase { base: String },

    /// A literal set member is an array or object.
    #[error("literal value at index {index} is not a scalar")]
    InvalidLiteral { index: usize },
}
