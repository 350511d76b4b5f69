use openbis_types::IdError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WireError {
    #[error("Expected a JSON object, got: {0}")]
    NotAnObject(String),

    #[error("Missing type tag '{0}'")]
    MissingType(String),

    #[error("Unknown type tag: {0}")]
    UnknownType(String),

    #[error("Expected type {expected}, found {found}")]
    UnexpectedType { expected: String, found: String },

    #[error("Missing field '{field}' in {kind}")]
    MissingField { kind: String, field: String },

    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    #[error("Unresolved object reference: {0}")]
    UnresolvedReference(i64),

    #[error(transparent)]
    Id(#[from] IdError),
}

impl WireError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        WireError::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}
