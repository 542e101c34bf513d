use thiserror::Error;

/// Errors raised while building a class graph from a type description.
///
/// Unresolvable field or base types are not errors: they surface as `None`
/// from the lookup functions.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid type description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Type '{0}' is described more than once")]
    DuplicateType(String),

    #[error("Inheritance cycle detected at type '{0}'")]
    InheritanceCycle(String),

    #[error("Type '{0}' not found in description")]
    UnknownType(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
