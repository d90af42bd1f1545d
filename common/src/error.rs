//! Errors surfaced by the serializer.

use thiserror::Error;

/// Why an import was rejected. The store is never modified when this is returned.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("invalid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("schema has no `fields` array")]
    MissingFields,

    #[error("field #{index} is not a valid field description: {source}")]
    InvalidField {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("could not serialize schema: {0}")]
    Serialize(#[from] serde_json::Error),
}
