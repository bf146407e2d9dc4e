//! Error types for the feature publisher

use thiserror::Error;

/// Errors raised by the feature publisher
#[derive(Debug, Error)]
pub enum CharmError {
    #[error("Relation store error: {0}")]
    Store(#[from] StoreError),

    #[error("Attribute encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Relation data missing key: {0}")]
    MissingKey(String),
}

/// Errors from the framework-backed stores
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{tool} exited with status {code:?}: {stderr}")]
    ToolFailed {
        tool: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {tool} output: {source}")]
    Decode {
        tool: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid relation id: {0:?}")]
    InvalidRelationId(String),

    #[error("Write rejected: {0}")]
    WriteRejected(String),
}
