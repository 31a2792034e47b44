//! Error types for Pomade
//!
//! Uses `thiserror` for library errors. Validation and auth outcomes are NOT
//! errors - they are soft failures carried by [`crate::domain::value_objects::AuthResult`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Pomade operations
pub type PomadeResult<T> = Result<T, PomadeError>;

/// Main error type for Pomade operations
#[derive(Error, Debug)]
pub enum PomadeError {
    /// A referenced entity could not be resolved during booking creation
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// The data store file exists but cannot be parsed
    #[error("data store corrupted at {path}: {message}")]
    StoreCorrupted { path: PathBuf, message: String },

    /// Request envelope names an operation outside the wire contract
    #[error("unknown operation '{name}'")]
    UnknownOperation { name: String },

    /// Request envelope arguments do not match the operation's shape
    #[error("invalid arguments for '{operation}': {message}")]
    InvalidArguments { operation: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file parsing error
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

impl PomadeError {
    /// Construct a NotFound error for a named entity
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        PomadeError::NotFound {
            entity,
            id: id.into(),
        }
    }
}
