//! Domain error types

use thiserror::Error;

/// Error when a value cannot be encoded as clipboard text
#[derive(Debug, Clone, Error)]
#[error("Failed to copy value to clipboard. Unknown type. ({reason})")]
pub struct SerializationError {
    pub reason: String,
}

impl From<serde_json::Error> for SerializationError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            reason: err.to_string(),
        }
    }
}

/// Error raised by a document or permission platform call
#[derive(Debug, Clone, Error)]
pub enum PlatformError {
    #[error("Document unavailable: {0}")]
    DocumentUnavailable(String),

    #[error("Selection failed: {0}")]
    SelectionFailed(String),

    #[error("Copy command failed: {0}")]
    CopyCommandFailed(String),

    #[error("Permission query failed: {0}")]
    PermissionQueryFailed(String),
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    ParseError(String),

    #[error("Failed to serialize config: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },
}
