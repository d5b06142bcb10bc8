//! Error types for schema translation.
//!
//! Translation is permissive: unknown keywords and unrecognized types
//! degrade to `z.any()` instead of failing. The only failures are an
//! unparseable input document and nesting beyond the configured limit.

use thiserror::Error;

/// Result type alias for generation operations.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Error that occurred while generating Zod code from a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The input text is not a JSON document.
    #[error("Invalid JSON input at line {line}, column {column}: {message}")]
    Parse {
        message: String,
        line: usize,
        column: usize,
    },

    /// The schema nests deeper than the configured limit.
    #[error("Schema nesting exceeds limit of {limit} at '{path}'")]
    DepthLimitExceeded { path: String, limit: usize },
}

impl GenerateError {
    /// Create a depth limit error for the given path.
    pub fn depth_limit(path: impl Into<String>, limit: usize) -> Self {
        Self::DepthLimitExceeded {
            path: path.into(),
            limit,
        }
    }
}

impl From<serde_json::Error> for GenerateError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}
