//! Error types for the tabular layer.

use gie_client::GieError;
use thiserror::Error;

/// Errors that can occur while querying or tabulating a payload.
#[derive(Debug, Error)]
pub enum FrameError {
    /// The underlying query failed.
    #[error(transparent)]
    Client(#[from] GieError),

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {0}")]
    DataFrame(String),

    /// The payload has no tabular shape.
    #[error("unexpected payload: {0}")]
    UnexpectedPayload(String),
}

impl From<polars::prelude::PolarsError> for FrameError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame(err.to_string())
    }
}

/// Result type for tabular operations.
pub type Result<T> = std::result::Result<T, FrameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("gasInStorage".into());
        let err: FrameError = polars_err.into();
        assert!(matches!(err, FrameError::DataFrame(_)));
    }

    #[test]
    fn test_client_error_is_transparent() {
        let err: FrameError = GieError::AccessDenied.into();
        assert_eq!(err.to_string(), GieError::AccessDenied.to_string());
    }
}
