//! Error types for catalog resolution.

use thiserror::Error;

/// Errors that can occur while resolving an identifier against a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The string matched neither a symbolic key nor a code value.
    #[error("unknown {catalog} identifier: '{input}'")]
    UnknownIdentifier {
        /// Name of the catalog that was searched (e.g. "ALSI facility").
        catalog: &'static str,
        /// The rejected input.
        input: String,
    },
}

impl LookupError {
    /// Returns the rejected input string.
    pub fn input(&self) -> &str {
        match self {
            Self::UnknownIdentifier { input, .. } => input,
        }
    }

    /// Returns the name of the catalog that rejected the input.
    pub fn catalog(&self) -> &'static str {
        match self {
            Self::UnknownIdentifier { catalog, .. } => catalog,
        }
    }
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, LookupError>;
