//! Error types for the raw client.

use gie_catalog::LookupError;
use thiserror::Error;

/// Errors that can occur while building or sending a query.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GieError {
    /// No API key was configured.
    #[error("API key is missing")]
    MissingApiKey,

    /// An identifier did not match any catalog entry.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// A query argument was rejected before any request was made.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The endpoint suffix cannot be joined onto the API root.
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        /// The rejected endpoint suffix.
        endpoint: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Transport failure (connection, TLS, body read).
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    #[error("API returned HTTP {status} for {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL, without credentials.
        url: String,
    },

    /// The API answered 200 OK with an access-denied body.
    #[error("access denied, check that the API key is valid")]
    AccessDenied,

    /// The response body was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Client settings could not be loaded or are invalid.
    #[error("configuration error: {0}")]
    Config(String),
}

impl GieError {
    /// Returns a user-friendly error message suitable for CLI output.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::MissingApiKey => "No API key configured. Register at agsi.gie.eu to get one.",
            Self::Lookup(_) => "Unknown country, company or facility.",
            Self::InvalidArgument(_) | Self::InvalidEndpoint { .. } => {
                "The query arguments are invalid."
            }
            Self::Network(_) => "Could not connect to the GIE API. Please check your connection.",
            Self::Status { status, .. } if *status == 401 || *status == 403 => {
                "The GIE API rejected the API key."
            }
            Self::Status { .. } => "The GIE API returned an error.",
            Self::AccessDenied => "The GIE API rejected the API key.",
            Self::JsonParse(_) => "The GIE API returned an unexpected response.",
            Self::Config(_) => "The client configuration is invalid.",
        }
    }

    /// Returns whether the error points at a bad or missing credential.
    #[must_use]
    pub fn is_credential_error(&self) -> bool {
        matches!(
            self,
            Self::MissingApiKey | Self::AccessDenied | Self::Status { status: 401 | 403, .. }
        )
    }
}

impl From<reqwest::Error> for GieError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Status {
                status: status.as_u16(),
                url: err.url().map(ToString::to_string).unwrap_or_default(),
            },
            None => Self::Network(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for GieError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

impl From<toml::de::Error> for GieError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, GieError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert!(GieError::MissingApiKey.user_message().contains("API key"));
        let err = GieError::Status {
            status: 403,
            url: "https://agsi.gie.eu/api/".to_string(),
        };
        assert!(err.user_message().contains("rejected"));
        let err = GieError::Status {
            status: 500,
            url: "https://agsi.gie.eu/api/".to_string(),
        };
        assert!(err.user_message().contains("returned an error"));
    }

    #[test]
    fn test_credential_errors() {
        assert!(GieError::MissingApiKey.is_credential_error());
        assert!(GieError::AccessDenied.is_credential_error());
        assert!(
            GieError::Status {
                status: 401,
                url: String::new()
            }
            .is_credential_error()
        );
        assert!(!GieError::Network("timeout".to_string()).is_credential_error());
    }

    #[test]
    fn test_lookup_error_is_transparent() {
        let err: GieError = LookupError::UnknownIdentifier {
            catalog: "AGSI country",
            input: "XX".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "unknown AGSI country identifier: 'XX'");
    }
}
