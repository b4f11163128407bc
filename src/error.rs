//! Error types for the EPG client library.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, EpgError>;

/// Error type for all EPG API operations
#[derive(Error, Debug)]
pub enum EpgError {
    /// Network or HTTP transport errors
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// XML decoding errors, including timestamps that could not be normalized
    #[error("XML decoding error: {0}")]
    Decode(#[from] quick_xml::DeError),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    UrlParsing(#[from] url::ParseError),

    /// The EPG API answered 404 for the requested path
    #[error("EPG resource not found: {path}")]
    NotFound { path: String },

    /// The EPG API answered with an unexpected status code
    #[error("Unknown error: unexpected HTTP status {status}")]
    UnknownError { status: u16 },

    /// An upstream timestamp could not be parsed
    #[error("Cannot parse time {value:?}: {reason}")]
    TimeParse { value: String, reason: String },

    /// Invalid input provided
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl EpgError {
    /// Create a new not found error
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a new time parse error
    pub fn time_parse(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::TimeParse {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a new invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Check if the requested EPG resource does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, EpgError::NotFound { .. })
    }

    /// HTTP status code carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            EpgError::NotFound { .. } => Some(404),
            EpgError::UnknownError { status } => Some(*status),
            EpgError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
