//! Error types for the Auto Scaling API client.
//!
//! Every operation reports failures through [`Error`]. Request-building
//! failures ([`Error::Validation`], [`Error::Serialization`]) happen before
//! any network traffic; the rest come from the dispatch or decode stages.

use thiserror::Error;

/// A specialized `Result` type for Auto Scaling operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Auto Scaling API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A required request field was missing or empty
    #[error("Missing required field: {field}")]
    Validation {
        /// External (wire) name of the offending field
        field: &'static str,
    },

    /// A request value could not be encoded as JSON or as a query string
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Network or connection failure reported by the transport
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response status was not in the operation's allowlist
    #[error("Unexpected status {status}; expected one of {expected:?}")]
    UnexpectedStatus {
        /// HTTP status code received
        status: u16,
        /// Status codes the operation accepts
        expected: Vec<u16>,
        /// Raw response body, for debugging
        body: String,
    },

    /// The response body did not have the expected shape
    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::UnexpectedStatus { status, .. } => Some(*status),
            Error::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad request, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::UnexpectedStatus { status, .. } => (400..500).contains(status),
            Error::Validation { .. } | Error::Serialization(_) | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::UnexpectedStatus { status, .. } if *status >= 500)
    }

    /// Returns `true` if the remote resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub(crate) fn unexpected_status(status: u16, expected: &[u16], body: &[u8]) -> Self {
        Error::UnexpectedStatus {
            status,
            expected: expected.to_vec(),
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }
}

impl From<serde_urlencoded::ser::Error> for Error {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
