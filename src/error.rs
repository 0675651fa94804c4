//! Error types for the BCA API client.
//!
//! Every operation in this crate fails with the same closed [`Error`] enum,
//! so callers can branch on the cause instead of matching message text.

use serde_json::Value;
use thiserror::Error;

/// Message carried by [`Error::Transport`].
pub const TRANSPORT_ERROR_MESSAGE: &str = "Something wrong with network connection or server";

/// Message carried by [`Error::Validation`] when too many accounts are requested.
pub const MAX_ACCOUNTS_MESSAGE: &str = "Maximum account number is 20";

/// A specialized `Result` type for BCA operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for all BCA API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Input was rejected locally, before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// The bank answered with an error envelope.
    ///
    /// The `Display` form is exactly the bank's English message.
    #[error("{message}")]
    Remote {
        /// HTTP status code
        status: u16,
        /// Bank error code (e.g. `ESB-14-001`)
        code: Option<String>,
        /// English error message
        message: String,
        /// Indonesian error message
        indonesian: Option<String>,
        /// Raw response body
        body: Value,
    },

    /// No usable response: connection failure, timeout, or an error
    /// status without a recognisable error envelope.
    #[error("Something wrong with network connection or server")]
    Transport {
        /// HTTP status, when a response arrived at all
        status: Option<u16>,
        /// Underlying transport error, if any
        #[source]
        source: Option<reqwest::Error>,
    },

    /// A successful response body could not be decoded.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Client configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if the input was rejected before a request was made.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Returns `true` if the bank returned an error envelope.
    pub fn is_remote(&self) -> bool {
        matches!(self, Error::Remote { .. })
    }

    /// Returns `true` if no structured response was available.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. })
    }

    /// The bank's English message, for remote errors.
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            Error::Remote { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Build an error from a non-2xx response body.
    ///
    /// Bodies shaped like `{"ErrorCode": .., "ErrorMessage": {"English": ..}}`
    /// become [`Error::Remote`]; anything else becomes [`Error::Transport`].
    pub(crate) fn from_api_response(status: u16, body: &[u8]) -> Self {
        let Ok(body) = serde_json::from_slice::<Value>(body) else {
            return Error::Transport {
                status: Some(status),
                source: None,
            };
        };

        let error_message = body.get("ErrorMessage");
        let Some(message) = error_message
            .and_then(|m| m.get("English"))
            .and_then(Value::as_str)
            .map(String::from)
        else {
            return Error::Transport {
                status: Some(status),
                source: None,
            };
        };

        let indonesian = error_message
            .and_then(|m| m.get("Indonesian"))
            .and_then(Value::as_str)
            .map(String::from);

        let code = body
            .get("ErrorCode")
            .and_then(Value::as_str)
            .map(String::from);

        Error::Remote {
            status,
            code,
            message,
            indonesian,
            body,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport {
            status: err.status().map(|s| s.as_u16()),
            source: Some(err),
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Config(format!("invalid base URL: {}", err))
    }
}
