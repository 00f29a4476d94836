//! Error types for the authvault library.
//!
//! A single [`Error`] enum covers every failure an [`AuthClient`] call can
//! surface: transport failures, authentication state, application errors
//! reported by the Auth API, malformed response bodies and bad input.
//!
//! [`AuthClient`]: crate::AuthClient

use std::fmt;
use thiserror::Error;

/// The unified error type for authvault operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, HTTP layer).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication state errors (not logged in, session expired).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// A non-success response from the Auth API, surfaced verbatim.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// A success response whose body did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Input validation errors.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout {
                message: err.to_string(),
            }
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// Authentication state errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No tokens are held by the session.
    #[error("not logged in")]
    NotLoggedIn,

    /// The access token was rejected and could not be refreshed.
    #[error("session expired")]
    SessionExpired,
}

/// An application error reported by the Auth API.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// The `message` field of the error body, if present.
    pub message: Option<String>,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Invalid endpoint URL passed to an authorized request.
    #[error("invalid endpoint '{value}': {reason}")]
    Endpoint { value: String, reason: String },

    /// A required field was empty.
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
}
