//! Error types for the redlist library.
//!
//! This module provides a unified error type with explicit variants for
//! transport, authentication, protocol, input validation and configuration
//! errors. [`Error::kind`] folds them into the three failure kinds callers
//! report on.

use std::fmt;
use thiserror::Error;

/// The unified error type for redlist operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors (invalid credentials, rejected client).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Protocol errors (error statuses, unexpected responses).
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Input validation errors (invalid forum name, endpoint URL).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Missing or unusable configuration values.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// How a failure should be reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The account credentials or the client registration were rejected.
    Authentication,
    /// The client could not build a request or understand a response.
    Library,
    /// Anything else, typically the network.
    Other,
}

impl Error {
    /// Classify this error into one of the three reported failure kinds.
    pub fn kind(&self) -> FailureKind {
        match self {
            Error::Auth(_) => FailureKind::Authentication,
            Error::Protocol(_) | Error::InvalidInput(_) | Error::Config(_) => FailureKind::Library,
            Error::Transport(_) => FailureKind::Other,
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
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
        // A body that is not the expected JSON is the server's fault, not the network's.
        if err.is_decode() {
            Error::Protocol(ProtocolError::new(
                err.status().map_or(200, |s| s.as_u16()),
                None,
                Some(format!("unexpected response body: {err}")),
            ))
        } else {
            Error::Transport(TransportError::from(err))
        }
    }
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The password grant was refused, e.g. `invalid_grant`.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    /// The client id or secret was rejected by the token endpoint.
    #[error("client rejected (HTTP {status})")]
    ClientRejected { status: u16 },

    /// The API refused the access token.
    #[error("access token rejected")]
    TokenRejected,
}

/// Protocol-level errors from API responses.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Error code from the response body (if present).
    pub error: Option<String>,
    /// Error message from the server.
    pub message: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref error) = self.error {
            write!(f, " [{}]", error)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, error: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            error,
            message,
        }
    }

    /// Whether the API refused the bearer token.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid forum (subreddit) name.
    #[error("invalid forum name '{value}': {reason}")]
    ForumName { value: String, reason: String },

    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// User agent that cannot be sent as a header.
    #[error("invalid user agent '{value}': {reason}")]
    UserAgent { value: String, reason: String },
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment value was not set.
    #[error("required attribute '{0}' is not set")]
    Missing(&'static str),
}
