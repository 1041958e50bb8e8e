//! Error types for SWAPI Explorer.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use std::fmt;
use thiserror::Error;

/// The four ways a single `resolve` call can fail.
///
/// Every variant carries the endpoint that was requested so callers can
/// report or retry without keeping their own bookkeeping.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Deadline expired before the full response arrived
    #[error("request for '{endpoint}' timed out after {timeout_ms}ms")]
    Timeout { endpoint: String, timeout_ms: u64 },

    /// Upstream answered with a status code of 400 or above
    #[error("request for '{endpoint}' failed with HTTP status {status}")]
    HttpStatus { endpoint: String, status: u16 },

    /// Connection-level failure (DNS, refused, reset, TLS)
    #[error("transport error for '{endpoint}': {cause}")]
    Transport {
        endpoint: String,
        #[source]
        cause: reqwest::Error,
    },

    /// Body was received but is not valid JSON
    #[error("malformed JSON body for '{endpoint}': {cause}")]
    MalformedBody {
        endpoint: String,
        #[source]
        cause: serde_json::Error,
    },
}

/// Discriminant of a [`FetchError`], handy for matching and for metrics labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchErrorKind {
    Timeout,
    HttpStatus,
    Transport,
    MalformedBody,
}

impl FetchErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchErrorKind::Timeout => "timeout",
            FetchErrorKind::HttpStatus => "http_status",
            FetchErrorKind::Transport => "transport",
            FetchErrorKind::MalformedBody => "malformed_body",
        }
    }
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FetchError {
    /// The endpoint whose resolution failed.
    pub fn endpoint(&self) -> &str {
        match self {
            FetchError::Timeout { endpoint, .. }
            | FetchError::HttpStatus { endpoint, .. }
            | FetchError::Transport { endpoint, .. }
            | FetchError::MalformedBody { endpoint, .. } => endpoint,
        }
    }

    /// Which of the four failure kinds this is.
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Timeout { .. } => FetchErrorKind::Timeout,
            FetchError::HttpStatus { .. } => FetchErrorKind::HttpStatus,
            FetchError::Transport { .. } => FetchErrorKind::Transport,
            FetchError::MalformedBody { .. } => FetchErrorKind::MalformedBody,
        }
    }
}

/// Errors raised by the typed service layer on top of the fetcher.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The underlying fetch failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The JSON document was fetched but does not have the expected shape
    #[error("unexpected shape for '{endpoint}': {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// Caller supplied an id or page that can never be valid
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// The HTTP client could not be constructed (e.g. TLS backend setup)
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Convenience type alias for Results with FetchError
pub type FetchResult<T> = Result<T, FetchError>;

/// Convenience type alias for Results with ApiError
pub type ApiResult<T> = Result<T, ApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
