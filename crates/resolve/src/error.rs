//! Resolution Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction. These only ever cross the
//! [`Transport`](crate::Transport) seam; the resolver turns them into
//! outcomes and placeholders instead of returning them.

use derive_more::{Display, Error};

/// A transport error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for transport operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The HTTP client could not be constructed (TLS backend, bad user agent).
    #[display("could not build HTTP client")]
    Client,
    /// The URL could not be turned into a request.
    #[display("invalid URL: {_0}")]
    InvalidUrl(#[error(not(source))] String),
    /// No response within the configured timeout.
    #[display("request timed out: {_0}")]
    Timeout(#[error(not(source))] String),
    /// Connection-level failure (DNS, refused, reset, TLS).
    #[display("network error: {_0}")]
    Network(#[error(not(source))] String),
    /// A response arrived but its body could not be read as text.
    #[display("could not read response body: {_0}")]
    Body(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Network(_) | Self::Body(_))
    }
}
