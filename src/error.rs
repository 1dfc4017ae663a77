//! Front-end Error Types
//!
//! The resolver never fails for a single token; everything here stops the
//! whole run.

use derive_more::{Display, Error};

pub type Error = exn::Exn<ErrorKind>;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Fix the configuration file or environment and run again.
    #[display("configuration could not be loaded")]
    Config,
    /// The HTTP client could not be constructed from the configuration.
    #[display("HTTP client could not be built")]
    Client,
    /// The requested identifier range is unusable.
    #[display("invalid identifier range: {_0}")]
    InvalidRange(#[error(not(source))] String),
    /// The output file could not be created or written.
    #[display("could not write output")]
    Output,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Output)
    }
}
