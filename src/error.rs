//! Error types for the benchmark.

use thiserror::Error;

/// Errors that can occur while selecting a kernel or parsing arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Loop-order tag outside `ikj`, `ijk`, `kij`.
    #[error("unknown loop order: {0}")]
    UnknownOrder(String),

    /// Flag given without its value.
    #[error("missing value for {flag}")]
    MissingValue { flag: String },

    /// Flag value that doesn't parse.
    #[error("invalid value for {flag}: {value}")]
    InvalidValue { flag: String, value: String },

    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

/// Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
