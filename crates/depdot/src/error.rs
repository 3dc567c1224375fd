//! Error types for depdot operations.
//!
//! All failures are terminal: parsing, root discovery, and path extraction
//! errors abort before any output is written, and a write failure aborts
//! mid-stream naming the statement that was in flight.

use std::io;
use thiserror::Error;

/// A specialized Result type for depdot operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for depdot operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading the input.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A non-blank input line did not split into exactly two tokens.
    #[error("expected 2 words in line, but got {count}: {line}")]
    Format {
        /// The offending line, trimmed.
        line: String,
        /// How many whitespace-separated tokens the line actually had.
        count: usize,
    },

    /// The input contained no usable edge lines.
    #[error("empty input")]
    EmptyInput,

    /// No node satisfied the root predicate.
    #[error("no root found")]
    NoRoot,

    /// No simple path from the root reached a matching destination.
    #[error("no path found")]
    NoPath,

    /// Writing an output statement failed.
    #[error("failed to write {statement:?}")]
    Write {
        /// The statement that was being written when the failure occurred.
        statement: String,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },
}
