//! Extraction Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// An extraction error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required element could not be found in the document.
    #[display("missing required field: {_0}")]
    MissingField(#[error(not(source))] &'static str),
    /// A field was found but could not be parsed.
    #[display("failed to parse field '{field}', found value: {value}")]
    ParseError {
        /// The field that failed to parse.
        field: &'static str,
        /// The offending text, as found in the document.
        value: String,
    },
    /// Lookup of a location that the item has no availability entry for.
    #[display("location not found: {_0}")]
    NotFound(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if the document itself could not be understood.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::MissingField(_) | Self::ParseError { .. })
    }

    /// Returns `true` if a location lookup failed.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // The HTML is either valid or it's not, and a missing location stays
        // missing until the page is fetched again.
        false
    }
}
