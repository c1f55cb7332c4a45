//! Fetch Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use hallen_extract::{Error as ExtractError, ErrorKind as ExtractErrorKind};

/// A fetch error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for fetch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The item identifier cannot be placed into a detail page URL.
    #[display("invalid item id: {_0:?}")]
    InvalidId(#[error(not(source))] String),
    /// The HTTP client could not be constructed.
    #[display("HTTP client error: {_0}")]
    Client(#[error(not(source))] String),
    /// The request never produced a response (DNS, refused connection,
    /// timeout, broken body, etc.)
    #[display("network error requesting {_0}")]
    Network(#[error(not(source))] String),
    /// The server answered with a non-2xx status.
    #[display("HTTP {status} from {url}")]
    HttpStatus {
        /// Response status code.
        status: u16,
        /// Requested URL.
        url: String,
    },
    /// The page was fetched but could not be parsed.
    #[display("extraction error: {_0}")]
    Extract(ExtractErrorKind),
}
impl ErrorKind {
    /// Convert an extraction error into a fetch error, preserving the
    /// extract crate's `Exn` frame (error tree) as a child in its own
    /// error tree.
    #[track_caller]
    pub fn extract(err: ExtractError) -> Error {
        let inner = (*err).clone();
        err.raise(ErrorKind::Extract(inner))
    }
}

impl ErrorKind {
    /// Returns `true` for transport failures and non-2xx responses.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::HttpStatus { .. })
    }

    /// Returns `true` if the page was fetched but is not a usable detail page.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Extract(kind) if kind.is_parse())
    }

    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::HttpStatus { status, .. } => *status == 429 || (500..600).contains(status),
            Self::Extract(kind) => kind.is_retryable(),
            Self::InvalidId(_) | Self::Client(_) => false,
        }
    }
}
