//! HTTP capability used by the [`Retriever`](crate::Retriever).
//!
//! The retriever never talks to the network directly; it is handed an
//! [`HttpClient`] instead. [`ReqwestClient`] is the real implementation, and
//! `MockClient` (behind the `mock` feature) serves canned responses in tests.

mod blocking;
#[cfg(any(test, feature = "mock"))]
mod mock;

pub use self::blocking::{ClientOptions, ReqwestClient};
#[cfg(any(test, feature = "mock"))]
pub use self::mock::MockClient;
use crate::error::Result;
use std::sync::Arc;

/// A received HTTP response, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}
impl Response {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs blocking HTTP GET requests.
///
/// Implementations return `Ok` for every response the server sends,
/// including 4xx and 5xx ones; only transport failures are errors. Deciding
/// what a status means is up to the caller.
pub trait HttpClient: Send + Sync {
    /// Fetch `url`, returning the status and the decoded body.
    fn get(&self, url: &str) -> Result<Response>;
}
impl<T: HttpClient + ?Sized> HttpClient for &T {
    fn get(&self, url: &str) -> Result<Response> {
        (**self).get(url)
    }
}
impl<T: HttpClient + ?Sized> HttpClient for Arc<T> {
    fn get(&self, url: &str) -> Result<Response> {
        (**self).get(url)
    }
}
impl<T: HttpClient + ?Sized> HttpClient for Box<T> {
    fn get(&self, url: &str) -> Result<Response> {
        (**self).get(url)
    }
}
