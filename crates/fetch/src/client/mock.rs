//! In-memory HTTP client for testing.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use super::{HttpClient, Response};
use crate::error::{ErrorKind, Result};

/// In-memory [`HttpClient`] for testing.
///
/// Serves canned responses keyed by URL and records every requested URL.
/// Requests for unknown URLs fail with [`ErrorKind::Network`], as if the
/// host could not be reached.
#[derive(Debug, Default)]
pub struct MockClient {
    responses: HashMap<String, Response>,
    requests: Mutex<Vec<String>>,
}
impl MockClient {
    pub fn with_responses<U, B>(responses: impl IntoIterator<Item = (U, u16, B)>) -> Self
    where
        U: Into<String>,
        B: Into<String>,
    {
        Self {
            responses: responses
                .into_iter()
                .map(|(url, status, body)| (url.into(), Response::new(status, body)))
                .collect(),
            requests: Mutex::default(),
        }
    }

    /// Every URL requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl HttpClient for MockClient {
    fn get(&self, url: &str) -> Result<Response> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).push(url.to_string());
        self.responses.get(url).cloned().ok_or_else(|| exn::Exn::from(ErrorKind::Network(url.to_string())))
    }
}
