//! Retrieval of Bücherhallen Hamburg catalog detail pages.
//!
//! [`Retriever`] fetches the detail page of a catalog item through an
//! injected [`HttpClient`] and hands the HTML to
//! [`hallen_extract::PageParser`]. Nothing is cached or retried; every call
//! performs exactly one request.

pub mod client;
pub mod error;

use tracing::instrument;

pub use crate::client::{ClientOptions, HttpClient, ReqwestClient, Response};
use crate::error::{ErrorKind, Result};
pub use hallen_extract::{Availabilities, Availability, Item};

const DETAIL_URL_PREFIX: &str = "https://www.buecherhallen.de/suchergebnis-detail/medium/";
const DETAIL_URL_SUFFIX: &str = ".html";

/// URL of the catalog detail page for the item `id`.
///
/// ```rust
/// assert_eq!(
///     hallen_fetch::detail_url("T012345678").unwrap(),
///     "https://www.buecherhallen.de/suchergebnis-detail/medium/T012345678.html",
/// );
/// assert!(hallen_fetch::detail_url("../etc").is_err());
/// ```
pub fn detail_url(id: &str) -> Result<String> {
    if id.is_empty() || id.chars().any(|c| matches!(c, '/' | '?' | '#') || c.is_whitespace()) {
        exn::bail!(ErrorKind::InvalidId(id.to_string()));
    }
    Ok(format!("{DETAIL_URL_PREFIX}{id}{DETAIL_URL_SUFFIX}"))
}

/// Fetches and parses catalog items.
///
/// Holds nothing but its client, so a single retriever can be shared between
/// threads whenever the client can.
#[derive(Debug, Clone)]
pub struct Retriever<C> {
    client: C,
}
impl<C: HttpClient> Retriever<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Fetches the detail page of item `id` and parses it.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::InvalidId`] if `id` cannot be placed into a URL,
    /// - [`ErrorKind::Network`] or [`ErrorKind::HttpStatus`] if the page could
    ///   not be fetched (the HTML is never parsed in that case),
    /// - [`ErrorKind::Extract`] if the page is not a usable detail page.
    #[instrument(skip(self))]
    pub fn fetch_item_details(&self, id: &str) -> Result<Item> {
        let url = detail_url(id)?;
        let response = self.client.get(&url)?;
        if !response.is_success() {
            tracing::debug!(status = response.status, %url, "Detail page request failed");
            exn::bail!(ErrorKind::HttpStatus {
                status: response.status,
                url,
            });
        }
        hallen_extract::parse(&response.body, &url).map_err(ErrorKind::extract)
    }
}
impl Retriever<ReqwestClient> {
    /// Retriever using a [`ReqwestClient`] built from `options`.
    pub fn with_options(options: &ClientOptions) -> Result<Self> {
        Ok(Self::new(ReqwestClient::new(options)?))
    }
}
