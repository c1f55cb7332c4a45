//! Availability extraction for Bücherhallen Hamburg catalog detail pages.
//!
//! ```rust
//! let html = r#"
//!     <h1 class="medium-detail-title">Sample Book</h1>
//!     <div class="medium-availability-item">
//!         <span class="medium-availability-item-title-location">Zentralbibliothek</span>
//!         <span class="medium-availability-item-title-count">3/5</span>
//!         <span class="item-data-location-path">Hall A</span>
//!         <span class="item-data-shelfmark">B12</span>
//!     </div>
//! "#;
//! let item = hallen_extract::parse(html, "https://example.com/item.html").unwrap();
//! assert!(item.is_available("Zentralbibliothek").unwrap());
//! ```

mod consts;
pub mod error;
pub mod models;
mod parse;

use tracing::instrument;

pub use crate::consts::DEFAULT_LOCATION;
use crate::error::Result;
pub use crate::error::{Error, ErrorKind};
pub use crate::models::{Availabilities, Availability, Count, Item};
pub use crate::parse::PageParser;

/// Easy, top-level entrypoint for parsing an [`Item`] from the HTML of its
/// detail page. See [`PageParser`] for more details.
#[instrument(skip(html), fields(html_size = html.len()))]
pub fn parse(html: &str, url: &str) -> Result<Item> {
    PageParser::from_html(html).item(url)
}
