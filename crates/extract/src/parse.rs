//! Detail page parsing.

use exn::OptionExt;
use scraper::{ElementRef, Html, Selector};
use tracing::instrument;

use crate::consts;
use crate::error::{ErrorKind, Result};
use crate::models::{Availabilities, Availability, Count, Item};

/// Parses a single catalog detail page into an [`Item`].
///
/// Parsing is all-or-nothing: if any availability entry on the page is
/// incomplete, no [`Item`] is produced.
#[derive(Debug)]
pub struct PageParser {
    document: Html,
}
impl PageParser {
    pub fn from_document(document: Html) -> Self {
        Self { document }
    }

    pub fn from_html(html: &str) -> Self {
        Self::from_document(Html::parse_document(html))
    }

    /// Extracts the item, tagging it with the `url` the page was fetched from.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The title element is missing
    /// - Any availability entry lacks its location, count, room or shelf mark
    /// - Any count is not of the form `<available>/<total>`
    #[instrument(skip(self), fields(locations))]
    pub fn item(&self, url: &str) -> Result<Item> {
        let title = self.title()?;
        let availabilities = self.availabilities()?;
        tracing::Span::current().record("locations", availabilities.len());
        Ok(Item::new(url, title, availabilities))
    }

    fn title(&self) -> Result<String> {
        self.document
            .select(&consts::TITLE_SELECTOR)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .ok_or_raise(|| ErrorKind::MissingField("title"))
    }

    fn availabilities(&self) -> Result<Availabilities> {
        self.document.select(&consts::AVAILABILITY_SELECTOR).map(availability).collect()
    }
}
impl From<Html> for PageParser {
    fn from(document: Html) -> Self {
        Self::from_document(document)
    }
}
impl From<&str> for PageParser {
    fn from(html: &str) -> Self {
        Self::from_html(html)
    }
}

/// Extracts one availability entry from its `.medium-availability-item` element.
fn availability(element: ElementRef<'_>) -> Result<Availability> {
    let location = text(element, &consts::LOCATION_SELECTOR, "location")?;
    let count: Count = text(element, &consts::COUNT_SELECTOR, "count")?.parse()?;
    let room = text(element, &consts::ROOM_SELECTOR, "room")?;
    let shelf = text(element, &consts::SHELF_SELECTOR, "shelf")?;
    tracing::trace!(%location, %count, %room, %shelf, "Parsed availability");
    Ok(Availability::from_count(location, count, room, shelf))
}

/// Trimmed text of the first descendant of `element` matching `selector`.
fn text(element: ElementRef<'_>, selector: &Selector, field: &'static str) -> Result<String> {
    element
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .ok_or_raise(|| ErrorKind::MissingField(field))
}
