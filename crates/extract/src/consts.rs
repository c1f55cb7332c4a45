use scraper::Selector;
use std::sync::LazyLock;

macro_rules! selector {
    ($name:ident, $css:expr) => {
        pub(crate) static $name: LazyLock<Selector> = LazyLock::new(|| Selector::parse($css).unwrap());
    };
}

/// Branch that the preferred room falls back to when present.
pub const DEFAULT_LOCATION: &str = "Zentralbibliothek";

selector!(TITLE_SELECTOR, ".medium-detail-title");
selector!(AVAILABILITY_SELECTOR, ".medium-availability-item");
// Relative to a single availability item.
selector!(LOCATION_SELECTOR, ".medium-availability-item-title-location");
selector!(COUNT_SELECTOR, ".medium-availability-item-title-count");
selector!(ROOM_SELECTOR, ".item-data-location-path");
selector!(SHELF_SELECTOR, ".item-data-shelfmark");
