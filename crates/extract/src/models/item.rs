use std::fmt::{Display, Formatter, Result as FmtResult};

use super::{Availabilities, Availability};
use crate::consts::DEFAULT_LOCATION;
use crate::error::Result;

/// A catalog item as shown on its detail page, at the time it was fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    url: String,
    title: String,
    availabilities: Availabilities,
}
impl Item {
    pub fn new(url: impl Into<String>, title: impl Into<String>, availabilities: Availabilities) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            availabilities,
        }
    }

    /// Detail page the item was extracted from.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn availabilities(&self) -> &Availabilities {
        &self.availabilities
    }

    /// See [`Availabilities::is_available`].
    pub fn is_available(&self, location: &str) -> Result<bool> {
        self.availabilities.is_available(location)
    }

    /// Locations that have at least one copy on the shelf.
    pub fn available_locations(&self) -> impl Iterator<Item = &str> + '_ {
        self.availabilities.items().filter(|(_, a)| a.is_available()).map(|(location, _)| location)
    }

    /// Room to show for this item, preferring the Zentralbibliothek.
    ///
    /// See [`preferred_room_for`](Self::preferred_room_for).
    pub fn preferred_room(&self) -> &str {
        self.preferred_room_for(DEFAULT_LOCATION)
    }

    /// Room to show for this item:
    /// - an empty string if the item is not tracked anywhere,
    /// - the room at `location` if the item is tracked there,
    /// - otherwise the room of the alphabetically first location.
    pub fn preferred_room_for(&self, location: &str) -> &str {
        self.availabilities
            .find(location)
            .or_else(|| self.availabilities.first())
            .map(Availability::room)
            .unwrap_or_default()
    }
}
impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} <{}>", self.title, self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const URL: &str = "https://www.buecherhallen.de/suchergebnis-detail/medium/T012345678.html";

    fn item(availabilities: impl IntoIterator<Item = Availability>) -> Item {
        Item::new(URL, "Sample Book", availabilities.into_iter().collect())
    }

    #[test]
    fn preferred_room_without_locations_is_empty() {
        assert_eq!(item(Vec::<Availability>::new()).preferred_room(), "");
    }

    #[rstest]
    #[case::alone(vec![])]
    #[case::before(vec![Availability::new("Altona", 2, 2, "Erwachsene", "A 1")])]
    #[case::after(vec![Availability::new("Wandsbek", 1, 4, "Kinder", "K 2")])]
    #[case::many(vec![
        Availability::new("Altona", 2, 2, "Erwachsene", "A 1"),
        Availability::new("Bergedorf", 0, 1, "Jugend", "J 3"),
        Availability::new("Wandsbek", 1, 4, "Kinder", "K 2"),
    ])]
    fn preferred_room_uses_zentralbibliothek(#[case] others: Vec<Availability>) {
        let mut availabilities = others;
        availabilities.push(Availability::new("Zentralbibliothek", 0, 5, "Hall A", "B12"));
        assert_eq!(item(availabilities).preferred_room(), "Hall A");
    }

    #[test]
    fn preferred_room_falls_back_to_first_location() {
        let item = item([
            Availability::new("Wandsbek", 1, 4, "Kinder", "K 2"),
            Availability::new("Altona", 2, 2, "Erwachsene", "A 1"),
            Availability::new("Bergedorf", 0, 1, "Jugend", "J 3"),
        ]);
        assert_eq!(item.preferred_room(), "Erwachsene");
    }

    #[test]
    fn preferred_room_for_custom_location() {
        let item = item([
            Availability::new("Zentralbibliothek", 0, 5, "Hall A", "B12"),
            Availability::new("Wandsbek", 1, 4, "Kinder", "K 2"),
        ]);
        assert_eq!(item.preferred_room_for("Wandsbek"), "Kinder");
        assert_eq!(item.preferred_room_for("Harburg"), "Kinder");
    }

    #[test]
    fn preferred_room_for_unknown_location_on_empty_item() {
        assert_eq!(item(Vec::<Availability>::new()).preferred_room_for("Harburg"), "");
    }

    #[test]
    fn is_available_delegates() {
        let item = item([Availability::new("Zentralbibliothek", 3, 5, "Hall A", "B12")]);
        assert!(item.is_available("Zentralbibliothek").unwrap());
        assert!(item.is_available("Altona").unwrap_err().is_not_found());
    }

    #[test]
    fn available_locations_skips_empty_shelves() {
        let item = item([
            Availability::new("Zentralbibliothek", 3, 5, "Hall A", "B12"),
            Availability::new("Altona", 0, 2, "Erwachsene", "A 1"),
            Availability::new("Wandsbek", 1, 4, "Kinder", "K 2"),
        ]);
        assert_eq!(item.available_locations().collect::<Vec<_>>(), vec!["Wandsbek", "Zentralbibliothek"]);
    }
}
