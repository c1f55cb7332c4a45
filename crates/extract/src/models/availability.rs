use std::fmt::{Display, Formatter, Result as FmtResult};

use super::Count;

/// Stock snapshot of one item at one library location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Availability {
    location: String,
    count: u32,
    max_count: u32,
    room: String,
    shelf: String,
}
impl Availability {
    pub fn new(
        location: impl Into<String>,
        count: u32,
        max_count: u32,
        room: impl Into<String>,
        shelf: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            count,
            max_count,
            room: room.into(),
            shelf: shelf.into(),
        }
    }

    pub(crate) fn from_count(location: String, count: Count, room: String, shelf: String) -> Self {
        Self::new(location, count.available, count.total, room, shelf)
    }

    /// Library branch, unique within an item.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Copies currently on the shelf.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Copies owned by the location.
    pub fn max_count(&self) -> u32 {
        self.max_count
    }

    /// Location path inside the branch, e.g. `Erwachsene > Sachbuch`.
    pub fn room(&self) -> &str {
        &self.room
    }

    /// Shelf mark.
    pub fn shelf(&self) -> &str {
        &self.shelf
    }

    /// Returns true if at least one copy can be borrowed right now.
    pub fn is_available(&self) -> bool {
        self.count > 0
    }
}
impl Display for Availability {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{}: {}/{} at {} > {}",
            self.location, self.count, self.max_count, self.room, self.shelf
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, false)]
    #[case(0, 3, false)]
    #[case(1, 3, true)]
    #[case(3, 3, true)]
    fn availability_follows_count(#[case] count: u32, #[case] max_count: u32, #[case] expected: bool) {
        let availability = Availability::new("Altona", count, max_count, "Kinder", "K 12");
        assert_eq!(availability.is_available(), expected);
    }

    #[test]
    fn display_includes_room_and_shelf() {
        let availability = Availability::new("Zentralbibliothek", 3, 5, "Hall A", "B12");
        assert_eq!(availability.to_string(), "Zentralbibliothek: 3/5 at Hall A > B12");
    }
}
