use std::collections::BTreeMap;
use std::collections::btree_map::Values;

use exn::OptionExt;

use super::Availability;
use crate::error::{ErrorKind, Result};

/// All availability entries of a single item, keyed by location.
///
/// Entries are kept in ascending location order, so iteration (and anything
/// that picks "the first" entry) is deterministic. When two entries share a
/// location, the one inserted last wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<Availability>", into = "Vec<Availability>"))]
pub struct Availabilities {
    list: BTreeMap<String, Availability>,
}
impl Availabilities {
    pub fn new(availabilities: impl IntoIterator<Item = Availability>) -> Self {
        Self {
            list: availabilities.into_iter().map(|a| (a.location().to_string(), a)).collect(),
        }
    }

    /// Availability entry for `location`.
    ///
    /// # Errors
    /// [`ErrorKind::NotFound`] if the item is not tracked at that location.
    pub fn get(&self, location: &str) -> Result<&Availability> {
        self.find(location).ok_or_raise(|| ErrorKind::NotFound(location.to_string()))
    }

    /// Non-raising lookup, for callers that have a fallback.
    pub(crate) fn find(&self, location: &str) -> Option<&Availability> {
        self.list.get(location)
    }

    /// Returns true if at least one copy is on the shelf at `location`.
    ///
    /// # Errors
    /// [`ErrorKind::NotFound`] if the item is not tracked at that location.
    pub fn is_available(&self, location: &str) -> Result<bool> {
        Ok(self.get(location)?.is_available())
    }

    /// Iterate over `(location, availability)` pairs in location order.
    /// Calling this again restarts from the beginning.
    pub fn items(&self) -> impl Iterator<Item = (&str, &Availability)> + '_ {
        self.list.iter().map(|(location, availability)| (location.as_str(), availability))
    }

    pub fn contains(&self, location: &str) -> bool {
        self.list.contains_key(location)
    }

    /// Entry with the lexicographically smallest location name.
    pub fn first(&self) -> Option<&Availability> {
        self.list.values().next()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}
impl FromIterator<Availability> for Availabilities {
    fn from_iter<T: IntoIterator<Item = Availability>>(iter: T) -> Self {
        Self::new(iter)
    }
}
impl From<Vec<Availability>> for Availabilities {
    fn from(value: Vec<Availability>) -> Self {
        Self::new(value)
    }
}
impl From<Availabilities> for Vec<Availability> {
    fn from(value: Availabilities) -> Self {
        value.list.into_values().collect()
    }
}
impl<'a> IntoIterator for &'a Availabilities {
    type Item = &'a Availability;
    type IntoIter = Values<'a, String, Availability>;
    fn into_iter(self) -> Self::IntoIter {
        self.list.values()
    }
}
