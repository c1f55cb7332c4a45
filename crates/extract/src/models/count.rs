use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::error::{Error, ErrorKind};

/// Copy count as shown on the page, e.g. `3/5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Count {
    /// Copies currently on the shelf
    pub available: u32,
    /// Copies owned by the location
    pub total: u32,
}
impl Count {
    pub fn new(available: u32, total: u32) -> Self {
        Self { available, total }
    }
}
impl From<(u32, u32)> for Count {
    fn from((available, total): (u32, u32)) -> Self {
        Count::new(available, total)
    }
}
impl FromStr for Count {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ErrorKind::ParseError {
            field: "count",
            value: s.to_string(),
        };
        let Some((available, total)) = s.trim().split_once('/') else {
            exn::bail!(invalid());
        };
        let (Ok(available), Ok(total)) = (available.trim().parse::<u32>(), total.trim().parse::<u32>()) else {
            exn::bail!(invalid());
        };
        if available > total {
            exn::bail!(invalid());
        }
        Ok(Self { available, total })
    }
}
impl Display for Count {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}/{}", self.available, self.total)
    }
}
