//! Day of the week, numbered Monday = 0 through Sunday = 6.

use std::fmt;

use serde::Serialize;

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// All weekdays in index order.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

impl Weekday {
    /// Returns the weekday for an index taken modulo 7 (0 = Monday).
    pub fn from_index(index: u64) -> Self {
        WEEKDAYS[(index % 7) as usize]
    }

    /// Returns the index of this weekday (Monday = 0, Sunday = 6).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the English name, e.g. `"Sunday"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_order() {
        assert_eq!(Weekday::Monday.index(), 0);
        assert_eq!(Weekday::Sunday.index(), 6);
        for (i, wd) in WEEKDAYS.iter().enumerate() {
            assert_eq!(usize::from(wd.index()), i);
            assert_eq!(Weekday::from_index(i as u64), *wd);
        }
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Weekday::from_index(7), Weekday::Monday);
        assert_eq!(Weekday::from_index(13), Weekday::Sunday);
    }

    #[test]
    fn names() {
        assert_eq!(Weekday::Sunday.to_string(), "Sunday");
        assert_eq!(Weekday::Thursday.name(), "Thursday");
    }
}
