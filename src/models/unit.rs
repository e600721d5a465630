//! Duration units and their fixed millisecond magnitudes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One millisecond.
pub const MILLISECOND: u64 = 1;
/// One second in milliseconds.
pub const SECOND: u64 = 1_000;
/// One minute in milliseconds.
pub const MINUTE: u64 = 60 * SECOND;
/// One hour in milliseconds.
pub const HOUR: u64 = 60 * MINUTE;
/// One day in milliseconds.
pub const DAY: u64 = 24 * HOUR;
/// One week in milliseconds.
pub const WEEK: u64 = 7 * DAY;
/// A 30-day month in milliseconds.
pub const MONTH: u64 = 30 * DAY;
/// A 365-day year in milliseconds.
pub const YEAR: u64 = 365 * DAY;

/// A duration unit understood by the parser.
///
/// Declaration order is the resolution order: when a unit spelling appears
/// under several units of a table, the earliest unit wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl Unit {
    /// Every unit, in resolution order.
    pub const ALL: [Unit; 8] = [
        Unit::Milliseconds,
        Unit::Seconds,
        Unit::Minutes,
        Unit::Hours,
        Unit::Days,
        Unit::Weeks,
        Unit::Months,
        Unit::Years,
    ];

    /// Number of milliseconds one of this unit represents.
    pub fn base_millis(self) -> u64 {
        match self {
            Unit::Milliseconds => MILLISECOND,
            Unit::Seconds => SECOND,
            Unit::Minutes => MINUTE,
            Unit::Hours => HOUR,
            Unit::Days => DAY,
            Unit::Weeks => WEEK,
            Unit::Months => MONTH,
            Unit::Years => YEAR,
        }
    }

    /// Field name of this unit in a unit-synonym table.
    pub fn key(self) -> &'static str {
        match self {
            Unit::Milliseconds => "milliseconds",
            Unit::Seconds => "seconds",
            Unit::Minutes => "minutes",
            Unit::Hours => "hours",
            Unit::Days => "days",
            Unit::Weeks => "weeks",
            Unit::Months => "months",
            Unit::Years => "years",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.key() == s)
            .ok_or_else(|| format!("Unknown unit key: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_values() {
        assert_eq!(Unit::Milliseconds.base_millis(), 1);
        assert_eq!(Unit::Seconds.base_millis(), 1_000);
        assert_eq!(Unit::Minutes.base_millis(), 60 * 1_000);
        assert_eq!(Unit::Hours.base_millis(), 60 * 60 * 1_000);
        assert_eq!(Unit::Days.base_millis(), 24 * 60 * 60 * 1_000);
        assert_eq!(Unit::Weeks.base_millis(), 7 * 24 * 60 * 60 * 1_000);
        assert_eq!(Unit::Months.base_millis(), 2_592_000_000);
        assert_eq!(Unit::Years.base_millis(), 31_536_000_000);
    }

    #[test]
    fn test_unit_order() {
        let keys: Vec<&str> = Unit::ALL.iter().map(|u| u.key()).collect();
        assert_eq!(
            keys,
            vec!["milliseconds", "seconds", "minutes", "hours", "days", "weeks", "months", "years"]
        );
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!("hours".parse::<Unit>(), Ok(Unit::Hours));
        assert!("fortnights".parse::<Unit>().is_err());
    }

    #[test]
    fn test_unit_serialization() {
        let json = serde_json::to_string(&Unit::Weeks).unwrap();
        assert_eq!(json, "\"weeks\"");

        let deserialized: Unit = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Unit::Weeks);
    }

    #[test]
    fn test_unit_display() {
        assert_eq!(format!("{}", Unit::Months), "months");
    }
}
