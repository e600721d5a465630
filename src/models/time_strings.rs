//! Unit-synonym tables.

use serde::{Deserialize, Serialize};

use super::Unit;

/// The accepted spellings of every duration unit for one locale.
///
/// Spellings are matched against lower-cased input, so tables should hold
/// lower-case entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeStrings {
    pub milliseconds: Vec<String>,
    pub seconds: Vec<String>,
    pub minutes: Vec<String>,
    pub hours: Vec<String>,
    pub days: Vec<String>,
    pub weeks: Vec<String>,
    pub months: Vec<String>,
    pub years: Vec<String>,
}

impl TimeStrings {
    /// Spellings registered for `unit`.
    pub fn get(&self, unit: Unit) -> &[String] {
        match unit {
            Unit::Milliseconds => &self.milliseconds,
            Unit::Seconds => &self.seconds,
            Unit::Minutes => &self.minutes,
            Unit::Hours => &self.hours,
            Unit::Days => &self.days,
            Unit::Weeks => &self.weeks,
            Unit::Months => &self.months,
            Unit::Years => &self.years,
        }
    }

    fn get_mut(&mut self, unit: Unit) -> &mut Vec<String> {
        match unit {
            Unit::Milliseconds => &mut self.milliseconds,
            Unit::Seconds => &mut self.seconds,
            Unit::Minutes => &mut self.minutes,
            Unit::Hours => &mut self.hours,
            Unit::Days => &mut self.days,
            Unit::Weeks => &mut self.weeks,
            Unit::Months => &mut self.months,
            Unit::Years => &mut self.years,
        }
    }

    /// Find the first unit, in [`Unit::ALL`] order, whose spellings contain `text`.
    pub fn find_unit(&self, text: &str) -> Option<Unit> {
        Unit::ALL
            .into_iter()
            .find(|unit| self.get(*unit).iter().any(|spelling| spelling == text))
    }

    /// Copy of this table with every unit present in `overrides` replaced wholesale.
    pub fn overlay(&self, overrides: &PartialTimeStrings) -> TimeStrings {
        let mut merged = self.clone();
        for unit in Unit::ALL {
            if let Some(spellings) = overrides.get(unit) {
                *merged.get_mut(unit) = spellings.to_vec();
            }
        }
        merged
    }
}

/// A table where any unit may be left out; used for per-call overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialTimeStrings {
    pub milliseconds: Option<Vec<String>>,
    pub seconds: Option<Vec<String>>,
    pub minutes: Option<Vec<String>>,
    pub hours: Option<Vec<String>>,
    pub days: Option<Vec<String>>,
    pub weeks: Option<Vec<String>>,
    pub months: Option<Vec<String>>,
    pub years: Option<Vec<String>>,
}

impl PartialTimeStrings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spellings for `unit`.
    pub fn with<I, S>(mut self, unit: Unit, spellings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let spellings = Some(spellings.into_iter().map(Into::into).collect());
        match unit {
            Unit::Milliseconds => self.milliseconds = spellings,
            Unit::Seconds => self.seconds = spellings,
            Unit::Minutes => self.minutes = spellings,
            Unit::Hours => self.hours = spellings,
            Unit::Days => self.days = spellings,
            Unit::Weeks => self.weeks = spellings,
            Unit::Months => self.months = spellings,
            Unit::Years => self.years = spellings,
        }
        self
    }

    pub fn get(&self, unit: Unit) -> Option<&[String]> {
        match unit {
            Unit::Milliseconds => self.milliseconds.as_deref(),
            Unit::Seconds => self.seconds.as_deref(),
            Unit::Minutes => self.minutes.as_deref(),
            Unit::Hours => self.hours.as_deref(),
            Unit::Days => self.days.as_deref(),
            Unit::Weeks => self.weeks.as_deref(),
            Unit::Months => self.months.as_deref(),
            Unit::Years => self.years.as_deref(),
        }
    }
}
