//! Time-related types for fantasy basketball seasons and scoring weeks.

use crate::error::{HoopsError, Result};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for a season, identified by the year it starts in.
///
/// Yahoo calls the 2020-2021 season `2020`; the NBA stats feed labels the
/// same season `"2020-21"`. [`Season::label`] converts between the two.
///
/// # Examples
///
/// ```rust
/// use fantasy_hoops::Season;
///
/// let season = Season::new(2020);
/// assert_eq!(season.label(), "2020-21");
/// assert_eq!("2020-21".parse::<Season>().unwrap(), season);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(start_year: u16) -> Self {
        Self(start_year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// NBA stats season label, e.g. `2020-21`.
    pub fn label(&self) -> String {
        format!("{}-{:02}", self.0, (self.0 + 1) % 100)
    }

    /// Parse an NBA stats season label back into a season.
    pub fn from_label(label: &str) -> Result<Self> {
        let invalid = || HoopsError::InvalidSeason {
            value: label.to_string(),
        };
        let (start, end) = label.trim().split_once('-').ok_or_else(invalid)?;
        let start: u16 = start.parse()?;
        let end: u16 = end.parse()?;
        if (start + 1) % 100 != end {
            return Err(invalid());
        }
        Ok(Self(start))
    }

    /// The season in progress on `date`. Seasons start in the autumn, so
    /// anything before August belongs to the season that started last year.
    pub fn containing(date: NaiveDate) -> Self {
        let year = date.year() as u16;
        if date.month() >= 8 {
            Self(year)
        } else {
            Self(year - 1)
        }
    }
}

impl Default for Season {
    fn default() -> Self {
        Self::containing(Local::now().date_naive())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = HoopsError;

    fn from_str(s: &str) -> Result<Self> {
        if s.contains('-') {
            Self::from_label(s)
        } else {
            Ok(Self(s.trim().parse()?))
        }
    }
}

/// Type-safe wrapper for fantasy scoring weeks
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = HoopsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A fantasy scoring period: one week, closed on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringPeriod {
    pub week: Week,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ScoringPeriod {
    pub fn new(week: Week, start: NaiveDate, end: NaiveDate) -> Self {
        Self { week, start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
