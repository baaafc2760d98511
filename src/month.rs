use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A calendar month, written `YYYY-MM` on the wire.
///
/// Internally this is the first day of the month, so ordering, hashing and
/// boundary arithmetic all come from `NaiveDate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth(NaiveDate);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid month '{input}' (expected YYYY-MM)")]
pub struct MonthParseError {
    input: String,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self(date - Duration::days(i64::from(date.day0())))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    pub fn last_day(&self) -> NaiveDate {
        self.0 + Duration::days(self.num_days() - 1)
    }

    pub fn num_days(&self) -> i64 {
        match self.month() {
            4 | 6 | 9 | 11 => 30,
            2 if self.0.leap_year() => 29,
            2 => 28,
            _ => 31,
        }
    }

    pub fn next(&self) -> Self {
        Self(self.0 + Duration::days(self.num_days()))
    }

    /// Every calendar day of the month, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.0.iter_days().take(self.num_days() as usize)
    }

    /// Inclusive month sequence from `start` to `end`; empty when `start > end`.
    pub fn range(start: YearMonth, end: YearMonth) -> Vec<YearMonth> {
        let mut months = Vec::new();
        let mut current = start;
        while current <= end {
            months.push(current);
            current = current.next();
        }
        months
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MonthParseError {
            input: s.to_string(),
        };
        let (year, month) = s.trim().split_once('-').ok_or_else(err)?;
        if month.len() != 2 {
            return Err(err());
        }
        let year: i32 = year.parse().map_err(|_| err())?;
        let month: u32 = month.parse().map_err(|_| err())?;
        YearMonth::new(year, month).ok_or_else(err)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = MonthParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}
