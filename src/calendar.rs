use crate::month::YearMonth;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Working hours credited for each available day.
pub const HOURS_PER_DAY: f64 = 8.0;

/// A named, inclusive range of non-working dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Holiday {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start_date,
            end_date,
        }
    }

    pub fn single_day(id: impl Into<String>, name: impl Into<String>, date: NaiveDate) -> Self {
        Self::new(id, name, date, date)
    }
}

fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Count Monday-Friday dates in `[start, end]`. Zero when `start > end`.
pub fn count_workdays(start: NaiveDate, end: NaiveDate) -> i64 {
    let mut count = 0;
    let mut current = start;

    while current <= end {
        if is_weekday(current) {
            count += 1;
        }
        current = current + Duration::days(1);
    }
    count
}

/// Count distinct weekday dates in `[start, end]` covered by at least one holiday.
///
/// Overlapping holidays are collapsed through a date set, so a day booked by two
/// holidays is only subtracted once.
pub fn count_holiday_workdays(start: NaiveDate, end: NaiveDate, holidays: &[Holiday]) -> i64 {
    let mut days = HashSet::new();

    for holiday in holidays {
        let mut current = holiday.start_date.max(start);
        let last = holiday.end_date.min(end);
        while current <= last {
            if is_weekday(current) {
                days.insert(current);
            }
            current = current + Duration::days(1);
        }
    }
    days.len() as i64
}

/// Available working hours in `month`, clipped to the project's date span.
pub fn monthly_work_hours(
    month: YearMonth,
    project_start: NaiveDate,
    project_end: NaiveDate,
    holidays: &[Holiday],
) -> f64 {
    let start = month.first_day().max(project_start);
    let end = month.last_day().min(project_end);
    if start > end {
        return 0.0;
    }

    let available = WorkCalendar::new(holidays).count_available_days(start, end);
    (available as f64 * HOURS_PER_DAY).max(0.0)
}

/// Mon-Fri working calendar over a borrowed holiday list.
#[derive(Debug, Clone, Copy)]
pub struct WorkCalendar<'a> {
    holidays: &'a [Holiday],
}

impl<'a> WorkCalendar<'a> {
    pub fn new(holidays: &'a [Holiday]) -> Self {
        Self { holidays }
    }

    /// Weekdays in `[start, end]` not covered by any holiday.
    pub fn count_available_days(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        count_workdays(start, end) - count_holiday_workdays(start, end, self.holidays)
    }

    pub fn monthly_work_hours(
        &self,
        month: YearMonth,
        project_start: NaiveDate,
        project_end: NaiveDate,
    ) -> f64 {
        monthly_work_hours(month, project_start, project_end, self.holidays)
    }
}
