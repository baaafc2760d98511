use crate::month::YearMonth;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A date range during which team capacity is scaled by `factor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductivityWindow {
    pub id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Multiplier in `[0, 1]`; 1 is full productivity.
    pub factor: f64,
}

impl ProductivityWindow {
    pub fn new(id: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate, factor: f64) -> Self {
        Self {
            id: id.into(),
            start_date,
            end_date,
            factor,
        }
    }

    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    pub fn overlaps(&self, month: YearMonth) -> bool {
        self.start_date <= month.last_day() && self.end_date >= month.first_day()
    }
}

/// Blended productivity factor for `month`.
///
/// Every calendar day of the month contributes equally (weekends included, no
/// clipping to the project span). A day takes the lowest factor of the windows
/// covering it, or 1 when none does; the month's factor is the mean over its days.
pub fn productivity_factor(month: YearMonth, windows: &[ProductivityWindow]) -> f64 {
    let overlapping: Vec<&ProductivityWindow> =
        windows.iter().filter(|window| window.overlaps(month)).collect();
    if overlapping.is_empty() {
        return 1.0;
    }

    let mut total = 0.0;
    let mut days = 0u32;
    for day in month.days() {
        let day_factor = overlapping
            .iter()
            .filter(|window| window.covers(day))
            .map(|window| window.factor)
            .fold(1.0_f64, f64::min);
        total += day_factor;
        days += 1;
    }
    total / f64::from(days)
}
