use crate::calendar::{Holiday, WorkCalendar};
use crate::resource::{LaborRate, RateTable};
use crate::traffic_light::TrafficLightThresholds;
use serde::{Deserialize, Serialize};

/// Organisation-wide inputs to a forecast.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Annual discount rate as a fraction (0.08 = 8%).
    pub discount_rate: f64,
    pub labor_rates: Vec<LaborRate>,
    pub holidays: Vec<Holiday>,
    pub traffic_light: TrafficLightThresholds,
}

impl Settings {
    pub fn rate_table(&self) -> RateTable<'_> {
        RateTable::new(&self.labor_rates)
    }

    pub fn calendar(&self) -> WorkCalendar<'_> {
        WorkCalendar::new(&self.holidays)
    }

    pub fn with_labor_rate(mut self, role: impl Into<String>, hourly_rate: f64) -> Self {
        self.labor_rates.push(LaborRate::new(role, hourly_rate));
        self
    }

    pub fn with_holiday(mut self, holiday: Holiday) -> Self {
        self.holidays.push(holiday);
        self
    }
}
