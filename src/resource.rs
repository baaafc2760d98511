use crate::month::YearMonth;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A person on the project's resolved team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    /// Role used to resolve the member's hourly rate.
    pub role: String,
}

impl TeamMember {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
        }
    }
}

/// Hourly rate charged for a role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaborRate {
    pub role: String,
    /// Cost per hour. Non-negative.
    pub hourly_rate: f64,
}

impl LaborRate {
    pub fn new(role: impl Into<String>, hourly_rate: f64) -> Self {
        Self {
            role: role.into(),
            hourly_rate,
        }
    }
}

/// Role -> hourly rate lookup built from a labor-rate list.
#[derive(Debug, Clone, Default)]
pub struct RateTable<'a> {
    rates: HashMap<&'a str, f64>,
}

impl<'a> RateTable<'a> {
    pub fn new(rates: &'a [LaborRate]) -> Self {
        let mut table = HashMap::with_capacity(rates.len());
        for rate in rates {
            table.entry(rate.role.as_str()).or_insert(rate.hourly_rate);
        }
        Self { rates: table }
    }

    pub fn get(&self, role: &str) -> Option<f64> {
        self.rates.get(role).copied()
    }

    /// Hourly rate for `role`, or 0 when the role is not in the table.
    pub fn hourly_rate(&self, role: &str) -> f64 {
        self.get(role).unwrap_or(0.0)
    }
}

/// Fraction of a member's available time planned for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAllocation {
    pub member_id: String,
    pub month: YearMonth,
    /// Capacity fraction in `[0, 1]`.
    pub allocation: f64,
}

impl MonthlyAllocation {
    pub fn new(member_id: impl Into<String>, month: YearMonth, allocation: f64) -> Self {
        Self {
            member_id: member_id.into(),
            month,
            allocation,
        }
    }
}
