use crate::month::YearMonth;
use crate::resource::MonthlyAllocation;
use std::collections::HashMap;

/// Two-level lookup (month -> member -> fraction) over a flat allocation list.
///
/// Built in one pass over the input slice in its original order; when the same
/// (member, month) pair appears more than once the later entry replaces the
/// earlier one. The result never depends on `HashMap` iteration order.
#[derive(Debug, Clone, Default)]
pub struct AllocationIndex<'a> {
    by_month: HashMap<YearMonth, HashMap<&'a str, f64>>,
}

impl<'a> AllocationIndex<'a> {
    pub fn build(allocations: &'a [MonthlyAllocation]) -> Self {
        let mut by_month: HashMap<YearMonth, HashMap<&'a str, f64>> = HashMap::new();
        for entry in allocations {
            by_month
                .entry(entry.month)
                .or_default()
                .insert(entry.member_id.as_str(), entry.allocation);
        }
        Self { by_month }
    }

    /// Effective allocation for a member in a month; 0 when absent.
    pub fn get(&self, month: YearMonth, member_id: &str) -> f64 {
        self.by_month
            .get(&month)
            .and_then(|members| members.get(member_id))
            .copied()
            .unwrap_or(0.0)
    }

    /// Members with an entry for `month`, sorted by id.
    pub fn members_in(&self, month: YearMonth) -> Vec<(&'a str, f64)> {
        let mut members: Vec<(&'a str, f64)> = self
            .by_month
            .get(&month)
            .map(|members| members.iter().map(|(id, value)| (*id, *value)).collect())
            .unwrap_or_default();
        members.sort_by(|a, b| a.0.cmp(b.0));
        members
    }

    /// Months where at least one member has an effective allocation above 0, sorted.
    pub fn active_months(&self) -> Vec<YearMonth> {
        let mut months: Vec<YearMonth> = self
            .by_month
            .iter()
            .filter(|(_, members)| members.values().any(|value| *value > 0.0))
            .map(|(month, _)| *month)
            .collect();
        months.sort();
        months
    }

    pub fn is_empty(&self) -> bool {
        self.by_month.is_empty()
    }
}
