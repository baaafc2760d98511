use crate::allocation::AllocationIndex;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::month::YearMonth;
use crate::resource::{RateTable, TeamMember};
use std::collections::HashSet;

/// Cost and hours booked by a team in one month.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MonthlyTotals {
    pub cost: f64,
    pub hours: f64,
}

pub fn member_monthly_cost(
    hourly_rate: f64,
    available_hours: f64,
    allocation: f64,
    productivity_factor: f64,
) -> f64 {
    hourly_rate * available_hours * allocation * productivity_factor
}

pub fn member_monthly_hours(available_hours: f64, allocation: f64, productivity_factor: f64) -> f64 {
    available_hours * allocation * productivity_factor
}

/// Team cost for `month`. Only members with an allocation above 0 are priced;
/// unknown roles price at 0 and allocations for members outside `team` are ignored.
pub fn total_monthly_cost(
    month: YearMonth,
    allocations: &AllocationIndex<'_>,
    team: &[TeamMember],
    rates: &RateTable<'_>,
    available_hours: f64,
    productivity_factor: f64,
) -> f64 {
    let mut total = 0.0;
    for member in team {
        let allocation = allocations.get(month, &member.id);
        if allocation > 0.0 {
            let rate = rates.hourly_rate(&member.role);
            total += member_monthly_cost(rate, available_hours, allocation, productivity_factor);
        }
    }
    total
}

/// Team hours for `month`; no rate lookup is involved.
pub fn total_monthly_hours(
    month: YearMonth,
    allocations: &AllocationIndex<'_>,
    team: &[TeamMember],
    available_hours: f64,
    productivity_factor: f64,
) -> f64 {
    let mut total = 0.0;
    for member in team {
        let allocation = allocations.get(month, &member.id);
        if allocation > 0.0 {
            total += member_monthly_hours(available_hours, allocation, productivity_factor);
        }
    }
    total
}

/// Cost and hours for `month` in one pass, recording every reference that had to
/// be counted as zero. The totals equal `total_monthly_cost` / `total_monthly_hours`.
pub fn monthly_totals(
    month: YearMonth,
    allocations: &AllocationIndex<'_>,
    team: &[TeamMember],
    rates: &RateTable<'_>,
    available_hours: f64,
    productivity_factor: f64,
) -> (MonthlyTotals, Diagnostics) {
    let mut totals = MonthlyTotals::default();
    let mut diagnostics = Diagnostics::new();

    for member in team {
        let allocation = allocations.get(month, &member.id);
        if allocation <= 0.0 {
            continue;
        }
        let rate = match rates.get(&member.role) {
            Some(rate) => rate,
            None => {
                diagnostics.push(Diagnostic::UnknownRole {
                    member_id: member.id.clone(),
                    role: member.role.clone(),
                });
                0.0
            }
        };
        totals.cost += member_monthly_cost(rate, available_hours, allocation, productivity_factor);
        totals.hours += member_monthly_hours(available_hours, allocation, productivity_factor);
    }

    let team_ids: HashSet<&str> = team.iter().map(|member| member.id.as_str()).collect();
    for (member_id, allocation) in allocations.members_in(month) {
        if allocation > 0.0 && !team_ids.contains(member_id) {
            diagnostics.push(Diagnostic::OrphanedAllocation {
                member_id: member_id.to_string(),
                month,
            });
        }
    }

    (totals, diagnostics)
}
