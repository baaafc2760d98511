use crate::allocation::AllocationIndex;
use crate::calculations::cost::{MonthlyTotals, monthly_totals};
use crate::calculations::finance::{
    budget_performance_ratio, net_present_value, variance, variance_percent, weekly_burn_rate,
};
use crate::diagnostics::Diagnostics;
use crate::month::YearMonth;
use crate::productivity::productivity_factor;
use crate::project::Project;
use crate::resource::TeamMember;
use crate::settings::Settings;
use crate::traffic_light::{TrafficLight, TrafficLightThresholds};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{Span, debug, field, instrument, warn};

/// One row of the monthly breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCalculation {
    pub month: YearMonth,
    pub cost: f64,
    pub hours: f64,
    pub cumulative_cost: f64,
    pub cumulative_hours: f64,
}

/// Project-level forecast. Every field is finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetrics {
    pub etc: f64,
    pub eac: f64,
    pub variance: f64,
    pub variance_percent: f64,
    pub budget_ratio: f64,
    pub weekly_burn_rate: f64,
    pub npv: f64,
    pub total_hours: f64,
    pub monthly_data: Vec<MonthlyCalculation>,
}

impl ProjectMetrics {
    fn summarize(
        etc: f64,
        actual_cost: f64,
        baseline_budget: f64,
        weekly_burn_rate: f64,
        npv: f64,
        total_hours: f64,
        monthly_data: Vec<MonthlyCalculation>,
    ) -> Self {
        let eac = actual_cost + etc;
        let variance = variance(eac, baseline_budget);
        Self {
            etc,
            eac,
            variance,
            variance_percent: variance_percent(variance, baseline_budget),
            budget_ratio: budget_performance_ratio(baseline_budget, eac),
            weekly_burn_rate,
            npv,
            total_hours,
            monthly_data,
        }
    }

    /// Result when the project has no reforecast to compute from.
    fn without_reforecast() -> Self {
        Self::summarize(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, Vec::new())
    }

    pub fn traffic_light(&self, thresholds: &TrafficLightThresholds) -> TrafficLight {
        TrafficLight::classify(self.variance_percent, thresholds)
    }
}

/// Forecast metrics for the project's active reforecast.
pub fn calculate_project_metrics(
    project: &Project,
    settings: &Settings,
    team: &[TeamMember],
) -> ProjectMetrics {
    calculate_project_metrics_with_diagnostics(project, settings, team).0
}

/// Same totals as `calculate_project_metrics`, plus the references that were
/// counted as zero along the way.
#[instrument(skip_all, fields(project_id = %project.id, reforecast_id = field::Empty))]
pub fn calculate_project_metrics_with_diagnostics(
    project: &Project,
    settings: &Settings,
    team: &[TeamMember],
) -> (ProjectMetrics, Diagnostics) {
    let Some(reforecast) = project.active_reforecast() else {
        debug!("project has no reforecast; returning empty metrics");
        return (ProjectMetrics::without_reforecast(), Diagnostics::new());
    };
    Span::current().record("reforecast_id", reforecast.id.as_str());

    let allocations = AllocationIndex::build(&reforecast.allocations);
    let rates = settings.rate_table();
    let calendar = settings.calendar();
    let months = project.months();

    // Months are independent; results come back in month order. Worker threads
    // re-enter the calculation span so month events keep its fields.
    let span = Span::current();
    let per_month: Vec<(YearMonth, MonthlyTotals, Diagnostics)> = months
        .par_iter()
        .map(|&month| {
            let _entered = span.enter();
            let available_hours =
                calendar.monthly_work_hours(month, project.start_date, project.end_date);
            let factor = productivity_factor(month, &reforecast.productivity_windows);
            let (totals, diagnostics) =
                monthly_totals(month, &allocations, team, &rates, available_hours, factor);
            debug!(
                month = %month,
                available_hours,
                factor,
                cost = totals.cost,
                hours = totals.hours,
                "computed month"
            );
            (month, totals, diagnostics)
        })
        .collect();

    let mut diagnostics = Diagnostics::new();
    let mut monthly_data = Vec::with_capacity(per_month.len());
    let mut cash_flows = Vec::with_capacity(per_month.len());
    let mut cumulative_cost = 0.0;
    let mut cumulative_hours = 0.0;

    for (month, totals, month_diagnostics) in per_month {
        cumulative_cost += totals.cost;
        cumulative_hours += totals.hours;
        cash_flows.push(totals.cost);
        monthly_data.push(MonthlyCalculation {
            month,
            cost: totals.cost,
            hours: totals.hours,
            cumulative_cost,
            cumulative_hours,
        });
        diagnostics.extend(month_diagnostics);
    }

    let etc = cumulative_cost;
    let active_months = allocations.active_months().len() as u32;
    let burn_rate = weekly_burn_rate(etc, project.start_date, active_months);
    let npv = net_present_value(&cash_flows, settings.discount_rate);

    if !diagnostics.is_empty() {
        warn!(
            unknown_roles = diagnostics.unknown_roles(),
            orphaned_allocations = diagnostics.orphaned_allocations(),
            "unresolved references were counted as zero"
        );
    }

    let metrics = ProjectMetrics::summarize(
        etc,
        reforecast.actual_cost,
        reforecast.baseline_budget,
        burn_rate,
        npv,
        cumulative_hours,
        monthly_data,
    );
    (metrics, diagnostics)
}
