pub mod cost;
pub mod finance;
pub mod metrics;

pub use cost::{
    MonthlyTotals, member_monthly_cost, member_monthly_hours, monthly_totals, total_monthly_cost,
    total_monthly_hours,
};
pub use finance::{
    budget_performance_ratio, burn_period_days, burn_period_weeks, net_present_value, variance,
    variance_percent, weekly_burn_rate,
};
pub use metrics::{
    MonthlyCalculation, ProjectMetrics, calculate_project_metrics,
    calculate_project_metrics_with_diagnostics,
};
