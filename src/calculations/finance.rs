use chrono::{Months, NaiveDate};

/// EAC minus baseline; positive means over budget.
pub fn variance(eac: f64, baseline_budget: f64) -> f64 {
    eac - baseline_budget
}

/// Variance as a percentage of the baseline; 0 when there is no baseline.
pub fn variance_percent(variance: f64, baseline_budget: f64) -> f64 {
    if baseline_budget == 0.0 {
        return 0.0;
    }
    variance / baseline_budget * 100.0
}

/// Baseline budget over EAC (> 1 under budget, < 1 over budget); 0 when EAC is 0.
///
/// This is a plain forecast ratio, not an earned-value CPI.
pub fn budget_performance_ratio(baseline_budget: f64, eac: f64) -> f64 {
    if eac == 0.0 {
        return 0.0;
    }
    baseline_budget / eac
}

/// Day count of the burn period: `start` advanced by `active_months` calendar
/// months (day clamped to the target month's end, like spreadsheet `EDATE`).
pub fn burn_period_days(start: NaiveDate, active_months: u32) -> i64 {
    let advanced = start
        .checked_add_months(Months::new(active_months))
        .unwrap_or(start);
    (advanced - start).num_days()
}

/// Whole weeks in the burn period, rounded to nearest and never below 1.
pub fn burn_period_weeks(start: NaiveDate, active_months: u32) -> i64 {
    let days = burn_period_days(start, active_months);
    ((days as f64 / 7.0).round() as i64).max(1)
}

/// ETC spread over the weeks of the active forecast period.
pub fn weekly_burn_rate(etc: f64, start: NaiveDate, active_months: u32) -> f64 {
    if active_months == 0 || etc == 0.0 {
        return 0.0;
    }
    etc / burn_period_weeks(start, active_months) as f64
}

/// Present value of monthly cash flows discounted at `annual_rate / 12`.
///
/// The first flow is discounted by one period. A zero rate yields the plain sum.
pub fn net_present_value(cash_flows: &[f64], annual_rate: f64) -> f64 {
    let monthly_rate = annual_rate / 12.0;
    let mut npv = 0.0;
    for (idx, flow) in cash_flows.iter().enumerate() {
        let period = (idx + 1) as i32;
        npv += flow / (1.0 + monthly_rate).powi(period);
    }
    npv
}
