use crate::calculations::metrics::ProjectMetrics;
use polars::prelude::PlSmallStr;
use polars::prelude::*;

/// Monthly breakdown as a frame with columns
/// `month`, `cost`, `hours`, `cumulative_cost`, `cumulative_hours`.
pub fn monthly_dataframe(metrics: &ProjectMetrics) -> PolarsResult<DataFrame> {
    let rows = &metrics.monthly_data;
    let months: Vec<String> = rows.iter().map(|row| row.month.to_string()).collect();
    let cost: Vec<f64> = rows.iter().map(|row| row.cost).collect();
    let hours: Vec<f64> = rows.iter().map(|row| row.hours).collect();
    let cumulative_cost: Vec<f64> = rows.iter().map(|row| row.cumulative_cost).collect();
    let cumulative_hours: Vec<f64> = rows.iter().map(|row| row.cumulative_hours).collect();

    let columns = vec![
        Series::new(PlSmallStr::from_static("month"), months).into_column(),
        Series::new(PlSmallStr::from_static("cost"), cost).into_column(),
        Series::new(PlSmallStr::from_static("hours"), hours).into_column(),
        Series::new(PlSmallStr::from_static("cumulative_cost"), cumulative_cost).into_column(),
        Series::new(PlSmallStr::from_static("cumulative_hours"), cumulative_hours).into_column(),
    ];
    DataFrame::new(columns)
}
