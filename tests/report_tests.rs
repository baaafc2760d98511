use chrono::NaiveDate;
use forecast_tool::report::monthly_dataframe;
use forecast_tool::{Project, Reforecast, Settings, TeamMember, YearMonth, calculate_project_metrics};

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn monthly_frame_has_one_row_per_month() {
    let mut project = Project::new("p1", d(2026, 6, 15), d(2026, 8, 14));
    let mut reforecast = Reforecast::new("rf-1", "Plan", d(2026, 6, 15));
    reforecast.allocate("m1", YearMonth::new(2026, 7).unwrap(), 0.5);
    project.add_reforecast(reforecast);
    let settings = Settings::default().with_labor_rate("Engineer", 100.0);
    let team = vec![TeamMember::new("m1", "Alice", "Engineer")];

    let metrics = calculate_project_metrics(&project, &settings, &team);
    let df = monthly_dataframe(&metrics).unwrap();

    assert_eq!(df.height(), 3);
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(
        names,
        vec!["month", "cost", "hours", "cumulative_cost", "cumulative_hours"]
    );

    let months = df.column("month").unwrap().as_materialized_series().str().unwrap();
    assert_eq!(months.get(1), Some("2026-07"));
    let cumulative = df.column("cumulative_cost").unwrap().as_materialized_series().f64().unwrap();
    assert_eq!(cumulative.get(2), Some(metrics.etc));
}

#[test]
fn empty_metrics_give_empty_frame() {
    let project = Project::new("p1", d(2026, 6, 15), d(2026, 8, 14));
    let metrics = calculate_project_metrics(&project, &Settings::default(), &[]);
    let df = monthly_dataframe(&metrics).unwrap();
    assert_eq!(df.height(), 0);
    assert_eq!(df.width(), 5);
}
