use forecast_tool::calculations::{
    member_monthly_cost, member_monthly_hours, monthly_totals, total_monthly_cost,
    total_monthly_hours,
};
use forecast_tool::{
    AllocationIndex, Diagnostic, LaborRate, MonthlyAllocation, RateTable, TeamMember, YearMonth,
};

fn ym(y: i32, m: u32) -> YearMonth {
    YearMonth::new(y, m).unwrap()
}

fn team() -> Vec<TeamMember> {
    vec![
        TeamMember::new("m1", "Alice", "Engineer"),
        TeamMember::new("m2", "Bob", "Designer"),
        TeamMember::new("m3", "Carol", "Principal"),
    ]
}

fn rates() -> Vec<LaborRate> {
    vec![LaborRate::new("Engineer", 100.0), LaborRate::new("Designer", 80.0)]
}

#[test]
fn member_cost_and_hours_at_full_productivity() {
    assert_eq!(member_monthly_cost(100.0, 160.0, 0.5, 1.0), 8000.0);
    assert_eq!(member_monthly_hours(160.0, 0.5, 1.0), 80.0);
}

#[test]
fn member_cost_and_hours_scale_with_productivity() {
    assert_eq!(member_monthly_cost(100.0, 160.0, 0.5, 0.75), 6000.0);
    assert_eq!(member_monthly_hours(160.0, 0.5, 0.75), 60.0);
}

#[test]
fn rate_table_resolves_known_roles_only() {
    let rates = rates();
    let table = RateTable::new(&rates);
    assert_eq!(table.hourly_rate("Engineer"), 100.0);
    assert_eq!(table.get("Principal"), None);
    assert_eq!(table.hourly_rate("Principal"), 0.0);
}

#[test]
fn team_totals_skip_unknown_roles_in_cost_but_not_hours() {
    let month = ym(2026, 7);
    let allocations = vec![
        MonthlyAllocation::new("m1", month, 1.0),
        MonthlyAllocation::new("m2", month, 0.0),
        MonthlyAllocation::new("m3", month, 0.5),
    ];
    let index = AllocationIndex::build(&allocations);
    let rates = rates();
    let table = RateTable::new(&rates);
    let team = team();

    let cost = total_monthly_cost(month, &index, &team, &table, 160.0, 1.0);
    let hours = total_monthly_hours(month, &index, &team, 160.0, 1.0);
    assert_eq!(cost, 16000.0);
    assert_eq!(hours, 240.0);
}

#[test]
fn orphaned_allocations_contribute_nothing() {
    let month = ym(2026, 8);
    let allocations = vec![
        MonthlyAllocation::new("m1", month, 0.5),
        MonthlyAllocation::new("ghost", month, 1.0),
    ];
    let index = AllocationIndex::build(&allocations);
    let rates = rates();
    let table = RateTable::new(&rates);
    let team = team();

    assert_eq!(total_monthly_cost(month, &index, &team, &table, 80.0, 1.0), 4000.0);
    assert_eq!(total_monthly_hours(month, &index, &team, 80.0, 1.0), 40.0);
}

#[test]
fn monthly_totals_match_separate_totals_and_report_unresolved_references() {
    let month = ym(2026, 7);
    let allocations = vec![
        MonthlyAllocation::new("m1", month, 1.0),
        MonthlyAllocation::new("m2", month, 0.25),
        MonthlyAllocation::new("m3", month, 0.5),
        MonthlyAllocation::new("ghost", month, 1.0),
        MonthlyAllocation::new("idle", month, 0.0),
    ];
    let index = AllocationIndex::build(&allocations);
    let rates = rates();
    let table = RateTable::new(&rates);
    let team = team();

    let (totals, diagnostics) = monthly_totals(month, &index, &team, &table, 168.0, 0.9);
    assert_eq!(totals.cost, total_monthly_cost(month, &index, &team, &table, 168.0, 0.9));
    assert_eq!(totals.hours, total_monthly_hours(month, &index, &team, 168.0, 0.9));

    let entries: Vec<&Diagnostic> = diagnostics.iter().collect();
    assert_eq!(
        entries,
        vec![
            &Diagnostic::UnknownRole {
                member_id: "m3".to_string(),
                role: "Principal".to_string(),
            },
            &Diagnostic::OrphanedAllocation {
                member_id: "ghost".to_string(),
                month,
            },
        ]
    );
}
