use forecast_tool::{AllocationIndex, MonthlyAllocation, YearMonth};

fn ym(y: i32, m: u32) -> YearMonth {
    YearMonth::new(y, m).unwrap()
}

#[test]
fn later_entry_wins_for_duplicate_pairs() {
    let allocations = vec![
        MonthlyAllocation::new("m1", ym(2026, 7), 0.5),
        MonthlyAllocation::new("m2", ym(2026, 7), 1.0),
        MonthlyAllocation::new("m1", ym(2026, 7), 0.25),
    ];
    let index = AllocationIndex::build(&allocations);
    assert_eq!(index.get(ym(2026, 7), "m1"), 0.25);
    assert_eq!(index.get(ym(2026, 7), "m2"), 1.0);
}

#[test]
fn absent_pairs_read_as_zero() {
    let allocations = vec![MonthlyAllocation::new("m1", ym(2026, 7), 0.5)];
    let index = AllocationIndex::build(&allocations);
    assert_eq!(index.get(ym(2026, 8), "m1"), 0.0);
    assert_eq!(index.get(ym(2026, 7), "nobody"), 0.0);
    assert!(AllocationIndex::build(&[]).is_empty());
}

#[test]
fn active_months_use_effective_values() {
    let allocations = vec![
        MonthlyAllocation::new("m1", ym(2026, 8), 0.5),
        MonthlyAllocation::new("m1", ym(2026, 6), 0.5),
        MonthlyAllocation::new("m2", ym(2026, 7), 0.5),
        MonthlyAllocation::new("m2", ym(2026, 7), 0.0),
        MonthlyAllocation::new("m3", ym(2026, 9), 0.0),
    ];
    let index = AllocationIndex::build(&allocations);
    assert_eq!(index.active_months(), vec![ym(2026, 6), ym(2026, 8)]);
}

#[test]
fn members_in_month_are_sorted() {
    let allocations = vec![
        MonthlyAllocation::new("m9", ym(2026, 7), 1.0),
        MonthlyAllocation::new("m1", ym(2026, 7), 0.5),
        MonthlyAllocation::new("m4", ym(2026, 8), 0.5),
    ];
    let index = AllocationIndex::build(&allocations);
    assert_eq!(index.members_in(ym(2026, 7)), vec![("m1", 0.5), ("m9", 1.0)]);
    assert!(index.members_in(ym(2026, 9)).is_empty());
}
