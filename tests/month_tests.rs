use chrono::NaiveDate;
use forecast_tool::YearMonth;

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn parses_and_displays_year_month() {
    let month: YearMonth = "2026-06".parse().unwrap();
    assert_eq!(month.year(), 2026);
    assert_eq!(month.month(), 6);
    assert_eq!(month.to_string(), "2026-06");
}

#[test]
fn rejects_malformed_months() {
    for input in ["2026-13", "2026-6", "2026", "June 2026", "2026-00", ""] {
        assert!(input.parse::<YearMonth>().is_err(), "{input} should not parse");
    }
}

#[test]
fn month_boundaries_handle_leap_years() {
    let feb = YearMonth::new(2028, 2).unwrap();
    assert_eq!(feb.first_day(), d(2028, 2, 1));
    assert_eq!(feb.last_day(), d(2028, 2, 29));
    assert_eq!(YearMonth::new(2026, 2).unwrap().last_day(), d(2026, 2, 28));
    assert_eq!(YearMonth::new(2026, 12).unwrap().last_day(), d(2026, 12, 31));
    assert_eq!(YearMonth::of(d(2026, 7, 19)), YearMonth::new(2026, 7).unwrap());
}

#[test]
fn days_walks_every_calendar_day() {
    let days: Vec<NaiveDate> = YearMonth::new(2026, 6).unwrap().days().collect();
    assert_eq!(days.len(), 30);
    assert_eq!(days.first().copied(), Some(d(2026, 6, 1)));
    assert_eq!(days.last().copied(), Some(d(2026, 6, 30)));
}

#[test]
fn range_crosses_year_boundary() {
    let start = YearMonth::new(2026, 11).unwrap();
    let end = YearMonth::new(2027, 2).unwrap();
    let months: Vec<String> = YearMonth::range(start, end)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(months, vec!["2026-11", "2026-12", "2027-01", "2027-02"]);
    assert!(YearMonth::range(end, start).is_empty());
}

#[test]
fn serializes_as_plain_string() {
    let month = YearMonth::new(2026, 7).unwrap();
    let json = serde_json::to_string(&month).unwrap();
    assert_eq!(json, "\"2026-07\"");
    let back: YearMonth = serde_json::from_str(&json).unwrap();
    assert_eq!(back, month);
    assert!(serde_json::from_str::<YearMonth>("\"2026-7\"").is_err());
}
