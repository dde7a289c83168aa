/// Utilities for date and time formatting
///
/// Calendar dates are `NaiveDate` throughout; "today" is the browser's local
/// calendar day, never a UTC instant.
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Local calendar day of the browser.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_else(|| chrono::Local::now().date_naive())
}

/// Local wall-clock time of the browser, minute precision.
pub fn now_local() -> NaiveDateTime {
    let now = js_sys::Date::new_0();
    today()
        .and_hms_opt(now.get_hours(), now.get_minutes(), 0)
        .unwrap_or_else(|| chrono::Local::now().naive_local())
}

/// `15.03.2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// `15.03.2024`, or an em-dash placeholder for a missing date.
pub fn format_opt_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "—".to_string())
}

/// `15.03.2024 14:02`
pub fn format_datetime(value: NaiveDateTime) -> String {
    value.format("%d.%m.%Y %H:%M").to_string()
}

/// `20 Oct – 26 Oct 2025`, or with both years when the week spans two.
pub fn format_week_range(start: NaiveDate, end: NaiveDate) -> String {
    if start.year() == end.year() {
        format!("{} – {}", start.format("%d %b"), end.format("%d %b %Y"))
    } else {
        format!("{} – {}", start.format("%d %b %Y"), end.format("%d %b %Y"))
    }
}

/// Value for `<input type="datetime-local">`.
pub fn to_datetime_input(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%dT%H:%M").to_string()
}

/// Parses `<input type="datetime-local">`, with or without seconds.
pub fn parse_datetime_input(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(d(2024, 3, 15)), "15.03.2024");
        assert_eq!(format_opt_date(None), "—");
    }

    #[test]
    fn test_format_week_range() {
        assert_eq!(
            format_week_range(d(2025, 10, 20), d(2025, 10, 26)),
            "20 Oct – 26 Oct 2025"
        );
        assert_eq!(
            format_week_range(d(2025, 12, 29), d(2026, 1, 4)),
            "29 Dec 2025 – 04 Jan 2026"
        );
    }

    #[test]
    fn test_datetime_input_round_trip() {
        let value = d(2025, 10, 21).and_hms_opt(9, 5, 0).unwrap();
        assert_eq!(to_datetime_input(value), "2025-10-21T09:05");
        assert_eq!(parse_datetime_input("2025-10-21T09:05"), Some(value));
        assert_eq!(parse_datetime_input("2025-10-21T09:05:00"), Some(value));
        assert_eq!(parse_datetime_input(""), None);
    }
}
