//! Calendar-date helpers.
//!
//! Dates are plain `NaiveDate` values everywhere in the program and travel as
//! `YYYY-MM-DD` strings. Incoming values may carry a time suffix
//! (`2025-10-21T00:00:00`, `2025-10-25T14:30:00Z`); only the date part is
//! kept, the suffix is never interpreted as an instant.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use thiserror::Error;

pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date: {0:?}")]
pub struct DateParseError(pub String);

/// Parse a wire date, ignoring everything after the first ten characters.
pub fn parse_wire_date(value: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = value.trim();
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, WIRE_DATE_FORMAT)
        .map_err(|_| DateParseError(value.to_string()))
}

pub fn to_wire_date(date: NaiveDate) -> String {
    date.format(WIRE_DATE_FORMAT).to_string()
}

/// Monday of the ISO week containing `date`.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// The seven consecutive dates starting at `start`.
pub fn week_days(start: NaiveDate) -> [NaiveDate; 7] {
    std::array::from_fn(|offset| start + Duration::days(offset as i64))
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Serde adapter for optional wire dates.
///
/// Accepts `null`, an empty string, `YYYY-MM-DD` or a datetime string and
/// always writes `YYYY-MM-DD` or `null`.
pub mod serde_opt_date {
    use super::{parse_wire_date, to_wire_date};
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&to_wire_date(*date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => parse_wire_date(value)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

/// Serde adapter for required wire dates.
pub mod serde_date {
    use super::{parse_wire_date, to_wire_date};
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_wire_date(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_wire_date(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        parse_wire_date(s).unwrap()
    }

    #[test]
    fn test_parse_ignores_time_suffix() {
        assert_eq!(d("2025-10-21T00:00:00"), d("2025-10-21"));
        assert_eq!(d("2025-10-25T23:59:59Z"), d("2025-10-25"));
        assert_eq!(d(" 2025-10-25 "), NaiveDate::from_ymd_opt(2025, 10, 25).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_wire_date("").is_err());
        assert!(parse_wire_date("25.10.2025").is_err());
        assert!(parse_wire_date("2025-13-01").is_err());
    }

    #[test]
    fn test_monday_of_is_monday_and_within_six_days() {
        let mut date = d("2024-12-25");
        for _ in 0..40 {
            let monday = monday_of(date);
            assert_eq!(monday.weekday(), Weekday::Mon);
            assert!(monday <= date);
            assert!((date - monday).num_days() <= 6);
            assert_eq!(monday_of(monday), monday);
            date = date + Duration::days(1);
        }
    }

    #[test]
    fn test_monday_of_known_dates() {
        assert_eq!(monday_of(d("2025-10-20")), d("2025-10-20"));
        assert_eq!(monday_of(d("2025-10-26")), d("2025-10-20"));
        assert_eq!(monday_of(d("2026-01-01")), d("2025-12-29"));
    }

    #[test]
    fn test_week_days_are_consecutive() {
        let days = week_days(d("2025-10-20"));
        assert_eq!(days[0], d("2025-10-20"));
        assert_eq!(days[6], d("2025-10-26"));
        assert!(days.windows(2).all(|w| (w[1] - w[0]).num_days() == 1));
    }

    #[test]
    fn test_optional_date_serde() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Holder {
            #[serde(with = "serde_opt_date", default)]
            value: Option<NaiveDate>,
        }

        let h: Holder = serde_json::from_str(r#"{"value":"2025-10-22T00:00:00"}"#).unwrap();
        assert_eq!(h.value, Some(d("2025-10-22")));
        let h: Holder = serde_json::from_str(r#"{"value":""}"#).unwrap();
        assert_eq!(h.value, None);
        let h: Holder = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(h.value, None);
        assert_eq!(
            serde_json::to_string(&Holder { value: None }).unwrap(),
            r#"{"value":null}"#
        );
        assert_eq!(
            serde_json::to_string(&Holder { value: Some(d("2025-01-05")) }).unwrap(),
            r#"{"value":"2025-01-05"}"#
        );
    }
}
