use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::shared::dates::to_wire_date;
use crate::shared::validation::{optional_text, require, ValidationError};

/// Gate log entry: one visit from check-in to checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub visit_reason: String,
    #[serde(default)]
    pub host_name: Option<String>,
    #[serde(default)]
    pub vehicle_plate: Option<String>,
    pub entry_time: NaiveDateTime,
    #[serde(default)]
    pub exit_time: Option<NaiveDateTime>,
}

impl Visitor {
    /// Checked in and not yet checked out.
    pub fn is_inside(&self) -> bool {
        self.exit_time.is_none()
    }

    /// Time spent on site; open visits are measured up to `now`.
    pub fn duration(&self, now: NaiveDateTime) -> Duration {
        self.exit_time.unwrap_or(now) - self.entry_time
    }
}

/// `"2h 05m"`
pub fn format_duration(duration: Duration) -> String {
    let minutes = duration.num_minutes().max(0);
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub full_name: String,
    pub company: Option<String>,
    pub visit_reason: String,
    pub host_name: Option<String>,
    pub vehicle_plate: Option<String>,
    pub entry_time: NaiveDateTime,
    pub exit_time: Option<NaiveDateTime>,
}

impl VisitorDto {
    pub fn check_in(now: NaiveDateTime) -> Self {
        Self {
            id: None,
            full_name: String::new(),
            company: None,
            visit_reason: String::new(),
            host_name: None,
            vehicle_plate: None,
            entry_time: now,
            exit_time: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("Full name", &self.full_name)?;
        require("Visit reason", &self.visit_reason)?;
        if let Some(exit) = self.exit_time {
            if exit < self.entry_time {
                return Err(ValidationError::invalid(
                    "Exit time",
                    "cannot be earlier than entry time",
                ));
            }
        }
        Ok(())
    }

    pub fn normalized(&self) -> Self {
        Self {
            full_name: self.full_name.trim().to_string(),
            visit_reason: self.visit_reason.trim().to_string(),
            company: self.company.as_deref().and_then(optional_text),
            host_name: self.host_name.as_deref().and_then(optional_text),
            vehicle_plate: self.vehicle_plate.as_deref().and_then(optional_text),
            ..self.clone()
        }
    }
}

impl From<&Visitor> for VisitorDto {
    fn from(v: &Visitor) -> Self {
        Self {
            id: Some(v.id),
            full_name: v.full_name.clone(),
            company: v.company.clone(),
            visit_reason: v.visit_reason.clone(),
            host_name: v.host_name.clone(),
            vehicle_plate: v.vehicle_plate.clone(),
            entry_time: v.entry_time,
            exit_time: v.exit_time,
        }
    }
}

/// Query string of `GET /api/visitors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorQuery {
    pub date_from: String,
    pub date_to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub page: usize,
    pub page_size: usize,
}

impl VisitorQuery {
    /// First page of a single day.
    pub fn for_day(day: NaiveDate, page_size: usize) -> Self {
        Self {
            date_from: to_wire_date(day),
            date_to: to_wire_date(day),
            search: None,
            page: 1,
            page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn filled() -> VisitorDto {
        VisitorDto {
            full_name: "Ayşe Demir".into(),
            visit_reason: "Audit".into(),
            ..VisitorDto::check_in(at("2025-10-21 09:00"))
        }
    }

    #[test]
    fn test_required_fields() {
        let dto = VisitorDto::check_in(at("2025-10-21 09:00"));
        assert_eq!(dto.validate(), Err(ValidationError::Required("Full name")));
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_exit_before_entry_rejected() {
        let mut dto = filled();
        dto.exit_time = Some(at("2025-10-21 08:59"));
        assert!(matches!(dto.validate(), Err(ValidationError::Invalid { field: "Exit time", .. })));
        dto.exit_time = Some(at("2025-10-21 09:00"));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_duration_and_inside() {
        let visitor = Visitor {
            id: 4,
            full_name: "Ali".into(),
            company: None,
            visit_reason: "Delivery".into(),
            host_name: None,
            vehicle_plate: None,
            entry_time: at("2025-10-21 09:00"),
            exit_time: None,
        };
        assert!(visitor.is_inside());
        assert_eq!(format_duration(visitor.duration(at("2025-10-21 11:05"))), "2h 05m");
    }

    #[test]
    fn test_query_for_day() {
        let q = VisitorQuery::for_day(NaiveDate::from_ymd_opt(2025, 10, 21).unwrap(), 50);
        assert_eq!(q.date_from, "2025-10-21");
        assert_eq!(q.date_to, "2025-10-21");
        assert_eq!(q.page, 1);
    }
}
