use crate::shared::dates::{parse_wire_date, DateParseError};
use crate::shared::filter::FilterValue;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request for the seven-day grouped calendar.
///
/// Unset filters go out as explicit `null`s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyCalendarRequest {
    /// Monday of the requested week, `YYYY-MM-DD`
    pub start_date: String,
    pub parent_issue_id: FilterValue<i64>,
    pub project_id: FilterValue<i64>,
    pub production_type: FilterValue<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyCalendarResponse {
    #[serde(default)]
    pub week_start: String,
    #[serde(default)]
    pub week_end: String,
    #[serde(default)]
    pub days: Vec<DayBucket>,
}

/// One calendar day with its project / production-type aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayBucket {
    /// Date as sent by the server; may carry a time suffix.
    pub date: String,
    #[serde(default)]
    pub day_name: String,
    #[serde(default)]
    pub grouped_productions: Vec<IssueGroup>,
}

impl DayBucket {
    pub fn calendar_date(&self) -> Result<NaiveDate, DateParseError> {
        parse_wire_date(&self.date)
    }

    pub fn total_issues(&self) -> u32 {
        self.grouped_productions.iter().map(|g| g.issue_count).sum()
    }
}

/// All issues of one production type for one project on one day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueGroup {
    pub project_id: i64,
    #[serde(default)]
    pub project_code: Option<String>,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub production_type: String,
    #[serde(default)]
    pub issue_count: u32,
}

/// Entry of the project legend / project filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub project_id: i64,
    pub project_code: Option<String>,
    pub project_name: String,
}

impl From<&IssueGroup> for ProjectSummary {
    fn from(group: &IssueGroup) -> Self {
        Self {
            project_id: group.project_id,
            project_code: group.project_code.clone(),
            project_name: group.project_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_explicit_nulls() {
        let request = WeeklyCalendarRequest {
            start_date: "2025-10-20".into(),
            parent_issue_id: FilterValue::Unset,
            project_id: FilterValue::Value(5),
            production_type: FilterValue::Unset,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"startDate":"2025-10-20","parentIssueId":null,"projectId":5,"productionType":null}"#
        );
    }

    #[test]
    fn test_response_parses() {
        let json = r#"{
            "weekStart": "2025-10-20T00:00:00",
            "weekEnd": "2025-10-26T00:00:00",
            "days": [{
                "date": "2025-10-21T00:00:00",
                "dayName": "Salı",
                "groupedProductions": [
                    {"projectId": 5, "projectCode": "H5", "projectName": "Hat 5",
                     "productionType": "Lazer", "issueCount": 3}
                ]
            }]
        }"#;
        let response: WeeklyCalendarResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.days.len(), 1);
        let day = &response.days[0];
        assert_eq!(day.calendar_date().unwrap(), NaiveDate::from_ymd_opt(2025, 10, 21).unwrap());
        assert_eq!(day.total_issues(), 3);
        assert_eq!(day.grouped_productions[0].production_type, "Lazer");
    }
}
