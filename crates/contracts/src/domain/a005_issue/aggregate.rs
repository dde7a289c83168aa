use crate::shared::dates::serde_opt_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::date_edit::DateField;

/// Production issue as delivered by the issue-tracker proxy.
///
/// The tracker owns this record; the portal holds a transient copy per view
/// and only ever writes back the two planned dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub issue_id: i64,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub tracker_name: Option<String>,
    pub project_id: i64,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub project_code: Option<String>,
    #[serde(default)]
    pub status_name: String,
    #[serde(default)]
    pub is_closed: bool,
    #[serde(default, with = "serde_opt_date")]
    pub closed_on: Option<NaiveDate>,
    #[serde(default, with = "serde_opt_date")]
    pub planned_start_date: Option<NaiveDate>,
    #[serde(default, with = "serde_opt_date")]
    pub planned_end_date: Option<NaiveDate>,
    #[serde(default)]
    pub completion_percentage: Option<f64>,
    #[serde(default)]
    pub assigned_to: Option<String>,
}

impl Issue {
    pub fn planned_date(&self, field: DateField) -> Option<NaiveDate> {
        match field {
            DateField::PlannedStart => self.planned_start_date,
            DateField::PlannedEnd => self.planned_end_date,
        }
    }

    pub fn set_planned_date(&mut self, field: DateField, value: Option<NaiveDate>) {
        match field {
            DateField::PlannedStart => self.planned_start_date = value,
            DateField::PlannedEnd => self.planned_end_date = value,
        }
    }

    /// Case-insensitive match against id, subject, assignee, status and tracker.
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.issue_id.to_string().contains(&needle)
            || self.subject.to_lowercase().contains(&needle)
            || self.status_name.to_lowercase().contains(&needle)
            || self
                .assigned_to
                .as_deref()
                .is_some_and(|a| a.to_lowercase().contains(&needle))
            || self
                .tracker_name
                .as_deref()
                .is_some_and(|t| t.to_lowercase().contains(&needle))
    }
}

/// Issues of one project / production type on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuesByGroupRequest {
    /// `YYYY-MM-DD`
    pub date: String,
    pub project_id: i64,
    pub production_type: String,
}

/// All issues of one day, regardless of group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuesByDateRequest {
    /// `YYYY-MM-DD`
    pub date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueListResponse {
    #[serde(default)]
    pub issues: Vec<Issue>,
}

/// Partial update of planned dates. Only the edited field is non-null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIssueDatesRequest {
    pub issue_id: i64,
    pub planned_start_date: Option<String>,
    pub planned_end_date: Option<String>,
    pub updated_by: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIssueDatesResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tracker_payload() {
        let json = r#"{
            "issueId": 1201,
            "subject": "Lazer kesim - gövde",
            "trackerName": "Üretim",
            "projectId": 5,
            "projectName": "Hat 5",
            "projectCode": "H5",
            "statusName": "Kapalı",
            "isClosed": true,
            "closedOn": "2025-10-25T14:03:11Z",
            "plannedStartDate": "2025-10-20",
            "plannedEndDate": "2025-10-22T00:00:00",
            "completionPercentage": 100,
            "assignedTo": null
        }"#;
        let issue: Issue = serde_json::from_str(json).unwrap();
        assert_eq!(issue.issue_id, 1201);
        assert_eq!(issue.closed_on, NaiveDate::from_ymd_opt(2025, 10, 25));
        assert_eq!(issue.planned_end_date, NaiveDate::from_ymd_opt(2025, 10, 22));
        assert_eq!(issue.completion_percentage, Some(100.0));
        assert!(issue.assigned_to.is_none());
    }

    #[test]
    fn test_update_request_keeps_nulls() {
        let request = UpdateIssueDatesRequest {
            issue_id: 7,
            planned_start_date: Some("2025-10-21".into()),
            planned_end_date: None,
            updated_by: "planner".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["plannedStartDate"], "2025-10-21");
        assert!(json["plannedEndDate"].is_null());
        assert!(json.as_object().unwrap().contains_key("plannedEndDate"));
    }

    #[test]
    fn test_matches_text() {
        let issue: Issue = serde_json::from_str(
            r#"{"issueId": 88, "projectId": 1, "subject": "Büküm", "assignedTo": "Ayşe K."}"#,
        )
        .unwrap();
        assert!(issue.matches_text(""));
        assert!(issue.matches_text("88"));
        assert!(issue.matches_text("ayşe"));
        assert!(!issue.matches_text("kaynak"));
    }
}
