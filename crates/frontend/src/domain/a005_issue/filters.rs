use chrono::NaiveDate;
use contracts::domain::a005_issue::{is_issue_overdue, Issue};
use std::cmp::Ordering;

use crate::shared::list_utils::{cmp_opt, Sortable};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Open,
    Closed,
}

impl StatusFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Open => "open",
            StatusFilter::Closed => "closed",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "open" => StatusFilter::Open,
            "closed" => StatusFilter::Closed,
            _ => StatusFilter::All,
        }
    }

    fn accepts(self, issue: &Issue) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Open => !issue.is_closed,
            StatusFilter::Closed => issue.is_closed,
        }
    }
}

/// Client-side filters of the issue page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueFilter {
    pub text: String,
    pub status: StatusFilter,
    pub overdue_only: bool,
}

impl IssueFilter {
    pub fn is_active(&self) -> bool {
        *self != IssueFilter::default()
    }

    /// `page_date` is the day the page was opened for; overdue is judged
    /// against it.
    pub fn accepts(&self, issue: &Issue, page_date: NaiveDate) -> bool {
        self.status.accepts(issue)
            && issue.matches_text(&self.text)
            && (!self.overdue_only || is_issue_overdue(issue, page_date))
    }

    pub fn apply(&self, issues: &[Issue], page_date: NaiveDate) -> Vec<Issue> {
        issues
            .iter()
            .filter(|issue| self.accepts(issue, page_date))
            .cloned()
            .collect()
    }
}

/// Sortable column wrapper; `Issue` lives in contracts.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueRow(pub Issue);

impl Sortable for IssueRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        let (a, b) = (&self.0, &other.0);
        match field {
            "id" => a.issue_id.cmp(&b.issue_id),
            "subject" => a.subject.to_lowercase().cmp(&b.subject.to_lowercase()),
            "status" => a.status_name.cmp(&b.status_name),
            "assignee" => cmp_opt(&a.assigned_to, &b.assigned_to),
            "planned_start" => cmp_opt(&a.planned_start_date, &b.planned_start_date),
            "planned_end" => cmp_opt(&a.planned_end_date, &b.planned_end_date),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::dates::parse_wire_date;

    fn d(s: &str) -> NaiveDate {
        parse_wire_date(s).unwrap()
    }

    fn issue(id: i64, subject: &str, closed: bool, planned_end: Option<&str>) -> Issue {
        Issue {
            issue_id: id,
            subject: subject.into(),
            tracker_name: None,
            project_id: 5,
            project_name: "Hat 5".into(),
            project_code: None,
            status_name: if closed { "Closed".into() } else { "New".into() },
            is_closed: closed,
            closed_on: None,
            planned_start_date: None,
            planned_end_date: planned_end.map(d),
            completion_percentage: None,
            assigned_to: Some("Ayşe".into()),
        }
    }

    #[test]
    fn test_status_and_text() {
        let issues = vec![
            issue(101, "Laser cut panel", false, None),
            issue(102, "Weld frame", true, None),
        ];
        let page = d("2025-10-21");
        let open = IssueFilter {
            status: StatusFilter::Open,
            ..Default::default()
        };
        assert_eq!(open.apply(&issues, page).len(), 1);
        let text = IssueFilter {
            text: "WELD".into(),
            ..Default::default()
        };
        assert_eq!(text.apply(&issues, page)[0].issue_id, 102);
        let by_id = IssueFilter {
            text: "101".into(),
            ..Default::default()
        };
        assert_eq!(by_id.apply(&issues, page)[0].issue_id, 101);
        let by_assignee = IssueFilter {
            text: "ayşe".into(),
            ..Default::default()
        };
        assert_eq!(by_assignee.apply(&issues, page).len(), 2);
    }

    #[test]
    fn test_overdue_only_uses_page_date() {
        let issues = vec![
            issue(1, "a", false, Some("2025-10-20")),
            issue(2, "b", false, Some("2025-10-25")),
            issue(3, "c", false, None),
        ];
        let filter = IssueFilter {
            overdue_only: true,
            ..Default::default()
        };
        let ids: Vec<i64> = filter
            .apply(&issues, d("2025-10-21"))
            .iter()
            .map(|i| i.issue_id)
            .collect();
        assert_eq!(ids, vec![1]);
        assert!(filter.is_active());
        assert!(!IssueFilter::default().is_active());
    }

    #[test]
    fn test_status_parse() {
        for status in [StatusFilter::All, StatusFilter::Open, StatusFilter::Closed] {
            assert_eq!(StatusFilter::parse(status.as_str()), status);
        }
        assert_eq!(StatusFilter::parse("bogus"), StatusFilter::All);
    }
}
