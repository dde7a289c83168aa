use chrono::NaiveDate;

use super::aggregate::Issue;

/// Whether `issue` counts as overdue when painted on `rendered_day`.
///
/// A closed issue is overdue when it was closed after its planned end; that
/// is a historical fact and ignores `rendered_day`. An open issue (or a
/// closed one without a close date) is overdue when `rendered_day` is past
/// its planned end. Without a planned end nothing can be said.
pub fn is_issue_overdue(issue: &Issue, rendered_day: NaiveDate) -> bool {
    let Some(planned_end) = issue.planned_end_date else {
        return false;
    };
    match (issue.is_closed, issue.closed_on) {
        (true, Some(closed_on)) => closed_on > planned_end,
        _ => rendered_day > planned_end,
    }
}

/// True when any issue of the list is overdue on `rendered_day`.
pub fn any_overdue(issues: &[Issue], rendered_day: NaiveDate) -> bool {
    issues.iter().any(|issue| is_issue_overdue(issue, rendered_day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dates::parse_wire_date;

    fn d(s: &str) -> NaiveDate {
        parse_wire_date(s).unwrap()
    }

    fn issue(is_closed: bool, closed_on: Option<&str>, planned_end: Option<&str>) -> Issue {
        Issue {
            issue_id: 1,
            subject: "Kesim".into(),
            tracker_name: None,
            project_id: 5,
            project_name: "Hat 5".into(),
            project_code: None,
            status_name: if is_closed { "Closed" } else { "New" }.into(),
            is_closed,
            closed_on: closed_on.map(d),
            planned_start_date: None,
            planned_end_date: planned_end.map(d),
            completion_percentage: None,
            assigned_to: None,
        }
    }

    #[test]
    fn test_closed_late_is_overdue() {
        let late = issue(true, Some("2025-10-23"), Some("2025-10-20"));
        assert!(is_issue_overdue(&late, d("2025-10-20")));
        assert!(is_issue_overdue(&late, d("2025-10-01")));
    }

    #[test]
    fn test_closed_on_time_is_not_overdue() {
        let on_time = issue(true, Some("2025-10-18"), Some("2025-10-20"));
        assert!(!is_issue_overdue(&on_time, d("2025-10-30")));
        let same_day = issue(true, Some("2025-10-20"), Some("2025-10-20"));
        assert!(!is_issue_overdue(&same_day, d("2025-10-30")));
    }

    #[test]
    fn test_open_issue_depends_on_rendered_day() {
        let open = issue(false, None, Some("2025-10-20"));
        assert!(is_issue_overdue(&open, d("2025-10-22")));
        assert!(!is_issue_overdue(&open, d("2025-10-19")));
        assert!(!is_issue_overdue(&open, d("2025-10-20")));
    }

    #[test]
    fn test_closed_without_close_date_behaves_as_open() {
        let closed = issue(true, None, Some("2025-10-20"));
        assert!(is_issue_overdue(&closed, d("2025-10-21")));
        assert!(!is_issue_overdue(&closed, d("2025-10-20")));
    }

    #[test]
    fn test_missing_planned_end_is_never_overdue() {
        assert!(!is_issue_overdue(&issue(false, None, None), d("2030-01-01")));
        assert!(!is_issue_overdue(&issue(true, Some("2030-01-01"), None), d("2030-01-01")));
    }

    #[test]
    fn test_any_overdue_over_list() {
        let list = vec![
            issue(true, Some("2025-10-18"), Some("2025-10-20")),
            issue(false, None, Some("2025-10-21")),
        ];
        assert!(!any_overdue(&list, d("2025-10-21")));
        assert!(any_overdue(&list, d("2025-10-22")));
        assert!(!any_overdue(&[], d("2025-10-22")));
    }
}
