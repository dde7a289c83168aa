//! Overdue evaluation pass over a rendered week.
//!
//! For every group of every day up to today, the issue list behind the group
//! is fetched and the group is flagged when any of its issues is overdue
//! relative to that day. Fetches run with a bounded number in flight; a
//! failed fetch is logged and leaves its group unflagged.

use chrono::NaiveDate;
use futures::stream::{self, StreamExt};
use std::collections::{HashMap, HashSet};
use std::future::Future;

use super::dto::{DayBucket, IssueGroup};
use crate::domain::a005_issue::aggregate::{Issue, IssuesByGroupRequest};
use crate::domain::a005_issue::overdue::any_overdue;
use crate::shared::dates::to_wire_date;

/// One `(day, project, production type)` combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OverdueKey {
    /// Day date exactly as the calendar response carried it.
    pub raw_date: String,
    pub date: NaiveDate,
    pub project_id: i64,
    pub production_type: String,
}

impl OverdueKey {
    pub fn new(day: &DayBucket, date: NaiveDate, group: &IssueGroup) -> Self {
        Self {
            raw_date: day.date.clone(),
            date,
            project_id: group.project_id,
            production_type: group.production_type.clone(),
        }
    }

    /// `"{date}_{projectId}_{productionType}"`
    pub fn map_key(&self) -> String {
        overdue_map_key(&self.raw_date, self.project_id, &self.production_type)
    }

    pub fn to_request(&self) -> IssuesByGroupRequest {
        IssuesByGroupRequest {
            date: to_wire_date(self.date),
            project_id: self.project_id,
            production_type: self.production_type.clone(),
        }
    }
}

pub fn overdue_map_key(raw_date: &str, project_id: i64, production_type: &str) -> String {
    format!("{}_{}_{}", raw_date, project_id, production_type)
}

/// Keys flagged overdue during one pass. Absence means "not overdue" or
/// "not evaluated".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverdueMap(HashMap<String, bool>);

impl OverdueMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, key: &OverdueKey) {
        self.0.insert(key.map_key(), true);
    }

    pub fn contains_key(&self, map_key: &str) -> bool {
        self.0.get(map_key).copied().unwrap_or(false)
    }

    pub fn is_overdue(&self, day: &DayBucket, group: &IssueGroup) -> bool {
        self.contains_key(&overdue_map_key(
            &day.date,
            group.project_id,
            &group.production_type,
        ))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Keys to evaluate: every group of every day not after `today`, each once,
/// in day order then group order.
pub fn overdue_keys(days: &[DayBucket], today: NaiveDate) -> Vec<OverdueKey> {
    let mut seen = HashSet::new();
    let mut keys = Vec::new();
    for day in days {
        let date = match day.calendar_date() {
            Ok(date) => date,
            Err(e) => {
                log::warn!("skipping overdue check for day: {}", e);
                continue;
            }
        };
        if date > today {
            continue;
        }
        for group in &day.grouped_productions {
            let key = OverdueKey::new(day, date, group);
            if seen.insert(key.map_key()) {
                keys.push(key);
            }
        }
    }
    keys
}

/// Runs one evaluation pass.
///
/// `fetch` loads the issue list of a key; at most `concurrency` fetches are
/// in flight at once (minimum one). The resulting map depends only on the
/// fetched data, not on completion order.
pub async fn evaluate_overdue<F, Fut>(
    days: &[DayBucket],
    today: NaiveDate,
    concurrency: usize,
    fetch: F,
) -> OverdueMap
where
    F: Fn(OverdueKey) -> Fut,
    Fut: Future<Output = Result<Vec<Issue>, String>>,
{
    let keys = overdue_keys(days, today);
    if keys.is_empty() {
        return OverdueMap::new();
    }

    let checks = keys.into_iter().map(|key| {
        let pending = fetch(key.clone());
        async move {
            match pending.await {
                Ok(issues) => Some((any_overdue(&issues, key.date), key)),
                Err(e) => {
                    log::warn!("overdue check failed for {}: {}", key.map_key(), e);
                    None
                }
            }
        }
    });

    let results: Vec<Option<(bool, OverdueKey)>> = stream::iter(checks)
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    let mut map = OverdueMap::new();
    for (overdue, key) in results.into_iter().flatten() {
        if overdue {
            map.mark(&key);
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dates::parse_wire_date;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn d(s: &str) -> NaiveDate {
        parse_wire_date(s).unwrap()
    }

    fn group(project_id: i64, production_type: &str) -> IssueGroup {
        IssueGroup {
            project_id,
            project_code: None,
            project_name: format!("Project {project_id}"),
            production_type: production_type.to_string(),
            issue_count: 1,
        }
    }

    fn bucket(date: &str, groups: Vec<IssueGroup>) -> DayBucket {
        DayBucket {
            date: date.to_string(),
            day_name: String::new(),
            grouped_productions: groups,
        }
    }

    fn issue(closed_on: Option<&str>, planned_end: &str) -> Issue {
        Issue {
            issue_id: 1,
            subject: "Kesim".into(),
            tracker_name: None,
            project_id: 5,
            project_name: "Hat 5".into(),
            project_code: None,
            status_name: String::new(),
            is_closed: closed_on.is_some(),
            closed_on: closed_on.map(d),
            planned_start_date: None,
            planned_end_date: Some(d(planned_end)),
            completion_percentage: None,
            assigned_to: None,
        }
    }

    #[test]
    fn test_closed_late_issue_flags_its_day_and_group() {
        let days = vec![
            bucket("2025-10-20T00:00:00", vec![]),
            bucket("2025-10-21T00:00:00", vec![group(5, "Lazer")]),
        ];
        let requests = RefCell::new(Vec::new());
        let map = block_on(evaluate_overdue(&days, d("2025-10-26"), 4, |key| {
            requests.borrow_mut().push(key.to_request());
            async { Ok(vec![issue(Some("2025-10-25"), "2025-10-22")]) }
        }));

        assert!(map.contains_key("2025-10-21T00:00:00_5_Lazer"));
        assert!(map.is_overdue(&days[1], &days[1].grouped_productions[0]));
        assert_eq!(map.len(), 1);
        let requests = requests.into_inner();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].date, "2025-10-21");
        assert_eq!(requests[0].project_id, 5);
        assert_eq!(requests[0].production_type, "Lazer");
    }

    #[test]
    fn test_open_issue_is_judged_against_each_day() {
        let days = vec![
            bucket("2025-10-21", vec![group(5, "Lazer")]),
            bucket("2025-10-23", vec![group(5, "Lazer")]),
        ];
        let map = block_on(evaluate_overdue(&days, d("2025-10-26"), 2, |_| async {
            Ok(vec![issue(None, "2025-10-22")])
        }));
        assert!(!map.contains_key("2025-10-21_5_Lazer"));
        assert!(map.contains_key("2025-10-23_5_Lazer"));
    }

    #[test]
    fn test_future_days_are_not_fetched() {
        let days = vec![
            bucket("2025-10-22", vec![group(1, "Boya")]),
            bucket("2025-10-23", vec![group(2, "Boya")]),
        ];
        let keys = overdue_keys(&days, d("2025-10-22"));
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].project_id, 1);
    }

    #[test]
    fn test_duplicate_groups_are_fetched_once() {
        let days = vec![bucket(
            "2025-10-20",
            vec![group(1, "Boya"), group(1, "Boya"), group(1, "Kaynak")],
        )];
        let calls = RefCell::new(0);
        block_on(evaluate_overdue(&days, d("2025-10-20"), 1, |_| {
            *calls.borrow_mut() += 1;
            async { Ok(Vec::new()) }
        }));
        assert_eq!(calls.into_inner(), 2);
    }

    #[test]
    fn test_failed_fetch_only_skips_its_group() {
        let days = vec![bucket("2025-10-24", vec![group(1, "Boya"), group(2, "Boya")])];
        let map = block_on(evaluate_overdue(&days, d("2025-10-26"), 3, |key| async move {
            if key.project_id == 1 {
                Err("HTTP 500".to_string())
            } else {
                Ok(vec![issue(None, "2025-10-20")])
            }
        }));
        assert!(!map.contains_key("2025-10-24_1_Boya"));
        assert!(map.contains_key("2025-10-24_2_Boya"));
    }

    #[test]
    fn test_result_is_independent_of_concurrency() {
        let days = vec![
            bucket("2025-10-20", vec![group(1, "A"), group(2, "B")]),
            bucket("2025-10-21", vec![group(3, "C")]),
            bucket("2025-10-22", vec![group(4, "D")]),
        ];
        let fetch = |key: OverdueKey| async move {
            let end = if key.project_id % 2 == 0 { "2025-10-01" } else { "2025-12-01" };
            Ok::<_, String>(vec![issue(None, end)])
        };
        let sequential = block_on(evaluate_overdue(&days, d("2025-10-26"), 1, fetch));
        let parallel = block_on(evaluate_overdue(&days, d("2025-10-26"), 8, fetch));
        assert_eq!(sequential, parallel);
        assert_eq!(sequential.len(), 2);
    }

    #[test]
    fn test_zero_concurrency_still_runs() {
        let days = vec![bucket("2025-10-20", vec![group(2, "B")])];
        let map = block_on(evaluate_overdue(&days, d("2025-10-26"), 0, |_| async {
            Ok(vec![issue(None, "2025-10-01")])
        }));
        assert_eq!(map.len(), 1);
    }
}
