use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;

use super::dto::{DayBucket, ProjectSummary};
use crate::shared::dates::{to_wire_date, week_days, weekday_name};

/// Seven day buckets starting at `week_start`, in order.
///
/// Buckets the server sent for dates inside the week are kept as they are
/// (including their raw date string); missing days get an empty bucket and
/// days outside the week are dropped.
pub fn normalize_days(days: Vec<DayBucket>, week_start: NaiveDate) -> Vec<DayBucket> {
    let mut incoming: Vec<(NaiveDate, DayBucket)> = days
        .into_iter()
        .filter_map(|day| match day.calendar_date() {
            Ok(date) => Some((date, day)),
            Err(e) => {
                log::warn!("dropping calendar day with unreadable date: {}", e);
                None
            }
        })
        .collect();

    week_days(week_start)
        .into_iter()
        .map(|date| {
            match incoming.iter().position(|(d, _)| *d == date) {
                Some(idx) => incoming.swap_remove(idx).1,
                None => DayBucket {
                    date: to_wire_date(date),
                    day_name: weekday_name(date.weekday()).to_string(),
                    grouped_productions: Vec::new(),
                },
            }
        })
        .collect()
}

/// Distinct projects across all groups of all days, in first-seen order.
pub fn derive_projects(days: &[DayBucket]) -> Vec<ProjectSummary> {
    let mut seen = HashSet::new();
    days.iter()
        .flat_map(|day| day.grouped_productions.iter())
        .filter(|group| seen.insert(group.project_id))
        .map(ProjectSummary::from)
        .collect()
}

/// Distinct production types across all groups, sorted for the filter
/// selector.
pub fn derive_production_types(days: &[DayBucket]) -> Vec<String> {
    let mut types: Vec<String> = days
        .iter()
        .flat_map(|day| day.grouped_productions.iter())
        .map(|group| group.production_type.clone())
        .filter(|t| !t.trim().is_empty())
        .collect();
    types.sort();
    types.dedup();
    types
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_production_calendar::dto::IssueGroup;
    use crate::shared::dates::parse_wire_date;

    fn d(s: &str) -> NaiveDate {
        parse_wire_date(s).unwrap()
    }

    fn group(project_id: i64, production_type: &str) -> IssueGroup {
        IssueGroup {
            project_id,
            project_code: Some(format!("P{project_id}")),
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

    #[test]
    fn test_normalize_fills_missing_days() {
        let days = normalize_days(
            vec![bucket("2025-10-21T00:00:00", vec![group(5, "Lazer")])],
            d("2025-10-20"),
        );
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].date, "2025-10-20");
        assert_eq!(days[0].day_name, "Monday");
        assert_eq!(days[1].date, "2025-10-21T00:00:00");
        assert_eq!(days[1].grouped_productions.len(), 1);
        assert_eq!(days[6].date, "2025-10-26");
        assert!(days
            .iter()
            .zip(week_days(d("2025-10-20")))
            .all(|(day, date)| day.calendar_date().unwrap() == date));
    }

    #[test]
    fn test_normalize_drops_out_of_week_and_garbage() {
        let days = normalize_days(
            vec![
                bucket("2025-10-27", vec![group(1, "Kaynak")]),
                bucket("not a date", vec![group(2, "Boya")]),
            ],
            d("2025-10-20"),
        );
        assert_eq!(days.len(), 7);
        assert!(days.iter().all(|day| day.grouped_productions.is_empty()));
    }

    #[test]
    fn test_projects_are_unique_in_first_seen_order() {
        let days = vec![
            bucket("2025-10-20", vec![group(7, "Lazer"), group(3, "Büküm")]),
            bucket("2025-10-21", vec![group(3, "Lazer"), group(9, "Kaynak"), group(7, "Boya")]),
        ];
        let ids: Vec<i64> = derive_projects(&days).iter().map(|p| p.project_id).collect();
        assert_eq!(ids, vec![7, 3, 9]);
        assert!(derive_projects(&[]).is_empty());
    }

    #[test]
    fn test_production_types_are_sorted_and_unique() {
        let days = vec![
            bucket("2025-10-20", vec![group(1, "Lazer"), group(2, "Boya")]),
            bucket("2025-10-21", vec![group(3, "Lazer"), group(4, "")]),
        ];
        assert_eq!(derive_production_types(&days), vec!["Boya", "Lazer"]);
    }
}
