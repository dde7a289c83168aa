use chrono::{Duration, NaiveDate};

use super::dto::WeeklyCalendarRequest;
use crate::shared::dates::{monday_of, to_wire_date};
use crate::shared::filter::FilterValue;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarFilters {
    pub parent_issue_id: FilterValue<i64>,
    pub project_id: FilterValue<i64>,
    /// `Unset` is the "all" production type.
    pub production_type: FilterValue<String>,
}

impl CalendarFilters {
    pub fn active_count(&self) -> usize {
        [
            self.parent_issue_id.is_set(),
            self.project_id.is_set(),
            self.production_type.is_set(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}

/// Partial filter update; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarFilterPatch {
    pub parent_issue_id: Option<FilterValue<i64>>,
    pub project_id: Option<FilterValue<i64>>,
    pub production_type: Option<FilterValue<String>>,
}

/// Week anchor plus filters; everything the calendar fetch depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarQuery {
    pub anchor: NaiveDate,
    pub filters: CalendarFilters,
}

impl CalendarQuery {
    pub fn new(anchor: NaiveDate) -> Self {
        Self {
            anchor,
            filters: CalendarFilters::default(),
        }
    }

    pub fn week_start(&self) -> NaiveDate {
        monday_of(self.anchor)
    }

    pub fn week_end(&self) -> NaiveDate {
        self.week_start() + Duration::days(6)
    }

    pub fn go_to_previous_week(&mut self) {
        self.anchor = self.anchor - Duration::days(7);
    }

    pub fn go_to_next_week(&mut self) {
        self.anchor = self.anchor + Duration::days(7);
    }

    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.anchor = today;
    }

    pub fn update_filters(&mut self, patch: CalendarFilterPatch) {
        if let Some(parent) = patch.parent_issue_id {
            self.filters.parent_issue_id = parent;
        }
        if let Some(project) = patch.project_id {
            self.filters.project_id = project;
        }
        if let Some(production_type) = patch.production_type {
            self.filters.production_type = production_type;
        }
    }

    pub fn reset_filters(&mut self) {
        self.filters = CalendarFilters::default();
    }

    pub fn to_request(&self) -> WeeklyCalendarRequest {
        WeeklyCalendarRequest {
            start_date: to_wire_date(self.week_start()),
            parent_issue_id: self.filters.parent_issue_id.clone(),
            project_id: self.filters.project_id.clone(),
            production_type: self.filters.production_type.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dates::parse_wire_date;

    fn d(s: &str) -> NaiveDate {
        parse_wire_date(s).unwrap()
    }

    #[test]
    fn test_navigation_moves_by_whole_weeks() {
        let mut query = CalendarQuery::new(d("2025-10-23"));
        assert_eq!(query.week_start(), d("2025-10-20"));
        assert_eq!(query.week_end(), d("2025-10-26"));

        query.go_to_next_week();
        assert_eq!(query.week_start(), d("2025-10-27"));
        query.go_to_previous_week();
        query.go_to_previous_week();
        assert_eq!(query.week_start(), d("2025-10-13"));

        query.go_to_today(d("2026-01-01"));
        assert_eq!(query.week_start(), d("2025-12-29"));
    }

    #[test]
    fn test_patch_merges_shallowly() {
        let mut query = CalendarQuery::new(d("2025-10-20"));
        query.update_filters(CalendarFilterPatch {
            project_id: Some(FilterValue::Value(5)),
            ..Default::default()
        });
        query.update_filters(CalendarFilterPatch {
            production_type: Some(FilterValue::production_type("Lazer")),
            ..Default::default()
        });
        assert_eq!(query.filters.project_id, FilterValue::Value(5));
        assert_eq!(
            query.filters.production_type,
            FilterValue::Value("Lazer".to_string())
        );
        assert_eq!(query.filters.active_count(), 2);

        query.update_filters(CalendarFilterPatch {
            production_type: Some(FilterValue::production_type("all")),
            ..Default::default()
        });
        assert_eq!(query.filters.production_type, FilterValue::Unset);
        assert_eq!(query.filters.project_id, FilterValue::Value(5));

        query.reset_filters();
        assert_eq!(query.filters, CalendarFilters::default());
    }

    #[test]
    fn test_request_uses_monday_and_nulls() {
        let query = CalendarQuery::new(d("2025-10-22"));
        let request = query.to_request();
        assert_eq!(request.start_date, "2025-10-20");
        let json = serde_json::to_value(&request).unwrap();
        assert!(json["parentIssueId"].is_null());
        assert!(json["projectId"].is_null());
        assert!(json["productionType"].is_null());
    }
}
