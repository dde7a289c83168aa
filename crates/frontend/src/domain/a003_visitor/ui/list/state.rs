use chrono::NaiveDate;
use contracts::domain::a003_visitor::{Visitor, VisitorQuery};
use contracts::shared::dates::to_wire_date;
use contracts::shared::validation::optional_text;
use leptos::prelude::*;
use std::collections::HashSet;

use crate::shared::config::config;
use crate::shared::date_utils::today;
use crate::shared::list_utils::SortState;

#[derive(Clone, Debug)]
pub struct VisitorListState {
    pub visitors: Vec<Visitor>,
    pub total_count: u64,
    pub page: usize,
    pub page_size: usize,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub search: String,
    pub sort: SortState,
    pub selected: HashSet<i64>,
    pub is_loaded: bool,
}

impl VisitorListState {
    fn new(day: NaiveDate, page_size: usize) -> Self {
        Self {
            visitors: Vec::new(),
            total_count: 0,
            page: 0,
            page_size,
            date_from: day,
            date_to: day,
            search: String::new(),
            sort: SortState {
                field: "entry",
                ascending: false,
            },
            selected: HashSet::new(),
            is_loaded: false,
        }
    }

    pub fn to_query(&self) -> VisitorQuery {
        VisitorQuery {
            date_from: to_wire_date(self.date_from),
            date_to: to_wire_date(self.date_to.max(self.date_from)),
            search: optional_text(&self.search),
            page: self.page + 1,
            page_size: self.page_size,
        }
    }

    pub fn is_single_day(&self, day: NaiveDate) -> bool {
        self.date_from == day && self.date_to == day
    }

    pub fn inside_count(&self) -> usize {
        self.visitors.iter().filter(|v| v.is_inside()).count()
    }
}

pub fn create_state() -> RwSignal<VisitorListState> {
    RwSignal::new(VisitorListState::new(today(), config().lists.page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_query_defaults_to_one_day() {
        let state = VisitorListState::new(d("2025-10-21"), 50);
        let query = state.to_query();
        assert_eq!(query, VisitorQuery::for_day(d("2025-10-21"), 50));
        assert!(state.is_single_day(d("2025-10-21")));
    }

    #[test]
    fn test_inverted_range_is_clamped() {
        let mut state = VisitorListState::new(d("2025-10-21"), 50);
        state.date_to = d("2025-10-19");
        state.search = "  acme ".into();
        state.page = 2;
        let query = state.to_query();
        assert_eq!(query.date_to, "2025-10-21");
        assert_eq!(query.search.as_deref(), Some("acme"));
        assert_eq!(query.page, 3);
    }
}
