use contracts::dashboards::d400_production_calendar::{
    derive_production_types, derive_projects, normalize_days, CalendarFilterPatch, CalendarQuery,
    DayBucket, ProjectSummary,
};
use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::date_utils::today;

/// Week anchor, filters and the last successful calendar response.
///
/// Every change of `query` issues one fetch. Responses of superseded fetches
/// are dropped; a failed fetch keeps the previous data.
#[derive(Clone, Copy)]
pub struct WeeklyCalendar {
    pub query: RwSignal<CalendarQuery>,
    pub days: RwSignal<Vec<DayBucket>>,
    pub projects: RwSignal<Vec<ProjectSummary>>,
    pub production_types: RwSignal<Vec<String>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    generation: StoredValue<u64>,
}

impl WeeklyCalendar {
    fn new(anchor: NaiveDate) -> Self {
        Self {
            query: RwSignal::new(CalendarQuery::new(anchor)),
            days: RwSignal::new(Vec::new()),
            projects: RwSignal::new(Vec::new()),
            production_types: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            generation: StoredValue::new(0),
        }
    }

    pub fn go_to_previous_week(&self) {
        self.query.update(|q| q.go_to_previous_week());
    }

    pub fn go_to_next_week(&self) {
        self.query.update(|q| q.go_to_next_week());
    }

    pub fn go_to_today(&self) {
        self.query.update(|q| q.go_to_today(today()));
    }

    pub fn update_filters(&self, patch: CalendarFilterPatch) {
        self.query.update(|q| q.update_filters(patch));
    }

    pub fn reset_filters(&self) {
        self.query.update(|q| q.reset_filters());
    }

    /// False once a newer fetch started or the owning page was disposed.
    fn is_current(&self, generation: u64) -> bool {
        self.generation.try_get_value() == Some(generation)
    }

    /// Re-issues the fetch for the current query.
    pub fn refetch(&self) {
        self.fetch(self.query.get_untracked());
    }

    fn fetch(&self, query: CalendarQuery) {
        let generation = self.generation.get_value() + 1;
        self.generation.set_value(generation);
        let this = *self;
        let request = query.to_request();
        let week_start = query.week_start();

        self.loading.set(true);
        log::info!("fetching production calendar for week {}", request.start_date);
        spawn_local(async move {
            let result = api::fetch_weekly_calendar(&request).await;
            if !this.is_current(generation) {
                log::debug!("dropping calendar response for superseded week {}", request.start_date);
                return;
            }
            match result {
                Ok(response) => {
                    let days = normalize_days(response.days, week_start);
                    let groups: usize = days.iter().map(|d| d.grouped_productions.len()).sum();
                    log::info!("calendar week {}: {} groups", request.start_date, groups);
                    this.projects.set(derive_projects(&days));
                    this.production_types.set(derive_production_types(&days));
                    this.days.set(days);
                    this.error.set(None);
                }
                Err(e) => {
                    log::error!("calendar fetch for week {} failed: {}", request.start_date, e);
                    this.error.set(Some(e));
                }
            }
            this.loading.set(false);
        });
    }
}

/// Calendar state bound to the current component; fetches immediately and
/// again on every query change.
pub fn use_weekly_calendar() -> WeeklyCalendar {
    let calendar = WeeklyCalendar::new(today());
    Effect::new(move |_| {
        let query = calendar.query.get();
        calendar.fetch(query);
    });
    calendar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_is_not_current_after_page_disposed() {
        let owner = Owner::new();
        let calendar = owner.with(|| WeeklyCalendar::new(NaiveDate::from_ymd_opt(2025, 10, 22).unwrap()));
        assert!(calendar.is_current(0));

        drop(owner);
        assert!(!calendar.is_current(0));
    }
}
