use contracts::dashboards::d400_production_calendar::{
    evaluate_overdue, DayBucket, IssueGroup, OverdueKey, OverdueMap,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::AbortController;

use crate::domain::a005_issue::api::fetch_issues_by_group;
use crate::shared::config::config;
use crate::shared::date_utils::today;

/// Overdue flags of the rendered week.
///
/// A new pass starts whenever the days change; it aborts the HTTP requests of
/// the previous pass and its results replace the map only while it is still
/// the latest pass.
#[derive(Clone, Copy)]
pub struct OverdueTracker {
    pub map: RwSignal<OverdueMap>,
    pub checking: RwSignal<bool>,
    generation: StoredValue<u64>,
    controller: StoredValue<Option<AbortController>, LocalStorage>,
}

impl OverdueTracker {
    fn new() -> Self {
        Self {
            map: RwSignal::new(OverdueMap::new()),
            checking: RwSignal::new(false),
            generation: StoredValue::new(0),
            controller: StoredValue::new_local(None),
        }
    }

    pub fn is_overdue(&self, day: &DayBucket, group: &IssueGroup) -> bool {
        self.map.with(|map| map.is_overdue(day, group))
    }

    /// False once a newer pass started or the owning page was disposed.
    fn is_current(&self, generation: u64) -> bool {
        self.generation.try_get_value() == Some(generation)
    }

    fn abort_running(&self) {
        if let Some(controller) = self.controller.get_value() {
            controller.abort();
        }
        self.controller.set_value(None);
    }

    fn start(&self, days: Vec<DayBucket>) {
        self.abort_running();
        let generation = self.generation.get_value() + 1;
        self.generation.set_value(generation);
        self.map.set(OverdueMap::new());

        if days.iter().all(|d| d.grouped_productions.is_empty()) {
            self.checking.set(false);
            return;
        }

        let controller = match AbortController::new() {
            Ok(c) => Some(c),
            Err(e) => {
                log::warn!("AbortController unavailable, pass cannot be cancelled: {:?}", e);
                None
            }
        };
        let abort_signal = controller.as_ref().map(|c| c.signal());
        self.controller.set_value(controller);
        self.checking.set(true);

        let this = *self;
        let concurrency = config().calendar.overdue_concurrency;
        spawn_local(async move {
            let started = js_sys::Date::now();
            log::info!(
                "overdue pass {} started, concurrency {}",
                generation,
                concurrency
            );
            let map = evaluate_overdue(&days, today(), concurrency, |key: OverdueKey| {
                let abort_signal = abort_signal.clone();
                async move { fetch_issues_by_group(&key.to_request(), abort_signal.as_ref()).await }
            })
            .await;

            if !this.is_current(generation) {
                log::debug!("overdue pass {} superseded", generation);
                return;
            }
            log::info!(
                "overdue pass {}: {} flagged in {:.0} ms",
                generation,
                map.len(),
                js_sys::Date::now() - started
            );
            this.map.set(map);
            this.checking.set(false);
            this.controller.try_set_value(None);
        });
    }
}

/// Runs an overdue pass for every new value of `days`.
pub fn use_overdue_evaluation(days: RwSignal<Vec<DayBucket>>) -> OverdueTracker {
    let tracker = OverdueTracker::new();
    Effect::new(move |_| {
        let days = days.get();
        tracker.start(days);
    });
    on_cleanup(move || tracker.abort_running());
    tracker
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_is_not_current_after_page_disposed() {
        let owner = Owner::new();
        let tracker = owner.with(OverdueTracker::new);
        assert!(tracker.is_current(0));
        assert!(!tracker.is_current(1));

        drop(owner);
        assert!(!tracker.is_current(0));
        tracker.controller.try_set_value(None);
    }
}
