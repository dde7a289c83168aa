use contracts::dashboards::d400_production_calendar::DayBucket;
use leptos::prelude::*;

use crate::dashboards::d400_production_calendar::overdue::OverdueTracker;
use crate::domain::a005_issue::scope::IssueScope;
use crate::layout::global_context::use_app_context;
use crate::shared::date_utils::{format_date, today};
use crate::shared::icons::icon;

use super::group_card::GroupCard;

/// Seven day columns. Day headers open the day's issue page, cards open the
/// group's.
#[component]
pub fn CalendarGrid(
    #[prop(into)] days: Signal<Vec<DayBucket>>,
    overdue: OverdueTracker,
) -> impl IntoView {
    let ctx = use_app_context();
    let open_scope = move |scope: IssueScope, project_name: Option<String>| {
        let title = scope.tab_title(project_name.as_deref());
        ctx.open_tab(&scope.tab_key(), &title);
    };

    let day_view = move |day: DayBucket| {
        let date = day.calendar_date().ok();
        let is_today = date == Some(today());
        let is_past = date.is_some_and(|d| d < today());
        let heading = date.map(format_date).unwrap_or_else(|| day.date.clone());
        let total = day.total_issues();
        let day_for_cards = day.clone();

        let cards = day
            .grouped_productions
            .iter()
            .cloned()
            .map(|group| {
                let day_ref = day_for_cards.clone();
                let group_ref = group.clone();
                let flagged = Signal::derive(move || overdue.is_overdue(&day_ref, &group_ref));
                let scope = date.map(|date| IssueScope::Group {
                    date,
                    project_id: group.project_id,
                    production_type: group.production_type.clone(),
                });
                let project_name = group.project_name.clone();
                let on_open = Callback::new(move |_| {
                    if let Some(scope) = scope.clone() {
                        open_scope(scope, Some(project_name.clone()));
                    }
                });
                view! { <GroupCard group=group overdue=flagged on_open=on_open /> }
            })
            .collect_view();

        view! {
            <div
                class="calendar-day"
                class:calendar-day--today=is_today
                class:calendar-day--past=is_past
            >
                <div
                    class="calendar-day__header"
                    title="Show all issues of the day"
                    on:click=move |_| {
                        if let Some(date) = date {
                            open_scope(IssueScope::Day { date }, None);
                        }
                    }
                >
                    <span class="calendar-day__name">{day.day_name.clone()}</span>
                    <span class="calendar-day__date">{heading}</span>
                    {(total > 0).then(|| view! { <span class="badge">{total}</span> })}
                </div>
                <div class="calendar-day__body">
                    {if day.grouped_productions.is_empty() {
                        view! {
                            <div class="calendar-day__empty">{icon("calendar")}</div>
                        }
                        .into_any()
                    } else {
                        cards.into_any()
                    }}
                </div>
            </div>
        }
    };

    view! {
        <div class="calendar-grid">
            <For
                each=move || days.get()
                key=|day| (day.date.clone(), day.grouped_productions.clone())
                children=day_view
            />
        </div>
    }
}
