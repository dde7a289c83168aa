//! Issue page opened from the production calendar.
//!
//! - view_model.rs: loading, client-side filters and date-edit commands
//! - date_cell.rs: inline planned-date editor

mod date_cell;
mod view_model;

use contracts::domain::a005_issue::{is_issue_overdue, DateField, Issue};
use leptos::prelude::*;

use self::date_cell::DateCell;
use self::view_model::IssueDetailsViewModel;
use crate::domain::a005_issue::filters::StatusFilter;
use crate::domain::a005_issue::scope::IssueScope;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_opt_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::project_colors::project_color;

#[component]
pub fn IssueDetailsPage(scope: IssueScope) -> impl IntoView {
    let title = scope.tab_title(None);
    let page_date = scope.date();
    let vm = IssueDetailsViewModel::new(scope);
    vm.load();

    let sortable = move |label: &'static str, field: &'static str| {
        view! {
            <th
                class="table__header-cell table__header-cell--sortable"
                on:click=move |_| vm.toggle_sort(field)
            >
                {label}
                <span class="sort-icon">{move || vm.sort.with(|s| s.indicator(field))}</span>
            </th>
        }
    };

    let row_view = move |issue: Issue| {
        let issue_id = issue.issue_id;
        let overdue = Signal::derive(move || {
            vm.issues.with(|list| {
                list.iter()
                    .find(|i| i.issue_id == issue_id)
                    .is_some_and(|i| is_issue_overdue(i, page_date))
            })
        });
        let planned_start = Signal::derive(move || {
            vm.issues.with(|list| {
                list.iter()
                    .find(|i| i.issue_id == issue_id)
                    .and_then(|i| i.planned_start_date)
            })
        });
        let planned_end = Signal::derive(move || {
            vm.issues.with(|list| {
                list.iter()
                    .find(|i| i.issue_id == issue_id)
                    .and_then(|i| i.planned_end_date)
            })
        });
        let done = issue
            .completion_percentage
            .map(|p| format!("{:.0}%", p))
            .unwrap_or_else(|| "—".to_string());

        view! {
            <tr class="table__row" class:table__row--overdue=overdue>
                <td class="table__cell">
                    <span
                        class="project-dot"
                        style=format!("background: {}", project_color(Some(issue.project_id)))
                    ></span>
                    {format!("#{}", issue_id)}
                </td>
                <td class="table__cell">
                    {issue.subject.clone()}
                    {move || overdue.get().then(|| view! {
                        <span class="badge badge--error issue-overdue-badge" title="Overdue">
                            {icon("alert-triangle")}
                            "Overdue"
                        </span>
                    })}
                </td>
                <td class="table__cell">{issue.project_name.clone()}</td>
                <td class="table__cell">{issue.tracker_name.clone().unwrap_or_default()}</td>
                <td class="table__cell">
                    <span class="badge" class:badge--success=issue.is_closed>
                        {issue.status_name.clone()}
                    </span>
                </td>
                <td class="table__cell">{issue.assigned_to.clone().unwrap_or_default()}</td>
                <DateCell vm=vm issue_id=issue_id field=DateField::PlannedStart value=planned_start />
                <DateCell vm=vm issue_id=issue_id field=DateField::PlannedEnd value=planned_end />
                <td class="table__cell">{format_opt_date(issue.closed_on)}</td>
                <td class="table__cell table__cell--right">{done}</td>
            </tr>
        }
    };

    view! {
        <PageFrame page_id="a005_issue--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title=title icon_name="list">
                <span class="page__counter">
                    {move || {
                        let shown = vm.visible_rows().len();
                        let total = vm.issues.with(|l| l.len());
                        format!("{} / {}", shown, total)
                    }}
                </span>
                <button
                    class="button button--secondary"
                    on:click=move |_| vm.load()
                    disabled=move || vm.loading.get()
                >
                    {icon("refresh")}
                    {move || if vm.loading.get() { "Loading..." } else { "Refresh" }}
                </button>
            </PageHeader>

            <ErrorBanner error=vm.error />

            <div class="issue-filters">
                <input
                    class="form__input"
                    type="search"
                    placeholder="Search by subject, #id, assignee..."
                    prop:value=move || vm.filter.with(|f| f.text.clone())
                    on:input=move |ev| vm.filter.update(|f| f.text = event_target_value(&ev))
                />
                <select
                    class="form__select"
                    prop:value=move || vm.filter.with(|f| f.status.as_str())
                    on:change=move |ev| {
                        vm.filter.update(|f| f.status = StatusFilter::parse(&event_target_value(&ev)))
                    }
                >
                    <option value="all">"All statuses"</option>
                    <option value="open">"Open"</option>
                    <option value="closed">"Closed"</option>
                </select>
                <label class="form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || vm.filter.with(|f| f.overdue_only)
                        on:change=move |ev| vm.filter.update(|f| f.overdue_only = event_target_checked(&ev))
                    />
                    "Overdue only"
                </label>
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {sortable("#", "id")}
                            {sortable("Subject", "subject")}
                            <th class="table__header-cell">"Project"</th>
                            <th class="table__header-cell">"Tracker"</th>
                            {sortable("Status", "status")}
                            {sortable("Assignee", "assignee")}
                            {sortable("Planned start", "planned_start")}
                            {sortable("Planned end", "planned_end")}
                            <th class="table__header-cell">"Closed on"</th>
                            <th class="table__header-cell">"Done"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || vm.visible_rows()
                            key=|issue| (issue.issue_id, issue.status_name.clone(), issue.is_closed)
                            children=row_view
                        />
                    </tbody>
                </table>
                <Show when=move || !vm.loading.get() && vm.issues.with(|l| l.is_empty())>
                    <div class="table__empty">"No issues for this selection."</div>
                </Show>
            </div>
        </PageFrame>
    }
}
