use contracts::dashboards::d400_production_calendar::CalendarFilterPatch;
use contracts::shared::filter::{FilterValue, ALL_PRODUCTION_TYPES};
use leptos::prelude::*;
use thaw::*;

use crate::dashboards::d400_production_calendar::state::WeeklyCalendar;
use crate::shared::icons::icon;

#[component]
pub fn FilterBar(calendar: WeeklyCalendar) -> impl IntoView {
    let filters = move || calendar.query.with(|q| q.filters.clone());

    let parent_text = move || {
        filters()
            .parent_issue_id
            .as_option()
            .map(|id| id.to_string())
            .unwrap_or_default()
    };
    let project_value = move || {
        filters()
            .project_id
            .as_option()
            .map(|id| id.to_string())
            .unwrap_or_default()
    };
    let type_value = move || {
        filters()
            .production_type
            .into_option()
            .unwrap_or_else(|| ALL_PRODUCTION_TYPES.to_string())
    };
    let active = move || calendar.query.with(|q| q.filters.active_count());

    view! {
        <Flex class="calendar-filters" align=FlexAlign::End gap=FlexGap::Medium>
            <div class="form__group">
                <Label>"Parent issue #"</Label>
                <input
                    class="form__input"
                    type="number"
                    min="1"
                    placeholder="any"
                    prop:value=parent_text
                    on:change=move |ev| {
                        let value = FilterValue::from_id_text(&event_target_value(&ev));
                        calendar.update_filters(CalendarFilterPatch {
                            parent_issue_id: Some(value),
                            ..Default::default()
                        });
                    }
                />
            </div>
            <div class="form__group">
                <Label>"Project"</Label>
                <select
                    class="form__select"
                    prop:value=project_value
                    on:change=move |ev| {
                        let value = FilterValue::from_id_text(&event_target_value(&ev));
                        calendar.update_filters(CalendarFilterPatch {
                            project_id: Some(value),
                            ..Default::default()
                        });
                    }
                >
                    <option value="">"All projects"</option>
                    <For
                        each=move || calendar.projects.get()
                        key=|p| p.project_id
                        children=move |p| {
                            let id = p.project_id.to_string();
                            let label = match &p.project_code {
                                Some(code) if !code.is_empty() => format!("{} · {}", code, p.project_name),
                                _ => p.project_name.clone(),
                            };
                            let selected_id = id.clone();
                            view! {
                                <option value=id selected=move || project_value() == selected_id>{label}</option>
                            }
                        }
                    />
                </select>
            </div>
            <div class="form__group">
                <Label>"Production type"</Label>
                <select
                    class="form__select"
                    prop:value=type_value
                    on:change=move |ev| {
                        let value = FilterValue::production_type(&event_target_value(&ev));
                        calendar.update_filters(CalendarFilterPatch {
                            production_type: Some(value),
                            ..Default::default()
                        });
                    }
                >
                    <option value=ALL_PRODUCTION_TYPES>"All types"</option>
                    <For
                        each=move || calendar.production_types.get()
                        key=|t| t.clone()
                        children=move |t| {
                            let selected_type = t.clone();
                            let value = t.clone();
                            view! {
                                <option value=value selected=move || type_value() == selected_type>{t}</option>
                            }
                        }
                    />
                </select>
            </div>
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| calendar.reset_filters()
                disabled=Signal::derive(move || active() == 0)
            >
                {icon("x")}
                {move || format!(" Reset ({})", active())}
            </Button>
        </Flex>
    }
}
