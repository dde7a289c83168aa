use contracts::dashboards::d400_production_calendar::IssueGroup;
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::project_colors::{color_for_project, light_color, GROUP_ALPHA};

/// One project / production-type aggregate inside a day column.
#[component]
pub fn GroupCard(
    group: IssueGroup,
    #[prop(into)] overdue: Signal<bool>,
    on_open: Callback<()>,
) -> impl IntoView {
    let color = color_for_project(group.project_id, group.project_code.as_deref());
    let style = format!(
        "background: {}; border-left: 4px solid {};",
        light_color(color, GROUP_ALPHA),
        color
    );
    let project_label = group
        .project_code
        .clone()
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| group.project_name.clone());

    view! {
        <div
            class="group-card"
            class:group-card--overdue=move || overdue.get()
            style=style
            title=group.project_name.clone()
            on:click=move |_| on_open.run(())
        >
            <div class="group-card__header">
                <span class="group-card__type">{group.production_type.clone()}</span>
                <Show when=move || overdue.get()>
                    <span class="group-card__warning group-card__warning--blink" title="Overdue issues">
                        {icon("alert-triangle")}
                    </span>
                </Show>
            </div>
            <div class="group-card__footer">
                <span class="group-card__project" style=format!("color: {}", color)>{project_label}</span>
                <span class="badge group-card__count" style=format!("background: {}", color)>
                    {group.issue_count}
                </span>
            </div>
        </div>
    }
}
