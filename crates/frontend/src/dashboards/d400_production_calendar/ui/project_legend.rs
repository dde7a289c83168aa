use contracts::dashboards::d400_production_calendar::ProjectSummary;
use leptos::prelude::*;

use crate::shared::project_colors::color_for_project;

#[component]
pub fn ProjectLegend(#[prop(into)] projects: Signal<Vec<ProjectSummary>>) -> impl IntoView {
    view! {
        <Show when=move || !projects.with(|p| p.is_empty())>
            <div class="project-legend">
                <For
                    each=move || projects.get()
                    key=|p| p.project_id
                    children=|project| {
                        let color = color_for_project(project.project_id, project.project_code.as_deref());
                        view! {
                            <span class="project-legend__item" title=project.project_name.clone()>
                                <span class="project-dot" style=format!("background: {}", color)></span>
                                {project.project_code.clone().unwrap_or_else(|| project.project_name.clone())}
                            </span>
                        }
                    }
                />
            </div>
        </Show>
    }
}
