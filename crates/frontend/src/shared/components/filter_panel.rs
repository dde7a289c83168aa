use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible filter area with an active-filter badge.
///
/// `toolbar` stays visible while collapsed (pagination, refresh).
#[component]
pub fn FilterPanel(
    is_expanded: RwSignal<bool>,
    #[prop(into)] active_filters_count: Signal<usize>,
    #[prop(optional, into)] toolbar: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel__header">
                <div
                    class="filter-panel__toggle"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
                <div class="filter-panel__toolbar">{toolbar.map(|t| t.run())}</div>
            </div>
            <Show when=move || is_expanded.get()>
                <div class="filter-panel__content">{children()}</div>
            </Show>
        </div>
    }
}
