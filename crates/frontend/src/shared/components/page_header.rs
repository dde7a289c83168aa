use crate::shared::icons::icon;
use leptos::prelude::*;

/// Title row of a page with an action slot on the right.
#[component]
pub fn PageHeader(
    #[prop(into)] title: Signal<String>,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    /// Icon name for `icon()`, shown before the title.
    #[prop(optional)]
    icon_name: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                {icon_name.map(icon)}
                <div class="page__header-text">
                    <h1 class="page__title">{move || title.get()}</h1>
                    {move || subtitle.get().map(|s| view! { <div class="page__subtitle">{s}</div> })}
                </div>
            </div>
            <div class="page__header-right">{children()}</div>
        </div>
    }
}
