use crate::shared::icons::icon;
use leptos::prelude::*;

/// Inline error banner; renders nothing while `error` is `None`.
#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|message| {
            view! {
                <div class="alert alert--error" role="alert">
                    {icon("alert-triangle")}
                    <span>{message}</span>
                </div>
            }
        })
    }
}
