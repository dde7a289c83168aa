use leptos::prelude::*;

/// Row selection cell. Clicks do not reach the row's own click handler.
#[component]
pub fn TableCheckbox(
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <td class="table__cell table__cell--checkbox" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </td>
    }
}

/// Header cell toggling the selection of every row on the page.
#[component]
pub fn TableSelectAll(
    #[prop(into)] all_selected: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <th class="table__header-cell table__header-cell--checkbox">
            <input
                type="checkbox"
                class="table__checkbox"
                title="Select all"
                prop:checked=all_selected
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </th>
    }
}
