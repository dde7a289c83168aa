use chrono::NaiveDate;
use contracts::domain::a005_issue::{DateCellKey, DateField};
use leptos::html;
use leptos::prelude::*;

use super::view_model::IssueDetailsViewModel;
use crate::shared::date_utils::format_opt_date;
use crate::shared::toast::use_toasts;

/// Planned date cell: click to edit, Enter or blur saves, Escape cancels.
#[component]
pub fn DateCell(
    vm: IssueDetailsViewModel,
    issue_id: i64,
    field: DateField,
    #[prop(into)] value: Signal<Option<NaiveDate>>,
) -> impl IntoView {
    let toasts = use_toasts();
    let cell = DateCellKey::new(issue_id, field);
    let input_ref = NodeRef::<html::Input>::new();

    Effect::new(move |_| {
        if vm.is_editing(cell) {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    view! {
        <td class="issue-date-cell" data-cell=cell.as_key()>
            <Show
                when=move || vm.is_editing(cell)
                fallback=move || {
                    view! {
                        <span
                            class="issue-date-cell__value"
                            class:issue-date-cell__value--saving=move || vm.is_saving(cell)
                            title=format!("Click to edit {}", field.label())
                            on:click=move |_| {
                                if !vm.is_saving(cell) {
                                    vm.begin_edit(issue_id, field);
                                }
                            }
                        >
                            {move || format_opt_date(value.get())}
                            <Show when=move || vm.is_saving(cell)>
                                <span class="issue-date-cell__saving">" …"</span>
                            </Show>
                        </span>
                    }
                }
            >
                <input
                    node_ref=input_ref
                    class="form__input issue-date-cell__input"
                    type="date"
                    prop:value=move || {
                        vm.editor.with(|e| e.temp_value().map(str::to_string).unwrap_or_default())
                    }
                    on:input=move |ev| vm.set_temp(event_target_value(&ev))
                    on:blur=move |_| vm.commit(toasts)
                    on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                        "Enter" => {
                            ev.prevent_default();
                            vm.commit(toasts);
                        }
                        "Escape" => vm.cancel(),
                        _ => {}
                    }
                />
            </Show>
        </td>
    }
}
