mod view_model;

use contracts::domain::a004_bom::BomHeader;
use leptos::prelude::*;

use self::view_model::BomImportViewModel;
use super::lines_table::BomLinesTable;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

/// Upload an Excel BOM, review the parsed lines, then store it.
#[component]
pub fn BomImportReview(on_created: Callback<BomHeader>, on_close: Callback<()>) -> impl IntoView {
    let vm = BomImportViewModel::new();

    let actions = move || {
        view! {
            <button
                class="button button--primary"
                on:click=move |_| vm.confirm_command(on_created)
                disabled=move || vm.busy() || vm.preview.with(|p| p.is_none())
            >
                {icon("check")}
                "Save BOM"
            </button>
        }
    };

    view! {
        <Modal title="Import BOM".to_string() on_close=on_close action_buttons=actions>
            <ErrorBanner error=vm.error />
            <label class="upload-box" class:upload-box--busy=move || vm.uploading.get()>
                {icon("upload")}
                <span>
                    {move || match (vm.uploading.get(), vm.file_name.get()) {
                        (true, _) => "Reading file...".to_string(),
                        (false, Some(name)) => name,
                        (false, None) => "Choose an Excel file (.xlsx)".to_string(),
                    }}
                </span>
                <input
                    type="file"
                    accept=".xlsx,.xls"
                    class="upload-box__input"
                    disabled=move || vm.busy()
                    on:change=move |ev| vm.upload(&ev)
                />
            </label>

            {move || vm.preview.get().map(|preview| view! {
                <div class="bom-review">
                    <dl class="bom-review__header">
                        <dt>"Product"</dt>
                        <dd>{format!("{} {}", preview.product_code, preview.product_name)}</dd>
                        <dt>"Revision"</dt>
                        <dd>{preview.revision.clone().unwrap_or_default()}</dd>
                        <dt>"Lines"</dt>
                        <dd>{preview.lines.len()}</dd>
                    </dl>
                    {(!preview.warnings.is_empty()).then(|| view! {
                        <ul class="bom-review__warnings">
                            {preview.warnings.iter().map(|w| view! { <li>{w.clone()}</li> }).collect_view()}
                        </ul>
                    })}
                    <div class="bom-review__issues" class:bom-review__issues--ok=move || vm.issues.with(|i| i.is_empty())>
                        {move || match vm.issues.with(|i| i.len()) {
                            0 => "No problems found.".to_string(),
                            n => format!("{} problem(s) found; check the highlighted lines.", n),
                        }}
                    </div>
                </div>
            })}

            <Show when=move || vm.preview.with(|p| p.is_some())>
                <BomLinesTable
                    lines=Signal::derive(move || vm.preview.with(|p| p.as_ref().map(|p| p.lines.clone()).unwrap_or_default()))
                    issues=vm.issues
                />
            </Show>
        </Modal>
    }
}
