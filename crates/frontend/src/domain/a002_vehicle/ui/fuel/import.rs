use contracts::domain::a002_vehicle::FuelImportResult;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_vehicle::api;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::upload::selected_file;

/// Upload dialog for fuel card exports. Shows the per-row result of the
/// server-side import.
#[component]
pub fn FuelImportDialog(
    on_imported: Callback<FuelImportResult>,
    on_close: Callback<()>,
) -> impl IntoView {
    let uploading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let result = RwSignal::new(None::<FuelImportResult>);

    let on_file = move |ev: leptos::ev::Event| {
        let Some(file) = selected_file(&ev) else {
            return;
        };
        let name = file.name();
        uploading.set(true);
        error.set(None);
        result.set(None);
        spawn_local(async move {
            match api::import_fuel_purchases(file).await {
                Ok(r) => {
                    log::info!("fuel import {}: {}", name, r.summary());
                    result.set(Some(r.clone()));
                    on_imported.run(r);
                }
                Err(e) => {
                    log::error!("fuel import {} failed: {}", name, e);
                    error.set(Some(e));
                }
            }
            uploading.set(false);
        });
    };

    view! {
        <Modal title="Import fuel purchases".to_string() on_close=on_close>
            <ErrorBanner error=error />
            <label class="upload-box" class:upload-box--busy=move || uploading.get()>
                {icon("upload")}
                <span>{move || if uploading.get() { "Uploading..." } else { "Choose an Excel file (.xlsx)" }}</span>
                <input
                    type="file"
                    accept=".xlsx,.xls"
                    class="upload-box__input"
                    disabled=move || uploading.get()
                    on:change=on_file
                />
            </label>
            {move || result.get().map(|r| {
                let summary = r.summary();
                let errors = r.errors;
                view! {
                    <div class="import-result">
                        <div class="import-result__summary">{summary}</div>
                        {(!errors.is_empty()).then(|| view! {
                            <table class="table__data table--compact">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"Row"</th>
                                        <th class="table__header-cell">"Problem"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {errors.into_iter().map(|e| view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{e.row}</td>
                                            <td class="table__cell">{e.message}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        })}
                    </div>
                }
            })}
        </Modal>
    }
}
