use contracts::domain::a004_bom::{review_lines, BomDetail};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::lines_table::BomLinesTable;
use crate::domain::a004_bom::api;
use crate::layout::global_context::use_app_context;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

pub const BOM_TAB_PREFIX: &str = "a004_bom_";

pub fn bom_tab_key(id: i64) -> String {
    format!("{}{}", BOM_TAB_PREFIX, id)
}

pub fn bom_id_from_tab_key(key: &str) -> Option<i64> {
    key.strip_prefix(BOM_TAB_PREFIX)?.parse().ok()
}

#[component]
pub fn BomDetailsPage(id: i64) -> impl IntoView {
    let detail = RwSignal::new(None::<BomDetail>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let ctx = use_app_context();
    let load = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::fetch_bom(id).await {
                Ok(bom) => {
                    ctx.update_tab_title(&bom_tab_key(id), &format!("BOM · {}", bom.header.product_code));
                    detail.set(Some(bom));
                }
                Err(e) => {
                    log::error!("BOM #{} not loaded: {}", id, e);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    };
    load();

    let title = Signal::derive(move || {
        detail.with(|d| match d {
            Some(d) => format!("BOM · {}", d.header.product_code),
            None => format!("BOM #{}", id),
        })
    });
    let subtitle = Signal::derive(move || {
        detail.with(|d| {
            d.as_ref().map(|d| {
                let mut parts = vec![d.header.product_name.clone()];
                if let Some(revision) = &d.header.revision {
                    parts.push(format!("rev. {}", revision));
                }
                if let Some(file) = &d.header.file_name {
                    parts.push(file.clone());
                }
                parts.join(" · ")
            })
        })
    });
    let lines = Signal::derive(move || detail.with(|d| d.as_ref().map(|d| d.lines.clone()).unwrap_or_default()));
    // stored BOMs are shown with the same checks as an import preview
    let issues = Signal::derive(move || lines.with(|l| review_lines(l)));

    view! {
        <PageFrame page_id="a004_bom--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title=title subtitle=subtitle icon_name="layers">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load() disabled=loading>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>
            <ErrorBanner error=error />
            <Show when=move || loading.get()>
                <div class="table__loading"><Spinner /></div>
            </Show>
            <BomLinesTable lines=lines issues=issues />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bom_tab_key() {
        assert_eq!(bom_tab_key(7), "a004_bom_7");
        assert_eq!(bom_id_from_tab_key("a004_bom_7"), Some(7));
        assert_eq!(bom_id_from_tab_key("a004_bom"), None);
    }
}
