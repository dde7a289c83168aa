use contracts::domain::a004_bom::{review_lines, BomHeader, BomImportPreview, BomLineIssue, CreateBomRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a004_bom::api;
use crate::shared::list_utils::confirm;
use crate::shared::upload::selected_file;

#[derive(Clone, Copy)]
pub struct BomImportViewModel {
    pub preview: RwSignal<Option<BomImportPreview>>,
    pub issues: RwSignal<Vec<BomLineIssue>>,
    pub file_name: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub uploading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl BomImportViewModel {
    pub fn new() -> Self {
        Self {
            preview: RwSignal::new(None),
            issues: RwSignal::new(Vec::new()),
            file_name: RwSignal::new(None),
            error: RwSignal::new(None),
            uploading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    pub fn busy(&self) -> bool {
        self.uploading.get() || self.saving.get()
    }

    pub fn upload(&self, ev: &leptos::ev::Event) {
        let Some(file) = selected_file(ev) else {
            return;
        };
        let vm = *self;
        vm.file_name.set(Some(file.name()));
        vm.preview.set(None);
        vm.issues.set(Vec::new());
        vm.error.set(None);
        vm.uploading.set(true);
        spawn_local(async move {
            match api::import_bom(file).await {
                Ok(preview) => {
                    let issues = review_lines(&preview.lines);
                    log::info!(
                        "BOM preview {}: {} lines, {} issues, {} warnings",
                        preview.product_code,
                        preview.lines.len(),
                        issues.len(),
                        preview.warnings.len()
                    );
                    vm.issues.set(issues);
                    vm.preview.set(Some(preview));
                }
                Err(e) => {
                    log::error!("BOM upload failed: {}", e);
                    vm.error.set(Some(e));
                }
            }
            vm.uploading.set(false);
        });
    }

    /// Stores the previewed BOM. Lines with problems need an explicit
    /// confirmation.
    pub fn confirm_command(&self, on_created: Callback<BomHeader>) {
        let Some(preview) = self.preview.get_untracked() else {
            return;
        };
        let request = match CreateBomRequest::from_preview(&preview) {
            Ok(request) => request,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };
        let issue_count = self.issues.with_untracked(|i| i.len());
        if issue_count > 0
            && !confirm(&format!("{} problem(s) were found. Save the BOM anyway?", issue_count))
        {
            return;
        }

        let vm = *self;
        vm.saving.set(true);
        vm.error.set(None);
        spawn_local(async move {
            match api::create_bom(&request).await {
                Ok(header) => {
                    log::info!("BOM {} stored as #{}", header.product_code, header.id);
                    on_created.run(header);
                }
                Err(e) => {
                    log::error!("storing BOM {} failed: {}", request.product_code, e);
                    vm.error.set(Some(e));
                }
            }
            vm.saving.set(false);
        });
    }
}
