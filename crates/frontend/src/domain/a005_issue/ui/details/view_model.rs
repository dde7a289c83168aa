use contracts::domain::a005_issue::{CommitOutcome, DateCellKey, DateEditor, DateField, Issue};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a005_issue::api;
use crate::domain::a005_issue::filters::{IssueFilter, IssueRow};
use crate::domain::a005_issue::scope::IssueScope;
use crate::shared::list_utils::{sort_list, SortState};
use crate::shared::toast::ToastService;
use crate::system::auth::storage::current_user_name;

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// State of one issue page.
///
/// `issues` is the page's working copy; date edits patch it in place before
/// the server confirms and roll back on failure.
#[derive(Clone, Copy)]
pub struct IssueDetailsViewModel {
    pub scope: StoredValue<IssueScope>,
    pub issues: RwSignal<Vec<Issue>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub filter: RwSignal<IssueFilter>,
    pub sort: RwSignal<SortState>,
    pub editor: RwSignal<DateEditor>,
}

impl IssueDetailsViewModel {
    pub fn new(scope: IssueScope) -> Self {
        Self {
            scope: StoredValue::new(scope),
            issues: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            filter: RwSignal::new(IssueFilter::default()),
            sort: RwSignal::new(SortState::new("id")),
            editor: RwSignal::new(DateEditor::new()),
        }
    }

    pub fn load(&self) {
        let scope = self.scope.get_value();
        let issues = self.issues;
        let loading = self.loading;
        let error = self.error;

        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let result = match &scope {
                IssueScope::Group { .. } => match scope.group_request() {
                    Some(req) => api::fetch_issues_by_group(&req, None).await,
                    None => Ok(Vec::new()),
                },
                IssueScope::Day { .. } => api::fetch_issues_by_date(&scope.date_request()).await,
            };
            match result {
                Ok(list) => {
                    log::info!("loaded {} issues for {}", list.len(), scope.tab_key());
                    issues.set(list);
                }
                Err(e) => {
                    log::error!("failed to load issues for {}: {}", scope.tab_key(), e);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    }

    /// Filtered and sorted rows for the table.
    pub fn visible_rows(&self) -> Vec<Issue> {
        let page_date = self.scope.with_value(|s| s.date());
        let filtered = self
            .issues
            .with(|list| self.filter.with(|f| f.apply(list, page_date)));
        let mut rows: Vec<IssueRow> = filtered.into_iter().map(IssueRow).collect();
        self.sort
            .with(|s| sort_list(&mut rows, s.field, s.ascending));
        rows.into_iter().map(|r| r.0).collect()
    }

    pub fn toggle_sort(&self, field: &'static str) {
        self.sort.update(|s| s.toggle(field));
    }

    pub fn begin_edit(&self, issue_id: i64, field: DateField) {
        let issue = self
            .issues
            .with_untracked(|list| list.iter().find(|i| i.issue_id == issue_id).cloned());
        if let Some(issue) = issue {
            self.editor.update(|e| {
                e.begin_edit(&issue, field);
            });
        }
    }

    /// Ends the running save and opens the cell clicked meanwhile.
    fn finish_save(&self) {
        let mut queued = None;
        self.editor.update(|e| queued = e.finish_save());
        if let Some(next) = queued {
            self.begin_edit(next.issue_id, next.field);
        }
    }

    pub fn set_temp(&self, value: String) {
        self.editor.update(|e| e.set_temp(value));
    }

    pub fn cancel(&self) {
        self.editor.update(|e| e.cancel());
    }

    pub fn is_editing(&self, cell: DateCellKey) -> bool {
        self.editor.with(|e| e.is_editing(cell))
    }

    pub fn is_saving(&self, cell: DateCellKey) -> bool {
        self.editor.with(|e| e.is_saving(cell))
    }

    /// Validates the open cell and, when it changed, patches the row and
    /// sends the update. A failed save restores the previous value.
    pub fn commit(&self, toasts: ToastService) {
        let user = current_user_name();
        let outcome = self.issues.with_untracked(|list| {
            let mut outcome = CommitOutcome::NotEditing;
            self.editor.update(|e| outcome = e.commit(list, &user));
            outcome
        });

        let pending = match outcome {
            CommitOutcome::NotEditing | CommitOutcome::Unchanged => return,
            CommitOutcome::Rejected(e) => {
                log::warn!("date edit rejected: {}", e);
                alert(&e.to_string());
                return;
            }
            CommitOutcome::Save(pending) => pending,
        };

        let mut snapshot = None;
        self.issues.update(|list| snapshot = pending.apply(list));
        let Some(snapshot) = snapshot else {
            self.finish_save();
            return;
        };

        let this = *self;
        spawn_local(async move {
            let cell = pending.cell.as_key();
            match api::update_issue_dates(&pending.request).await {
                Ok(()) => {
                    log::info!("saved {} = {}", cell, pending.value);
                    this.finish_save();
                    toasts.success(format!(
                        "Issue #{}: {} updated",
                        pending.cell.issue_id,
                        pending.cell.field.label()
                    ));
                }
                Err(e) => {
                    log::error!("saving {} failed: {}", cell, e);
                    this.issues.update(|list| snapshot.rollback(list));
                    this.finish_save();
                    alert(&format!("Could not save the date: {}", e));
                }
            }
        });
    }
}
