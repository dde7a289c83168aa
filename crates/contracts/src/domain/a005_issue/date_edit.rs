//! Inline editing of planned start / end dates.
//!
//! `DateEditor` is the state machine behind the editable cells of the issue
//! table: `Viewing -> Editing -> Saving -> Viewing`, or back to `Viewing`
//! on cancel, no-op or validation failure. Only one cell is edited at a time.
//!
//! Saving is apply-then-reconcile: the caller applies the `PendingDateSave`
//! to its local list right away, keeps the returned snapshot and rolls it
//! back if the server refuses the change.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::aggregate::{Issue, UpdateIssueDatesRequest};
use crate::shared::dates::{parse_wire_date, to_wire_date};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateField {
    PlannedStart,
    PlannedEnd,
}

impl DateField {
    pub fn label(self) -> &'static str {
        match self {
            DateField::PlannedStart => "Planned start",
            DateField::PlannedEnd => "Planned end",
        }
    }

    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            DateField::PlannedStart => "plannedStartDate",
            DateField::PlannedEnd => "plannedEndDate",
        }
    }
}

/// Identifies one editable cell: an issue and one of its planned dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateCellKey {
    pub issue_id: i64,
    pub field: DateField,
}

impl DateCellKey {
    pub fn new(issue_id: i64, field: DateField) -> Self {
        Self { issue_id, field }
    }

    pub fn as_key(&self) -> String {
        format!("{}-{}", self.issue_id, self.field.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateEditError {
    #[error("'{0}' is not a valid date")]
    InvalidDate(String),
    #[error("Planned start ({start}) cannot be after planned end ({end})")]
    StartAfterEnd { start: NaiveDate, end: NaiveDate },
    #[error("Planned end ({end}) cannot be before planned start ({start})")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
    #[error("Issue #{0} is not in the current list")]
    IssueNotFound(i64),
}

/// Value shown in the date input when editing starts: `YYYY-MM-DD` or empty.
pub fn seed_value(issue: &Issue, field: DateField) -> String {
    issue.planned_date(field).map(to_wire_date).unwrap_or_default()
}

/// Checks `value` against the sibling date of the same issue.
pub fn validate_date_change(
    issue: &Issue,
    field: DateField,
    value: NaiveDate,
) -> Result<(), DateEditError> {
    match field {
        DateField::PlannedStart => {
            if let Some(end) = issue.planned_end_date {
                if value > end {
                    return Err(DateEditError::StartAfterEnd { start: value, end });
                }
            }
        }
        DateField::PlannedEnd => {
            if let Some(start) = issue.planned_start_date {
                if value < start {
                    return Err(DateEditError::EndBeforeStart { start, end: value });
                }
            }
        }
    }
    Ok(())
}

pub fn build_update_request(
    cell: DateCellKey,
    value: NaiveDate,
    updated_by: &str,
) -> UpdateIssueDatesRequest {
    let wire = to_wire_date(value);
    let (planned_start_date, planned_end_date) = match cell.field {
        DateField::PlannedStart => (Some(wire), None),
        DateField::PlannedEnd => (None, Some(wire)),
    };
    UpdateIssueDatesRequest {
        issue_id: cell.issue_id,
        planned_start_date,
        planned_end_date,
        updated_by: updated_by.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateCellState {
    #[default]
    Viewing,
    Editing {
        cell: DateCellKey,
        original: String,
        temp: String,
    },
    Saving {
        cell: DateCellKey,
        /// Cell clicked while the save was in flight; opened once it ends.
        queued: Option<DateCellKey>,
    },
}

/// Result of `DateEditor::commit`.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    /// No cell was being edited.
    NotEditing,
    /// The value did not change; nothing to send.
    Unchanged,
    /// Validation failed; the original value is kept.
    Rejected(DateEditError),
    /// Send `request`, apply locally, reconcile with the response.
    Save(PendingDateSave),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingDateSave {
    pub cell: DateCellKey,
    pub value: NaiveDate,
    pub request: UpdateIssueDatesRequest,
}

impl PendingDateSave {
    /// Patch the edited field in `issues`; returns the pre-edit snapshot.
    pub fn apply(&self, issues: &mut [Issue]) -> Option<DatePatchSnapshot> {
        let issue = issues
            .iter_mut()
            .find(|issue| issue.issue_id == self.cell.issue_id)?;
        let previous = issue.planned_date(self.cell.field);
        issue.set_planned_date(self.cell.field, Some(self.value));
        Some(DatePatchSnapshot {
            cell: self.cell,
            previous,
        })
    }
}

/// Value of a single field before an optimistic patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePatchSnapshot {
    pub cell: DateCellKey,
    pub previous: Option<NaiveDate>,
}

impl DatePatchSnapshot {
    pub fn rollback(&self, issues: &mut [Issue]) {
        if let Some(issue) = issues
            .iter_mut()
            .find(|issue| issue.issue_id == self.cell.issue_id)
        {
            issue.set_planned_date(self.cell.field, self.previous);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateEditor {
    state: DateCellState,
}

impl DateEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DateCellState {
        &self.state
    }

    pub fn is_editing(&self, cell: DateCellKey) -> bool {
        matches!(&self.state, DateCellState::Editing { cell: current, .. } if *current == cell)
    }

    pub fn is_saving(&self, cell: DateCellKey) -> bool {
        matches!(&self.state, DateCellState::Saving { cell: current, .. } if *current == cell)
    }

    pub fn temp_value(&self) -> Option<&str> {
        match &self.state {
            DateCellState::Editing { temp, .. } => Some(temp.as_str()),
            _ => None,
        }
    }

    /// Start editing `field` of `issue`.
    ///
    /// An unsaved edit of another cell is dropped without a prompt. While a
    /// save is in flight the cell is queued instead and false is returned;
    /// `finish_save` hands it back.
    pub fn begin_edit(&mut self, issue: &Issue, field: DateField) -> bool {
        let cell = DateCellKey::new(issue.issue_id, field);
        match &mut self.state {
            DateCellState::Saving { cell: saving, queued } => {
                if *saving != cell {
                    log::debug!("queueing edit of {} until {} is saved", cell.as_key(), saving.as_key());
                    *queued = Some(cell);
                }
                return false;
            }
            DateCellState::Editing { cell: current, .. } if *current != cell => {
                log::debug!("abandoning unsaved edit of {}", current.as_key());
            }
            _ => {}
        }
        let original = seed_value(issue, field);
        self.state = DateCellState::Editing {
            cell,
            temp: original.clone(),
            original,
        };
        true
    }

    pub fn set_temp(&mut self, value: impl Into<String>) {
        if let DateCellState::Editing { temp, .. } = &mut self.state {
            *temp = value.into();
        }
    }

    /// Escape, or blur without a change.
    pub fn cancel(&mut self) {
        if matches!(self.state, DateCellState::Editing { .. }) {
            self.state = DateCellState::Viewing;
        }
    }

    /// Blur or Enter: validate the temporary value and decide what to do.
    pub fn commit(&mut self, issues: &[Issue], updated_by: &str) -> CommitOutcome {
        let (cell, original, temp) = match &self.state {
            DateCellState::Editing {
                cell,
                original,
                temp,
            } => (*cell, original.clone(), temp.trim().to_string()),
            _ => return CommitOutcome::NotEditing,
        };

        if temp == original {
            self.state = DateCellState::Viewing;
            return CommitOutcome::Unchanged;
        }

        let outcome = prepare_save(cell, &temp, issues, updated_by);
        self.state = match outcome {
            CommitOutcome::Save(_) => DateCellState::Saving { cell, queued: None },
            _ => DateCellState::Viewing,
        };
        outcome
    }

    /// The server answered (either way); back to viewing. Returns the cell
    /// queued during the save, if any.
    pub fn finish_save(&mut self) -> Option<DateCellKey> {
        match std::mem::take(&mut self.state) {
            DateCellState::Saving { queued, .. } => queued,
            other => {
                self.state = other;
                None
            }
        }
    }
}

fn prepare_save(
    cell: DateCellKey,
    temp: &str,
    issues: &[Issue],
    updated_by: &str,
) -> CommitOutcome {
    let value = match parse_wire_date(temp) {
        Ok(value) => value,
        Err(_) => return CommitOutcome::Rejected(DateEditError::InvalidDate(temp.to_string())),
    };
    let Some(issue) = issues.iter().find(|issue| issue.issue_id == cell.issue_id) else {
        return CommitOutcome::Rejected(DateEditError::IssueNotFound(cell.issue_id));
    };
    if let Err(err) = validate_date_change(issue, cell.field, value) {
        return CommitOutcome::Rejected(err);
    }
    CommitOutcome::Save(PendingDateSave {
        cell,
        value,
        request: build_update_request(cell, value, updated_by),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        parse_wire_date(s).unwrap()
    }

    fn issue(id: i64, start: Option<&str>, end: Option<&str>) -> Issue {
        Issue {
            issue_id: id,
            subject: format!("Issue {id}"),
            tracker_name: None,
            project_id: 5,
            project_name: "Hat 5".into(),
            project_code: Some("H5".into()),
            status_name: "New".into(),
            is_closed: false,
            closed_on: None,
            planned_start_date: start.map(d),
            planned_end_date: end.map(d),
            completion_percentage: None,
            assigned_to: None,
        }
    }

    #[test]
    fn test_start_after_end_is_rejected_without_save() {
        let issues = vec![issue(1, Some("2025-10-20"), Some("2025-10-30"))];
        let mut editor = DateEditor::new();
        assert!(editor.begin_edit(&issues[0], DateField::PlannedStart));
        editor.set_temp("2025-11-01");

        let outcome = editor.commit(&issues, "planner");
        assert_eq!(
            outcome,
            CommitOutcome::Rejected(DateEditError::StartAfterEnd {
                start: d("2025-11-01"),
                end: d("2025-10-30"),
            })
        );
        assert_eq!(editor.state(), &DateCellState::Viewing);
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let issues = vec![issue(1, Some("2025-10-20"), Some("2025-10-30"))];
        let mut editor = DateEditor::new();
        editor.begin_edit(&issues[0], DateField::PlannedEnd);
        editor.set_temp("2025-10-19");
        assert!(matches!(
            editor.commit(&issues, "planner"),
            CommitOutcome::Rejected(DateEditError::EndBeforeStart { .. })
        ));
    }

    #[test]
    fn test_unchanged_value_does_not_save() {
        let issues = vec![issue(1, Some("2025-10-20"), Some("2025-10-30"))];
        let mut editor = DateEditor::new();
        editor.begin_edit(&issues[0], DateField::PlannedEnd);
        assert_eq!(editor.temp_value(), Some("2025-10-30"));
        editor.set_temp("2025-10-30");
        assert_eq!(editor.commit(&issues, "planner"), CommitOutcome::Unchanged);
        assert_eq!(editor.state(), &DateCellState::Viewing);
    }

    #[test]
    fn test_valid_change_builds_partial_request() {
        let issues = vec![issue(9, Some("2025-10-20"), Some("2025-10-30"))];
        let mut editor = DateEditor::new();
        editor.begin_edit(&issues[0], DateField::PlannedEnd);
        editor.set_temp("2025-11-03");

        let CommitOutcome::Save(pending) = editor.commit(&issues, "planner") else {
            panic!("expected a save");
        };
        assert_eq!(pending.request.issue_id, 9);
        assert_eq!(pending.request.planned_start_date, None);
        assert_eq!(pending.request.planned_end_date.as_deref(), Some("2025-11-03"));
        assert_eq!(pending.request.updated_by, "planner");
        assert!(editor.is_saving(DateCellKey::new(9, DateField::PlannedEnd)));

        editor.finish_save();
        assert_eq!(editor.state(), &DateCellState::Viewing);
    }

    #[test]
    fn test_sibling_missing_allows_any_value() {
        let issues = vec![issue(3, None, None)];
        let mut editor = DateEditor::new();
        editor.begin_edit(&issues[0], DateField::PlannedStart);
        assert_eq!(editor.temp_value(), Some(""));
        editor.set_temp("2031-01-01");
        assert!(matches!(editor.commit(&issues, "x"), CommitOutcome::Save(_)));
    }

    #[test]
    fn test_garbage_input_is_rejected() {
        let issues = vec![issue(3, None, Some("2025-10-30"))];
        let mut editor = DateEditor::new();
        editor.begin_edit(&issues[0], DateField::PlannedEnd);
        editor.set_temp("");
        assert_eq!(
            editor.commit(&issues, "x"),
            CommitOutcome::Rejected(DateEditError::InvalidDate(String::new()))
        );
    }

    #[test]
    fn test_opening_second_cell_abandons_first() {
        let issues = vec![
            issue(1, Some("2025-10-20"), Some("2025-10-30")),
            issue(2, Some("2025-10-21"), Some("2025-10-25")),
        ];
        let mut editor = DateEditor::new();
        editor.begin_edit(&issues[0], DateField::PlannedStart);
        editor.set_temp("2025-10-22");
        editor.begin_edit(&issues[1], DateField::PlannedEnd);

        assert!(!editor.is_editing(DateCellKey::new(1, DateField::PlannedStart)));
        assert!(editor.is_editing(DateCellKey::new(2, DateField::PlannedEnd)));
        assert_eq!(editor.temp_value(), Some("2025-10-25"));
    }

    #[test]
    fn test_cannot_begin_while_saving() {
        let issues = vec![issue(1, None, None), issue(2, None, None)];
        let mut editor = DateEditor::new();
        editor.begin_edit(&issues[0], DateField::PlannedStart);
        editor.set_temp("2025-10-22");
        assert!(matches!(editor.commit(&issues, "x"), CommitOutcome::Save(_)));
        assert!(!editor.begin_edit(&issues[1], DateField::PlannedStart));
        assert!(editor.temp_value().is_none());
    }

    #[test]
    fn test_cell_clicked_during_save_is_returned_when_save_ends() {
        let issues = vec![issue(1, None, None), issue(2, None, Some("2025-10-30"))];
        let mut editor = DateEditor::new();
        editor.begin_edit(&issues[0], DateField::PlannedStart);
        editor.set_temp("2025-10-22");
        assert!(matches!(editor.commit(&issues, "x"), CommitOutcome::Save(_)));

        // clicking the saving cell itself queues nothing
        assert!(!editor.begin_edit(&issues[0], DateField::PlannedStart));
        assert!(!editor.begin_edit(&issues[1], DateField::PlannedEnd));
        let next = DateCellKey::new(2, DateField::PlannedEnd);
        assert!(editor.is_saving(DateCellKey::new(1, DateField::PlannedStart)));

        assert_eq!(editor.finish_save(), Some(next));
        assert_eq!(editor.state(), &DateCellState::Viewing);
        assert!(editor.begin_edit(&issues[1], DateField::PlannedEnd));
        assert_eq!(editor.temp_value(), Some("2025-10-30"));
        assert_eq!(editor.finish_save(), None);
        assert!(editor.is_editing(next));
    }

    #[test]
    fn test_cancel_returns_to_viewing() {
        let issues = vec![issue(1, None, Some("2025-10-30"))];
        let mut editor = DateEditor::new();
        editor.begin_edit(&issues[0], DateField::PlannedEnd);
        editor.set_temp("2025-12-01");
        editor.cancel();
        assert_eq!(editor.state(), &DateCellState::Viewing);
        assert_eq!(editor.commit(&issues, "x"), CommitOutcome::NotEditing);
    }

    #[test]
    fn test_apply_then_rollback_restores_previous_value() {
        let mut issues = vec![issue(1, Some("2025-10-20"), Some("2025-10-30"))];
        let mut editor = DateEditor::new();
        editor.begin_edit(&issues[0], DateField::PlannedEnd);
        editor.set_temp("2025-11-05");
        let CommitOutcome::Save(pending) = editor.commit(&issues, "x") else {
            panic!("expected a save");
        };

        let snapshot = pending.apply(&mut issues).unwrap();
        assert_eq!(issues[0].planned_end_date, Some(d("2025-11-05")));
        assert_eq!(issues[0].planned_start_date, Some(d("2025-10-20")));

        snapshot.rollback(&mut issues);
        assert_eq!(issues[0].planned_end_date, Some(d("2025-10-30")));
    }

    #[test]
    fn test_apply_on_missing_issue_is_none() {
        let pending = PendingDateSave {
            cell: DateCellKey::new(99, DateField::PlannedStart),
            value: d("2025-10-20"),
            request: build_update_request(
                DateCellKey::new(99, DateField::PlannedStart),
                d("2025-10-20"),
                "x",
            ),
        };
        let mut issues = vec![issue(1, None, None)];
        assert!(pending.apply(&mut issues).is_none());
    }
}
