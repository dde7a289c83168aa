pub mod aggregate;
pub mod date_edit;
pub mod overdue;

pub use aggregate::{
    Issue, IssueListResponse, IssuesByDateRequest, IssuesByGroupRequest, UpdateIssueDatesRequest,
    UpdateIssueDatesResponse,
};
pub use date_edit::{CommitOutcome, DateCellKey, DateEditError, DateEditor, DateField};
pub use overdue::is_issue_overdue;
