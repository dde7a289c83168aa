//! Weekly production calendar: wire types, week navigation and the overdue
//! evaluation pass.

pub mod calendar;
pub mod dto;
pub mod overdue;
pub mod query;

pub use calendar::{derive_production_types, derive_projects, normalize_days};
pub use dto::{DayBucket, IssueGroup, ProjectSummary, WeeklyCalendarRequest, WeeklyCalendarResponse};
pub use overdue::{evaluate_overdue, overdue_keys, OverdueKey, OverdueMap};
pub use query::{CalendarFilterPatch, CalendarFilters, CalendarQuery};
