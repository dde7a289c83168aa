//! Weekly production calendar with overdue detection.

pub mod api;
pub mod overdue;
pub mod state;
pub mod ui;
