pub mod api;
pub mod filters;
pub mod scope;
pub mod ui;
