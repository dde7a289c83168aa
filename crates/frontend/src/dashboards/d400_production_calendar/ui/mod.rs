mod calendar_grid;
mod dashboard;
mod filter_bar;
mod group_card;
mod project_legend;

pub use dashboard::ProductionCalendarDashboard;
