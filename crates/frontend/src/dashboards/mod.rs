pub mod d400_production_calendar;

pub use d400_production_calendar::ui::ProductionCalendarDashboard;
