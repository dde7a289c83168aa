pub mod details;
pub mod import;
pub mod list;
mod lines_table;
