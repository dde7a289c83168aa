pub mod details;
pub mod fuel;
pub mod list;
