pub mod aggregate;

pub use aggregate::{Item, ItemDto, ItemListQuery};
