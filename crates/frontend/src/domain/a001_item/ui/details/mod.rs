mod view;
mod view_model;

pub use view::ItemDetails;
