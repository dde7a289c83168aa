pub mod aggregate;

pub use aggregate::{format_duration, Visitor, VisitorDto, VisitorQuery};
