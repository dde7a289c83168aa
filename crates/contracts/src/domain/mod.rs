pub mod a001_item;
pub mod a002_vehicle;
pub mod a003_visitor;
pub mod a004_bom;
pub mod a005_issue;
