pub mod aggregate;
pub mod review;

pub use aggregate::{
    BomDetail, BomHeader, BomImportPreview, BomLine, BomListQuery, CreateBomRequest,
};
pub use review::{review_lines, BomLineIssue, LineProblem};
