pub mod dates;
pub mod filter;
pub mod paging;
pub mod validation;
