//! Wire contracts and UI-independent logic shared by the portal frontend.
//!
//! Everything in here compiles for both `wasm32-unknown-unknown` and the host,
//! so the calendar math, overdue classification and form validation are
//! tested natively.

pub mod dashboards;
pub mod domain;
pub mod shared;
