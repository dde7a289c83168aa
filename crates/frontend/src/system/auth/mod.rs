//! Session data left in localStorage by the external sign-in page.

pub mod storage;
