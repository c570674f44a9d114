//! Command implementations

pub mod check;
pub mod simple;

pub use check::{CheckResult, check_entry};
pub use simple::run_simple;
