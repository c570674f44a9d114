//! Terminal output formatting
//!
//! Display utilities for console mode and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_result, print_guess_result, print_round_end, print_status, print_timeout_notice,
    print_welcome,
};
