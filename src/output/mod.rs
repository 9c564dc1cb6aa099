//! Terminal output formatting
//!
//! Display utilities for the simple mode and CLI results.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_languages, print_simulation_result};
