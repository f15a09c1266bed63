//! Terminal output formatting
//!
//! Display utilities for the line-based mode and the `score` command.

pub mod display;
pub mod formatters;

pub use display::{grid, intro, letter_summary, outcome_message, print_score_result};
