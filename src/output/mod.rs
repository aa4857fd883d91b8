//! Terminal output formatting
//!
//! Display utilities for line mode and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_keyboard, print_outcome, print_row, print_statistics};
pub use formatters::share_text;
