//! Core domain types
//!
//! Words, per-letter feedback and keyboard state. Everything here is pure and
//! free of I/O.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Classification, EvaluateError, GuessResult, evaluate, evaluate_letters};
pub use keyboard::KeyboardState;
pub use word::{WORD_LENGTH, Word, WordError};
