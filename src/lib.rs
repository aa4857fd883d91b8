//! Wordle Game
//!
//! A single-player five-letter word-guessing game with a full-screen TUI and a
//! line mode. Sessions and statistics survive restarts.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Classification, Word, evaluate};
//!
//! let guess = Word::new("speed").unwrap();
//! let target = Word::new("erase").unwrap();
//!
//! let result = evaluate(&guess, &target);
//! assert_eq!(result.get(0), Classification::Present);
//! assert_eq!(result.get(1), Classification::Absent);
//! println!("{}", result.to_emoji());
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Session, statistics and the engine
pub mod game;

// Session and statistics persistence
pub mod storage;

// Dictionary loading and the word source
pub mod wordlists;

// Configuration file and defaults
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
