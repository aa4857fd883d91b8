//! Interactive TUI interface
//!
//! Full-screen board built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
