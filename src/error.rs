//! Error types for the game engine.
//!
//! Word and evaluation errors live next to their types in [`crate::core`].

use crate::core::WORD_LENGTH;
use thiserror::Error;

/// Rejected guess submissions. None of these change the game state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    /// Not enough letters (or not letters at all).
    #[error("Not enough letters: guesses must be {WORD_LENGTH} letters")]
    IncompleteGuess,

    /// Well-formed but not in the dictionary.
    #[error("Not in word list: {0}")]
    UnknownWord(String),

    /// The session already ended.
    #[error("The game is over; start a new game to keep playing")]
    GameOver,
}

/// Failures while loading an external dictionary.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dictionary: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("malformed dictionary: {0}")]
    Malformed(String),

    #[error("dictionary contains no words")]
    Empty,
}

/// Failures reading or writing durable storage.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Failures loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
