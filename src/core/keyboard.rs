//! Best-known classification for each letter of the alphabet
//!
//! Drives the colouring of the on-screen keyboard. A letter's state only ever
//! moves up in priority (`Absent < Present < Correct`).

use super::feedback::{Classification, GuessResult};
use super::word::Word;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: FxHashMap<u8, Classification>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a submitted row into the keyboard state
    pub fn record(&mut self, guess: &Word, result: &GuessResult) {
        for (&letter, &classification) in guess.chars().iter().zip(result.classifications()) {
            self.letters
                .entry(letter)
                .and_modify(|best| *best = (*best).max(classification))
                .or_insert(classification);
        }
    }

    /// Best classification seen for `letter`, if it was ever guessed
    ///
    /// Lookup is case-insensitive.
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Classification> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        self.letters
            .get(&(letter.to_ascii_uppercase() as u8))
            .copied()
    }

    /// Number of distinct letters guessed so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
