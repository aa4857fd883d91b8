//! Per-letter feedback for a guess
//!
//! Every position of a guess is classified as:
//! - Correct: same letter in the same position of the target
//! - Present: letter occurs elsewhere in the target (respecting multiplicity)
//! - Absent: letter does not occur in the target, or all its occurrences
//!   have already been credited

use super::word::{WORD_LENGTH, Word, letter_counts};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Classification of a single letter of a guess
///
/// Ordered by priority: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Absent,
    Present,
    Correct,
}

impl Classification {
    /// Emoji square used in share text and line-mode output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Error returned when evaluating raw strings of the wrong shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluateError {
    #[error("guess and target must both be {WORD_LENGTH} letters (guess {guess}, target {target})")]
    LengthMismatch { guess: usize, target: usize },

    #[error("guess and target must contain only ASCII letters")]
    NonAscii,
}

/// Feedback for one submitted guess, one classification per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuessResult([Classification; WORD_LENGTH]);

impl GuessResult {
    /// All positions correct
    pub const PERFECT: Self = Self([Classification::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(classifications: [Classification; WORD_LENGTH]) -> Self {
        Self(classifications)
    }

    #[inline]
    #[must_use]
    pub const fn classifications(&self) -> &[Classification; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize) -> Classification {
        self.0[position]
    }

    /// Check if every letter is correct
    #[inline]
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.0.iter().all(|&c| c == Classification::Correct)
    }

    /// Count the positions with a given classification
    #[must_use]
    pub fn count(&self, classification: Classification) -> usize {
        self.0.iter().filter(|&&c| c == classification).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::GuessResult;
    ///
    /// let result: GuessResult = "GY-GY".parse().unwrap();
    /// assert_eq!(result.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Parse from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
///
/// Accepts:
/// - 'G'/'g'/🟩 for correct
/// - 'Y'/'y'/🟨 for present
/// - '-'/'_'/⬜ for absent
impl std::str::FromStr for GuessResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut classifications = [Classification::Absent; WORD_LENGTH];
        let mut len = 0;

        for ch in s.chars() {
            if len == WORD_LENGTH {
                return Err(format!("Invalid result string: {s}"));
            }
            classifications[len] = match ch {
                'G' | 'g' | '🟩' => Classification::Correct,
                'Y' | 'y' | '🟨' => Classification::Present,
                '-' | '_' | '⬜' => Classification::Absent,
                _ => return Err(format!("Invalid result string: {s}")),
            };
            len += 1;
        }

        if len != WORD_LENGTH {
            return Err(format!("Invalid result string: {s}"));
        }

        Ok(Self(classifications))
    }
}

/// Classify `guess` against `target`
///
/// Implements the standard feedback rules, including proper handling of
/// duplicate letters.
///
/// # Algorithm
/// 1. Count every letter of the target
/// 2. First pass: mark exact matches as correct and remove them from the pool
/// 3. Second pass: left to right, mark remaining letters present while the
///    pool still holds that letter, absent otherwise
///
/// # Examples
/// ```
/// use wordle_game::core::{Classification::*, Word, evaluate};
///
/// let guess = Word::new("olleh").unwrap();
/// let target = Word::new("hello").unwrap();
///
/// let result = evaluate(&guess, &target);
/// assert_eq!(result.classifications(), &[Present, Present, Correct, Present, Present]);
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> GuessResult {
    classify(guess.chars(), target.chars())
}

/// Classify raw strings, checking their length first
///
/// Both strings are uppercased before comparison. Lengths are counted in
/// characters.
///
/// # Errors
/// Returns `EvaluateError::LengthMismatch` if either string is not exactly
/// [`WORD_LENGTH`] characters long, and `EvaluateError::NonAscii` if either
/// holds a non-ASCII character.
pub fn evaluate_letters(guess: &str, target: &str) -> Result<GuessResult, EvaluateError> {
    let guess = guess.to_uppercase();
    let target = target.to_uppercase();

    let mismatch = || EvaluateError::LengthMismatch {
        guess: guess.chars().count(),
        target: target.chars().count(),
    };
    if guess.chars().count() != WORD_LENGTH || target.chars().count() != WORD_LENGTH {
        return Err(mismatch());
    }
    if !guess.is_ascii() || !target.is_ascii() {
        return Err(EvaluateError::NonAscii);
    }
    let guess_chars: &[u8; WORD_LENGTH] = guess.as_bytes().try_into().map_err(|_| mismatch())?;
    let target_chars: &[u8; WORD_LENGTH] =
        target.as_bytes().try_into().map_err(|_| mismatch())?;

    Ok(classify(guess_chars, target_chars))
}

fn classify(guess: &[u8; WORD_LENGTH], target: &[u8; WORD_LENGTH]) -> GuessResult {
    let mut result = [Classification::Absent; WORD_LENGTH];
    let mut remaining = letter_counts(target);

    // Allow: Index needed to access guess[i], target[i], and set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess[i] == target[i] {
            result[i] = Classification::Correct;
            if let Some(count) = remaining.get_mut(&guess[i]) {
                *count = count.saturating_sub(1);
            }
        }
    }

    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if result[i] == Classification::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&guess[i])
            && *count > 0
        {
            result[i] = Classification::Present;
            *count -= 1;
        }
    }

    GuessResult(result)
}
