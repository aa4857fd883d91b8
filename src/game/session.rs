//! Game session state machine
//!
//! A session owns the target word, the submitted rows and the guess being
//! typed. It moves from `InProgress` to exactly one of the terminal states
//! `Won` or `Lost` and never leaves them; a new game is a new session.

use crate::core::{GuessResult, KeyboardState, WORD_LENGTH, Word, evaluate};
use crate::error::GuessError;
use crate::wordlists::WordSource;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Default number of guesses per game
pub const MAX_ROWS: usize = 6;

/// Most guesses a game may allow
pub const ROW_LIMIT: usize = 20;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub guess: Word,
    pub result: GuessResult,
}

/// A single game
///
/// Equality ignores the in-progress guess buffer, which is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "SessionRecord", try_from = "SessionRecord")]
pub struct Session {
    target: Word,
    rows: Vec<Row>,
    max_rows: usize,
    status: GameStatus,
    keyboard: KeyboardState,
    buffer: String,
}

impl Session {
    /// Start a fresh session with the default six rows
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self::with_max_rows(target, MAX_ROWS)
    }

    /// Start a fresh session allowing `max_rows` guesses, clamped to
    /// `1..=ROW_LIMIT`
    #[must_use]
    pub fn with_max_rows(target: Word, max_rows: usize) -> Self {
        let max_rows = max_rows.clamp(1, ROW_LIMIT);
        Self {
            target,
            rows: Vec::with_capacity(max_rows),
            max_rows,
            status: GameStatus::InProgress,
            keyboard: KeyboardState::new(),
            buffer: String::with_capacity(WORD_LENGTH),
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub const fn max_rows(&self) -> usize {
        self.max_rows
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// The guess currently being typed
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.max_rows - self.rows.len()
    }

    /// Add a letter to the guess buffer
    ///
    /// Returns `false` (and changes nothing) if the game is over, the buffer
    /// is full, or `ch` is not an ASCII letter.
    pub fn append_letter(&mut self, ch: char) -> bool {
        if self.status.is_terminal()
            || self.buffer.len() >= WORD_LENGTH
            || !ch.is_ascii_alphabetic()
        {
            return false;
        }
        self.buffer.push(ch.to_ascii_uppercase());
        true
    }

    /// Remove the last letter from the guess buffer
    ///
    /// Returns `false` if the game is over or the buffer is empty.
    pub fn remove_last_letter(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.buffer.pop().is_some()
    }

    /// Submit the contents of the guess buffer
    ///
    /// # Errors
    ///
    /// See [`Session::submit_guess`].
    pub fn submit_buffer<W: WordSource>(&mut self, words: &W) -> Result<&Row, GuessError> {
        let guess = self.buffer.clone();
        self.submit_guess(&guess, words)
    }

    /// Submit a complete guess
    ///
    /// On success the row is recorded, the keyboard updated, the buffer
    /// cleared and the status advanced.
    ///
    /// # Errors
    ///
    /// Leaves the session untouched and returns:
    /// - `GuessError::GameOver` if the session already ended
    /// - `GuessError::IncompleteGuess` if `guess` is not [`WORD_LENGTH`] letters
    /// - `GuessError::UnknownWord` if `words` does not accept the guess
    pub fn submit_guess<W: WordSource>(
        &mut self,
        guess: &str,
        words: &W,
    ) -> Result<&Row, GuessError> {
        if self.status.is_terminal() {
            return Err(GuessError::GameOver);
        }

        let guess = Word::new(guess).map_err(|_| GuessError::IncompleteGuess)?;
        if !words.is_acceptable_guess(guess.text()) {
            return Err(GuessError::UnknownWord(guess.text().to_string()));
        }

        self.buffer.clear();
        Ok(self.record_row(guess))
    }

    fn record_row(&mut self, guess: Word) -> &Row {
        let result = evaluate(&guess, &self.target);
        self.keyboard.record(&guess, &result);
        self.rows.push(Row { guess, result });

        self.status = if result.is_all_correct() {
            GameStatus::Won
        } else if self.rows.len() >= self.max_rows {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        debug!(
            row = self.rows.len(),
            result = %result,
            status = ?self.status,
            "Guess recorded"
        );

        &self.rows[self.rows.len() - 1]
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target
            && self.rows == other.rows
            && self.max_rows == other.max_rows
            && self.status == other.status
    }
}

impl Eq for Session {}

/// Persisted shape of a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub target: Word,
    pub rows: Vec<Row>,
    pub max_rows: usize,
    pub status: GameStatus,
}

/// Why a stored session could not be restored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorruptSession(String);

impl fmt::Display for CorruptSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "corrupt session record: {}", self.0)
    }
}

impl std::error::Error for CorruptSession {}

impl From<Session> for SessionRecord {
    fn from(session: Session) -> Self {
        Self {
            target: session.target,
            rows: session.rows,
            max_rows: session.max_rows,
            status: session.status,
        }
    }
}

impl TryFrom<SessionRecord> for Session {
    type Error = CorruptSession;

    /// Rebuild a session by replaying its rows
    ///
    /// Rejects records whose stored results or status disagree with the
    /// replay, and records with more rows than allowed.
    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        if !(1..=ROW_LIMIT).contains(&record.max_rows) {
            return Err(CorruptSession(format!(
                "max_rows {} is outside 1..={ROW_LIMIT}",
                record.max_rows
            )));
        }
        if record.rows.len() > record.max_rows {
            return Err(CorruptSession(format!(
                "{} rows exceed the limit of {}",
                record.rows.len(),
                record.max_rows
            )));
        }

        let mut session = Self::with_max_rows(record.target, record.max_rows);
        for (index, row) in record.rows.into_iter().enumerate() {
            if session.status.is_terminal() {
                return Err(CorruptSession(format!("row {index} follows a finished game")));
            }
            let replayed = session.record_row(row.guess);
            if replayed.result != row.result {
                return Err(CorruptSession(format!("row {index} has the wrong result")));
            }
        }

        if session.status != record.status {
            return Err(CorruptSession(format!(
                "stored status {:?} but rows imply {:?}",
                record.status, session.status
            )));
        }

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Classification;
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;

    const WORDS: &[&str] = &[
        "HELLO", "WORLD", "CRANE", "SLATE", "OLLEH", "SPEED", "ERASE", "BRAIN", "TRAIN", "GRAIN",
    ];

    fn dictionary() -> Dictionary {
        Dictionary::from_words(words_from_slice(WORDS))
    }

    fn session(target: &str) -> Session {
        Session::new(Word::new(target).unwrap())
    }

    #[test]
    fn new_session_is_in_progress() {
        let s = session("hello");
        assert_eq!(s.status(), GameStatus::InProgress);
        assert!(s.rows().is_empty());
        assert_eq!(s.max_rows(), MAX_ROWS);
        assert_eq!(s.remaining_attempts(), 6);
        assert_eq!(s.buffer(), "");
    }

    #[test]
    fn correct_first_guess_wins() {
        let mut s = session("hello");
        let row = s.submit_guess("hello", &dictionary()).unwrap();
        assert_eq!(row.result, GuessResult::PERFECT);
        assert_eq!(s.status(), GameStatus::Won);
        assert_eq!(s.rows().len(), 1);
    }

    #[test]
    fn six_misses_lose() {
        let words = dictionary();
        let mut s = session("hello");
        for (i, guess) in ["world", "crane", "slate", "brain", "train", "grain"]
            .iter()
            .enumerate()
        {
            assert_eq!(s.status(), GameStatus::InProgress, "before row {i}");
            s.submit_guess(guess, &words).unwrap();
        }
        assert_eq!(s.status(), GameStatus::Lost);
        assert_eq!(s.remaining_attempts(), 0);
    }

    #[test]
    fn win_on_last_row_is_a_win() {
        let words = dictionary();
        let mut s = session("hello");
        for guess in ["world", "crane", "slate", "brain", "train"] {
            s.submit_guess(guess, &words).unwrap();
        }
        s.submit_guess("hello", &words).unwrap();
        assert_eq!(s.status(), GameStatus::Won);
    }

    #[test]
    fn submit_after_game_over_changes_nothing() {
        let words = dictionary();
        let mut s = session("hello");
        s.submit_guess("hello", &words).unwrap();
        let before = s.clone();

        assert_eq!(s.submit_guess("world", &words), Err(GuessError::GameOver));
        assert_eq!(s, before);
        assert!(!s.append_letter('A'));
        assert!(!s.remove_last_letter());
    }

    #[test]
    fn incomplete_guess_rejected() {
        let words = dictionary();
        let mut s = session("hello");
        assert_eq!(s.submit_guess("hell", &words), Err(GuessError::IncompleteGuess));
        assert_eq!(s.submit_guess("", &words), Err(GuessError::IncompleteGuess));
        assert_eq!(s.submit_guess("he1lo", &words), Err(GuessError::IncompleteGuess));
        assert!(s.rows().is_empty());
    }

    #[test]
    fn unknown_word_rejected() {
        let words = dictionary();
        let mut s = session("hello");
        assert_eq!(
            s.submit_guess("qzxjv", &words),
            Err(GuessError::UnknownWord("QZXJV".into()))
        );
        assert!(s.rows().is_empty());
        assert_eq!(s.status(), GameStatus::InProgress);
    }

    #[test]
    fn rejected_buffer_is_kept() {
        let words = dictionary();
        let mut s = session("hello");
        for ch in "qzxjv".chars() {
            assert!(s.append_letter(ch));
        }
        assert!(s.submit_buffer(&words).is_err());
        assert_eq!(s.buffer(), "QZXJV");
    }

    #[test]
    fn buffer_is_bounded() {
        let mut s = session("hello");
        for ch in "crane".chars() {
            assert!(s.append_letter(ch));
        }
        assert!(!s.append_letter('X'));
        assert_eq!(s.buffer(), "CRANE");

        assert!(s.remove_last_letter());
        assert_eq!(s.buffer(), "CRAN");
    }

    #[test]
    fn buffer_rejects_non_letters_and_handles_empty() {
        let mut s = session("hello");
        assert!(!s.append_letter('1'));
        assert!(!s.append_letter(' '));
        assert!(!s.remove_last_letter());
        assert_eq!(s.buffer(), "");
    }

    #[test]
    fn submit_buffer_clears_it() {
        let words = dictionary();
        let mut s = session("hello");
        for ch in "olleh".chars() {
            s.append_letter(ch);
        }
        let row = s.submit_buffer(&words).unwrap();
        assert_eq!(row.guess.text(), "OLLEH");
        assert_eq!(
            row.result.classifications(),
            &[
                Classification::Present,
                Classification::Present,
                Classification::Correct,
                Classification::Present,
                Classification::Present,
            ]
        );
        assert_eq!(s.buffer(), "");
    }

    #[test]
    fn keyboard_tracks_rows() {
        let words = dictionary();
        let mut s = session("hello");
        s.submit_guess("world", &words).unwrap();
        assert_eq!(s.keyboard().get('L'), Some(Classification::Correct));
        assert_eq!(s.keyboard().get('W'), Some(Classification::Absent));
        assert_eq!(s.keyboard().get('O'), Some(Classification::Present));
    }

    #[test]
    fn custom_row_limit() {
        let words = dictionary();
        let mut s = Session::with_max_rows(Word::new("hello").unwrap(), 1);
        s.submit_guess("world", &words).unwrap();
        assert_eq!(s.status(), GameStatus::Lost);

        let s = Session::with_max_rows(Word::new("hello").unwrap(), 0);
        assert_eq!(s.max_rows(), 1);

        let s = Session::with_max_rows(Word::new("hello").unwrap(), usize::MAX);
        assert_eq!(s.max_rows(), ROW_LIMIT);
    }

    #[test]
    fn record_round_trip() {
        let words = dictionary();
        let mut s = session("hello");
        s.submit_guess("world", &words).unwrap();
        s.submit_guess("olleh", &words).unwrap();

        let json = serde_json::to_string(&s).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, s);
        assert_eq!(restored.keyboard(), s.keyboard());
    }

    #[test]
    fn record_with_tampered_result_rejected() {
        let words = dictionary();
        let mut s = session("hello");
        s.submit_guess("world", &words).unwrap();

        let mut record = SessionRecord::from(s);
        record.rows[0].result = GuessResult::PERFECT;
        assert!(Session::try_from(record).is_err());
    }

    #[test]
    fn record_with_wrong_status_rejected() {
        let words = dictionary();
        let mut s = session("hello");
        s.submit_guess("hello", &words).unwrap();

        let mut record = SessionRecord::from(s);
        record.status = GameStatus::InProgress;
        assert!(Session::try_from(record).is_err());
    }

    #[test]
    fn record_with_too_many_rows_rejected() {
        let words = dictionary();
        let mut s = Session::with_max_rows(Word::new("hello").unwrap(), 2);
        s.submit_guess("world", &words).unwrap();

        let mut record = SessionRecord::from(s);
        record.max_rows = 0;
        assert!(Session::try_from(record.clone()).is_err());

        record.max_rows = 1;
        record.rows.push(record.rows[0].clone());
        assert!(Session::try_from(record).is_err());
    }

    #[test]
    fn record_with_oversized_limit_rejected() {
        let mut record = SessionRecord::from(session("hello"));
        record.max_rows = ROW_LIMIT + 1;
        assert!(Session::try_from(record.clone()).is_err());

        record.max_rows = usize::MAX;
        assert!(Session::try_from(record).is_err());
    }

    #[test]
    fn lost_record_round_trip() {
        let words = dictionary();
        let mut s = Session::with_max_rows(Word::new("hello").unwrap(), 2);
        s.submit_guess("world", &words).unwrap();
        s.submit_guess("speed", &words).unwrap();
        assert_eq!(s.status(), GameStatus::Lost);

        let json = serde_json::to_string(&s).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, s);
        assert_eq!(restored.status(), GameStatus::Lost);
        assert_eq!(restored.remaining_attempts(), 0);
    }
}
