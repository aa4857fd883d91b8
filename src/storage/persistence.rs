//! Typed save/load of the session and statistics records
//!
//! Absent or corrupt records load as `None`; the caller starts fresh.

use super::{FileStore, MemoryStore, Store};
use crate::error::StorageError;
use crate::game::{Session, Statistics};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Storage key of the current session
pub const SESSION_KEY: &str = "wordle-session";

/// Storage key of the cross-session statistics
pub const STATISTICS_KEY: &str = "wordle-statistics";

pub struct Persistence {
    store: Box<dyn Store>,
}

impl Persistence {
    #[must_use]
    pub fn new(store: Box<dyn Store>) -> Self {
        Self { store }
    }

    /// Persist to `<dir>/wordle-*.json`
    #[must_use]
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(Box::new(FileStore::new(dir)))
    }

    /// Persist nothing beyond the process
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be serialized or written.
    pub fn save_session(&mut self, session: &Session) -> Result<(), StorageError> {
        self.save(SESSION_KEY, session)
    }

    #[must_use]
    pub fn load_session(&self) -> Option<Session> {
        self.load(SESSION_KEY)
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be serialized or written.
    pub fn save_statistics(&mut self, statistics: &Statistics) -> Result<(), StorageError> {
        self.save(STATISTICS_KEY, statistics)
    }

    #[must_use]
    pub fn load_statistics(&self) -> Option<Statistics> {
        let statistics: Statistics = self.load(STATISTICS_KEY)?;
        if statistics.is_consistent() {
            Some(statistics)
        } else {
            warn!(key = STATISTICS_KEY, "Ignoring inconsistent statistics record");
            None
        }
    }

    /// Delete both records
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if either record cannot be removed.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.remove(SESSION_KEY)?;
        self.store.remove(STATISTICS_KEY)
    }

    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(value)?;
        self.store.write(key, &json)?;
        debug!(key, "Record saved");
        Ok(())
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(key, error = %err, "Failed to read record");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key, error = %err, "Ignoring corrupt record");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameStatus;
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;

    fn played_session() -> Session {
        let words = Dictionary::from_words(words_from_slice(&["HELLO", "WORLD", "CRANE"]));
        let mut session = Session::new(Word::new("hello").unwrap());
        session.submit_guess("world", &words).unwrap();
        session.submit_guess("crane", &words).unwrap();
        session
    }

    #[test]
    fn empty_store_loads_nothing() {
        let persistence = Persistence::in_memory();
        assert!(persistence.load_session().is_none());
        assert!(persistence.load_statistics().is_none());
    }

    #[test]
    fn session_round_trip() {
        let mut persistence = Persistence::in_memory();
        let session = played_session();
        persistence.save_session(&session).unwrap();
        assert_eq!(persistence.load_session(), Some(session));
    }

    #[test]
    fn statistics_round_trip() {
        let mut persistence = Persistence::in_memory();
        let mut statistics = Statistics::default();
        statistics.record_win(4);
        statistics.record_loss();
        persistence.save_statistics(&statistics).unwrap();
        assert_eq!(persistence.load_statistics(), Some(statistics));
    }

    #[test]
    fn corrupt_records_load_as_none() {
        let mut store = MemoryStore::new();
        store.write(SESSION_KEY, "{ not json").unwrap();
        store.write(STATISTICS_KEY, r#"{"games_played":"many"}"#).unwrap();

        let persistence = Persistence::new(Box::new(store));
        assert!(persistence.load_session().is_none());
        assert!(persistence.load_statistics().is_none());
    }

    #[test]
    fn inconsistent_statistics_load_as_none() {
        let mut store = MemoryStore::new();
        store
            .write(
                STATISTICS_KEY,
                r#"{"games_played":1,"games_won":5,"current_streak":0,"max_streak":0}"#,
            )
            .unwrap();
        assert!(Persistence::new(Box::new(store)).load_statistics().is_none());
    }

    #[test]
    fn session_with_invalid_target_loads_as_none() {
        let mut store = MemoryStore::new();
        store
            .write(
                SESSION_KEY,
                r#"{"target":"HI","rows":[],"max_rows":6,"status":"in_progress"}"#,
            )
            .unwrap();
        assert!(Persistence::new(Box::new(store)).load_session().is_none());
    }

    #[test]
    fn session_with_huge_row_limit_loads_as_none() {
        let mut store = MemoryStore::new();
        store
            .write(
                SESSION_KEY,
                r#"{"target":"HELLO","rows":[],"max_rows":18446744073709551615,"status":"in_progress"}"#,
            )
            .unwrap();
        assert!(Persistence::new(Box::new(store)).load_session().is_none());
    }

    #[test]
    fn lost_session_round_trip() {
        let words = Dictionary::from_words(words_from_slice(&["HELLO", "WORLD"]));
        let mut session = Session::with_max_rows(Word::new("hello").unwrap(), 1);
        session.submit_guess("world", &words).unwrap();
        assert_eq!(session.status(), GameStatus::Lost);

        let mut persistence = Persistence::in_memory();
        persistence.save_session(&session).unwrap();
        assert_eq!(persistence.load_session(), Some(session));
    }

    #[test]
    fn saturated_statistics_still_record() {
        let mut store = MemoryStore::new();
        store
            .write(
                STATISTICS_KEY,
                r#"{"games_played":4294967295,"games_won":4294967295,"current_streak":4294967295,"max_streak":4294967295}"#,
            )
            .unwrap();
        let persistence = Persistence::new(Box::new(store));
        let mut statistics = persistence.load_statistics().unwrap();

        statistics.record_loss();
        statistics.record_win(1);
        assert_eq!(statistics.games_played, u32::MAX);
        assert_eq!(statistics.current_streak, 1);
    }

    #[test]
    fn clear_removes_both_records() {
        let mut persistence = Persistence::in_memory();
        persistence.save_session(&played_session()).unwrap();
        persistence.save_statistics(&Statistics::default()).unwrap();

        persistence.clear().unwrap();
        assert!(persistence.load_session().is_none());
        assert!(persistence.load_statistics().is_none());
    }

    #[test]
    fn file_backed_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let session = played_session();
        Persistence::in_dir(dir.path()).save_session(&session).unwrap();

        assert!(dir.path().join("wordle-session.json").exists());
        assert_eq!(Persistence::in_dir(dir.path()).load_session(), Some(session));
    }
}
