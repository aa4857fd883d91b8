//! Game engine
//!
//! Composes the word source, the current session, statistics and persistence.
//! Presentation adapters talk only to [`Game`].

use super::session::{GameStatus, Session};
use super::stats::Statistics;
use crate::error::GuessError;
use crate::storage::Persistence;
use crate::wordlists::WordSource;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

/// Everything needed to start a game except the word source
///
/// Lets an adapter prepare the game while the dictionary is still loading.
pub struct GameSetup {
    pub persistence: Persistence,
    pub max_rows: usize,
    pub rng: StdRng,
}

impl GameSetup {
    /// Seeded setups pick the same targets every run
    #[must_use]
    pub fn new(persistence: Persistence, max_rows: usize, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            persistence,
            max_rows,
            rng,
        }
    }

    /// Restore saved state and start playing
    ///
    /// Statistics default to zero when absent. A saved session is resumed
    /// whatever its status; otherwise a new target is picked.
    pub fn start<W: WordSource>(self, words: W) -> Game<W> {
        let Self {
            mut persistence,
            max_rows,
            mut rng,
        } = self;

        let statistics = persistence.load_statistics().unwrap_or_default();
        let (session, restored) = match persistence.load_session() {
            Some(session) => {
                info!(
                    rows = session.rows().len(),
                    status = ?session.status(),
                    "Resumed saved session"
                );
                (session, true)
            }
            None => {
                let session = Session::with_max_rows(words.pick_target(&mut rng), max_rows);
                if let Err(err) = persistence.save_session(&session) {
                    warn!(error = %err, "Failed to save new session");
                }
                info!("Started new session");
                (session, false)
            }
        };

        Game {
            words,
            session,
            statistics,
            persistence,
            max_rows,
            rng,
            restored,
        }
    }
}

/// A running game
pub struct Game<W: WordSource> {
    words: W,
    session: Session,
    statistics: Statistics,
    persistence: Persistence,
    max_rows: usize,
    rng: StdRng,
    restored: bool,
}

impl<W: WordSource> Game<W> {
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    #[must_use]
    pub const fn words(&self) -> &W {
        &self.words
    }

    /// Whether the current session came from storage
    #[must_use]
    pub const fn restored(&self) -> bool {
        self.restored
    }

    /// See [`Session::append_letter`]
    pub fn type_letter(&mut self, ch: char) -> bool {
        self.session.append_letter(ch)
    }

    /// See [`Session::remove_last_letter`]
    pub fn backspace(&mut self) -> bool {
        self.session.remove_last_letter()
    }

    /// Submit the typed guess
    ///
    /// # Errors
    ///
    /// Returns the rejection from [`Session::submit_guess`]; nothing changes.
    pub fn submit(&mut self) -> Result<GameStatus, GuessError> {
        self.session.submit_buffer(&self.words)?;
        Ok(self.after_submit())
    }

    /// Submit a whole word at once, bypassing the buffer
    ///
    /// # Errors
    ///
    /// Returns the rejection from [`Session::submit_guess`]; nothing changes.
    pub fn submit_word(&mut self, guess: &str) -> Result<GameStatus, GuessError> {
        self.session.submit_guess(guess, &self.words)?;
        Ok(self.after_submit())
    }

    fn after_submit(&mut self) -> GameStatus {
        let status = self.session.status();

        if status.is_terminal() {
            self.statistics.record(&self.session);
            info!(
                status = ?status,
                rows = self.session.rows().len(),
                target = %self.session.target(),
                streak = self.statistics.current_streak,
                "Game finished"
            );
            if let Err(err) = self.persistence.save_statistics(&self.statistics) {
                warn!(error = %err, "Failed to save statistics");
            }
        }

        if let Err(err) = self.persistence.save_session(&self.session) {
            warn!(error = %err, "Failed to save session");
        }

        status
    }

    /// Replace the session with a fresh one
    ///
    /// An unfinished session is abandoned without affecting statistics.
    pub fn new_game(&mut self) {
        if !self.session.status().is_terminal() && !self.session.rows().is_empty() {
            info!(
                rows = self.session.rows().len(),
                "Abandoning unfinished session"
            );
        }

        self.session = Session::with_max_rows(self.words.pick_target(&mut self.rng), self.max_rows);
        self.restored = false;
        if let Err(err) = self.persistence.save_session(&self.session) {
            warn!(error = %err, "Failed to save new session");
        }
    }

    /// Zero the statistics and persist them
    pub fn reset_statistics(&mut self) {
        self.statistics = Statistics::default();
        if let Err(err) = self.persistence.save_statistics(&self.statistics) {
            warn!(error = %err, "Failed to save statistics");
        }
    }
}
