//! Cross-session statistics
//!
//! Updated only when a session reaches a terminal state.

use super::session::{GameStatus, Session};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Number of wins keyed by the number of guesses they took
    #[serde(default)]
    pub guess_distribution: BTreeMap<usize, u32>,
}

impl Statistics {
    /// Record a win that took `guesses` rows
    ///
    /// Counters saturate at `u32::MAX`.
    pub fn record_win(&mut self, guesses: usize) {
        self.games_played = self.games_played.saturating_add(1);
        self.games_won = self.games_won.saturating_add(1);
        self.current_streak = self.current_streak.saturating_add(1);
        self.max_streak = self.max_streak.max(self.current_streak);
        let wins = self.guess_distribution.entry(guesses).or_insert(0);
        *wins = wins.saturating_add(1);
    }

    pub fn record_loss(&mut self) {
        self.games_played = self.games_played.saturating_add(1);
        self.current_streak = 0;
    }

    /// Record a finished session
    ///
    /// Returns `false` and does nothing if the session is still in progress.
    pub fn record(&mut self, session: &Session) -> bool {
        match session.status() {
            GameStatus::Won => self.record_win(session.rows().len()),
            GameStatus::Lost => self.record_loss(),
            GameStatus::InProgress => return false,
        }
        true
    }

    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played) * 100.0
        }
    }

    /// Check the relationships the update rules guarantee
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let distributed: u64 = self.guess_distribution.values().map(|&n| u64::from(n)).sum();
        self.games_won <= self.games_played
            && self.current_streak <= self.max_streak
            && self.max_streak <= self.games_won
            && distributed <= u64::from(self.games_won)
    }
}
