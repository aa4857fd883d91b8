//! Game state
//!
//! The session state machine, cross-session statistics and the engine that
//! ties them to a word source and storage.

mod engine;
mod session;
mod stats;

pub use engine::{Game, GameSetup};
pub use session::{CorruptSession, GameStatus, MAX_ROWS, ROW_LIMIT, Row, Session, SessionRecord};
pub use stats::Statistics;
