//! Statistics and reset commands

use crate::output::print_statistics;
use crate::storage::Persistence;
use anyhow::{Context, Result};
use tracing::info;

/// Print the saved statistics
pub fn run_stats(persistence: &Persistence, max_rows: usize) {
    let statistics = persistence.load_statistics().unwrap_or_default();
    print_statistics(&statistics, max_rows);
}

/// Delete the saved session and statistics
///
/// # Errors
///
/// Returns an error if the stored records cannot be removed.
pub fn run_reset(persistence: &mut Persistence) -> Result<()> {
    persistence
        .clear()
        .context("failed to delete saved game data")?;
    info!("Saved session and statistics deleted");
    println!("Saved game and statistics deleted.");
    Ok(())
}
