//! Durable storage
//!
//! A [`Store`] holds named string entries; [`Persistence`] layers the session
//! and statistics records on top of it.

mod file;
mod memory;
mod persistence;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use persistence::{Persistence, SESSION_KEY, STATISTICS_KEY};

use crate::error::StorageError;

/// Keyed string storage that survives restarts
pub trait Store: Send {
    /// Read an entry, `None` if it was never written or was removed
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing storage cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace an entry
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing storage cannot be written.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete an entry; removing a missing entry is not an error
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing storage cannot be modified.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
