//! SQLite storage layer for abcquiz.
//!
//! Provides:
//! - Opening the run history database
//! - Idempotent schema initialization
//! - Run record inserts and lookups

pub mod runs;
pub mod schema;

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use runs::{RunRecord, StoredRun};

/// Error type for storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to open database at {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Handle to the run history database.
///
/// Owns the single connection; it is closed when the store is dropped.
#[derive(Debug)]
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the database at `path`, creating the file if it does not exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| StorageError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Opened database");
        Ok(Self { conn })
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Execute one or more SQL statements without parameters.
    ///
    /// The connection is in autocommit mode, so each statement is committed
    /// as soon as it completes.
    pub fn execute(&self, sql: &str) -> Result<(), StorageError> {
        self.conn.execute_batch(sql)?;
        Ok(())
    }

    /// Create the `users` and `runs` tables if they are missing.
    pub fn initialize_schema(&self) -> Result<(), StorageError> {
        schema::initialize_schema(&self.conn)?;
        Ok(())
    }

    /// Insert a finished run and return its row id.
    pub fn record_run(&self, run: &RunRecord) -> Result<i64, StorageError> {
        Ok(runs::insert_run(&self.conn, run)?)
    }

    /// Whether a user row with this id exists.
    pub fn user_exists(&self, user_id: i64) -> Result<bool, StorageError> {
        Ok(runs::user_exists(&self.conn, user_id)?)
    }

    /// All runs for a user, oldest first.
    pub fn runs_for_user(&self, user_id: i64) -> Result<Vec<StoredRun>, StorageError> {
        Ok(runs::runs_for_user(&self.conn, user_id)?)
    }

    /// Total number of recorded runs.
    pub fn run_count(&self) -> Result<i64, StorageError> {
        Ok(runs::run_count(&self.conn)?)
    }
}
