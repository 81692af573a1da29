//! Error types for the record store.

use std::path::PathBuf;
use thiserror::Error;

/// Record store result type.
pub type Result<T> = std::result::Result<T, DbError>;

/// Record store errors.
///
/// The `Display` text is what the form shows to the user, so it stays close
/// to the engine's own message.
#[derive(Error, Debug)]
pub enum DbError {
    /// SQLite error (open, prepare, step, constraint, ...)
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// IO error (file system operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Database file does not exist
    #[error("Database not found: {}", .0.display())]
    NotFound(PathBuf),
}

impl DbError {
    /// True when the engine rejected the write because of a constraint.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            DbError::Sqlite(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }
}
