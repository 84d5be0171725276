//! SQLite bootstrap behind the key-value storage boundary.
//!
//! # Responsibility
//! - Open file or in-memory databases for `SqliteKeyValueStore`.
//! - Bring the `kv_entries` schema up to date before first use.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - A database written by a newer build is refused, never downgraded.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// SQLite failure, tagged with the bootstrap or storage step that hit it.
#[derive(Debug)]
pub enum DbError {
    /// Connection could not be established (`mode` is `file` or `memory`).
    Connect {
        mode: &'static str,
        source: rusqlite::Error,
    },
    /// Schema step `version` failed to apply.
    Migrate {
        version: u32,
        source: rusqlite::Error,
    },
    /// Database schema is newer than this build supports.
    SchemaTooNew { found: u32, supported: u32 },
    /// Key-value statement or connection setting failed.
    Statement(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connect { mode, source } => {
                write!(f, "failed to open {mode} key-value database: {source}")
            }
            Self::Migrate { version, source } => {
                write!(f, "key-value schema step {version} failed: {source}")
            }
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "key-value schema version {found} is newer than supported {supported}"
            ),
            Self::Statement(source) => write!(f, "key-value statement failed: {source}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Connect { source, .. } | Self::Migrate { source, .. } => Some(source),
            Self::Statement(source) => Some(source),
            Self::SchemaTooNew { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Statement(value)
    }
}
