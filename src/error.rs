//! Error types for the credential store.
//!
//! Only failures the store cannot recover from live here. A duplicate
//! registration is a normal [`RegisterOutcome`](crate::store::RegisterOutcome),
//! and empty form fields are the caller's problem ([`crate::form`]); neither
//! shows up as a `StoreError`.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Unrecoverable store failures.
///
/// These mean the backing database is unavailable or broken; the desktop app
/// treats them as fatal and exits. Library callers get the chance to decide
/// for themselves.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The directory that should hold the database could not be created.
    #[error("failed to create database directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The database file could not be opened.
    #[error("failed to open credential database at {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A statement against an open database failed.
    #[error("credential database operation failed")]
    Sqlite(#[from] rusqlite::Error),

    /// The config file exists but could not be read.
    #[error("failed to read config file {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this crate.
    #[error("invalid config file {}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
