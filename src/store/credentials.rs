//! SQLite-backed credential store.
//!
//! Table:
//! - `users`: id, email (unique), password

use std::path::Path;

use parking_lot::Mutex;
use rusqlite::{params, Connection};

use crate::error::{Result, StoreError};
use crate::messages;

/// Outcome of a registration attempt.
///
/// A duplicate email is a normal outcome the window displays, not an error
/// the caller has to catch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// Account created and committed; `id` is the rowid SQLite assigned.
    Created { id: i64 },
    /// The email is already registered; nothing was written.
    AlreadyRegistered,
}

impl RegisterOutcome {
    /// Display text for the message box.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Created { .. } => messages::REGISTER_SUCCESS,
            Self::AlreadyRegistered => messages::EMAIL_TAKEN,
        }
    }

    /// `true` when a new account was written.
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created { .. })
    }
}

/// SQLite-backed store of email/password accounts.
///
/// Owns its connection for its whole lifetime: opened once in [`open`],
/// closed on drop. Construct it where the window starts and pass it down;
/// it is deliberately not a process-wide singleton.
///
/// [`open`]: CredentialStore::open
pub struct CredentialStore {
    conn: Mutex<Connection>,
}

impl CredentialStore {
    /// Open (or create) the credential database at the given path.
    ///
    /// Missing parent directories are created. Safe to call against an
    /// existing database: the schema init is `IF NOT EXISTS` and leaves
    /// prior rows alone.
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let conn = Connection::open(db_path).map_err(|source| StoreError::Open {
            path: db_path.to_path_buf(),
            source,
        })?;

        // WAL keeps login reads from blocking registration writes and
        // survives an app crash mid-commit.
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )?;

        Self::init_schema(&conn)?;

        tracing::info!(path = %db_path.display(), "Credential store opened");

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS users (
                id       INTEGER PRIMARY KEY AUTOINCREMENT,
                email    TEXT UNIQUE NOT NULL,
                password TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Insert a new account.
    ///
    /// Takes the fields exactly as the form submitted them, empty strings
    /// included; presence checks belong to [`crate::form`]. The row is
    /// committed before this returns. The unique email column keeps
    /// SQLite's default BINARY collation, so `A@x.com` and `a@x.com` are
    /// different accounts.
    pub fn register(&self, email: &str, password: &str) -> Result<RegisterOutcome> {
        let conn = self.conn.lock();
        let result = conn.execute(
            "INSERT INTO users (email, password) VALUES (?1, ?2)",
            params![email, password],
        );

        match result {
            Ok(_) => {
                let id = conn.last_insert_rowid();
                tracing::debug!(id, "Account registered");
                Ok(RegisterOutcome::Created { id })
            }
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Ok(RegisterOutcome::AlreadyRegistered)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// `true` iff an account with exactly this email and password exists.
    ///
    /// Unknown email and wrong password both come back `false`; the window
    /// shows [`messages::INVALID_CREDENTIALS`] either way. Matching is
    /// byte-for-byte: no trimming, no case folding.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<bool> {
        let conn = self.conn.lock();
        let row = conn.query_row(
            "SELECT 1 FROM users WHERE email = ?1 AND password = ?2",
            params![email, password],
            |_| Ok(()),
        );

        match row {
            Ok(()) => Ok(true),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Number of stored accounts.
    pub fn count(&self) -> Result<u64> {
        let conn = self.conn.lock();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}
