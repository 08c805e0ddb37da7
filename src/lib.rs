//! Credential storage for the Kiru desktop login window.
//!
//! Provides:
//! - Account registration against a single SQLite file, with duplicate
//!   emails reported as a normal outcome rather than an error
//! - Login checks ([`CredentialStore::authenticate`]) that answer with one
//!   generic yes/no, never revealing which half of the pair was wrong
//! - The localized message catalog the window displays ([`messages`])
//! - Form presence validation shared by every front end ([`form`])
//! - Database-location configuration via an optional TOML file ([`config`])
//!
//! ## Design decisions
//! - The store owns its `rusqlite` connection: opened once at construction
//!   and closed on drop. There is no process-wide database handle to reach
//!   for.
//! - Every operation is synchronous and runs to completion; this backs an
//!   interactive window, not a server.
//! - **Passwords are stored in plaintext**, byte-for-byte, because that is
//!   what the desktop app does. Put a salted hash in front of [`register`]
//!   before reusing this store anywhere that matters.
//!
//! ```
//! use kiru::CredentialStore;
//!
//! let dir = tempfile::tempdir()?;
//! let store = CredentialStore::open(&dir.path().join("users.db"))?;
//!
//! let outcome = store.register("aruzhan@mail.kz", "qupiya")?;
//! assert!(outcome.is_created());
//! assert!(store.authenticate("aruzhan@mail.kz", "qupiya")?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`register`]: CredentialStore::register

pub mod config;
pub mod error;
pub mod form;
pub mod messages;
pub mod store;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use form::FormError;
pub use store::{CredentialStore, RegisterOutcome};
