//! Durable account storage for the login window.
//!
//! Provides:
//! - [`CredentialStore`]: one SQLite file behind one owned connection,
//!   exposing `register` and `authenticate`
//! - [`RegisterOutcome`]: created vs. already registered, each carrying its
//!   display text
//!
//! ## Design decisions
//! - A registration conflict is an ordinary outcome, not an error: the
//!   window shows a message either way, so the caller should not need an
//!   error path for it.
//! - The unique email column keeps SQLite's default BINARY collation;
//!   identifiers are case-sensitive end to end.
//! - Passwords are stored and compared exactly as submitted. See the crate
//!   docs before reusing this outside the desktop app it was written for.

pub mod credentials;

pub use credentials::{CredentialStore, RegisterOutcome};
