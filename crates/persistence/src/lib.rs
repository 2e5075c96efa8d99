// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the LeadDesk console.
//!
//! The console keeps exactly one durable value across runs: the bearer token
//! of the signed-in user, stored under the fixed key [`TOKEN_KEY`].
//!
//! ## Backends
//!
//! - [`SqliteTokenStorage`] keeps a `kv_store(key, value)` table in a
//!   `SQLite` file, or in a private in-memory database for tests
//! - [`MemoryTokenStorage`] keeps the token in process memory only

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod memory;
mod sqlite;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use memory::MemoryTokenStorage;
pub use sqlite::SqliteTokenStorage;

/// Key under which the bearer token is persisted.
pub const TOKEN_KEY: &str = "token";

/// Durable storage for the session token.
///
/// Implementations are shared with background tasks, so they must be usable
/// from several threads.
pub trait TokenStorage: Send + Sync {
    /// Returns the persisted token, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn load_token(&self) -> Result<Option<String>, PersistenceError>;

    /// Persists a token, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn save_token(&self, token: &str) -> Result<(), PersistenceError>;

    /// Removes the persisted token. Clearing an empty store succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn clear_token(&self) -> Result<(), PersistenceError>;
}
