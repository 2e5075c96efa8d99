// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite`-backed key-value storage.

use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

use crate::error::PersistenceError;
use crate::{TOKEN_KEY, TokenStorage};

/// Token storage in a single-table `SQLite` database.
pub struct SqliteTokenStorage {
    conn: Mutex<Connection>,
}

impl SqliteTokenStorage {
    /// Creates storage backed by a private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let conn: Connection = Connection::open_in_memory()
            .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;
        Self::from_connection(conn)
    }

    /// Creates storage backed by a database file, creating it if missing.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path: &Path = path.as_ref();
        info!(path = %path.display(), "Opening token store");
        let conn: Connection = Connection::open(path)
            .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, PersistenceError> {
        initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, PersistenceError> {
        self.conn.lock().map_err(|_| PersistenceError::LockPoisoned)
    }

    /// Reads a value by key.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let conn: MutexGuard<'_, Connection> = self.lock()?;
        let value: Option<String> = conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Writes a value, replacing any previous value for the key.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails.
    pub fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let conn: MutexGuard<'_, Connection> = self.lock()?;
        conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        debug!(key, "Stored value");
        Ok(())
    }

    /// Deletes a key. Deleting a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails.
    pub fn remove(&self, key: &str) -> Result<(), PersistenceError> {
        let conn: MutexGuard<'_, Connection> = self.lock()?;
        let removed: usize = conn.execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        debug!(key, removed, "Removed value");
        Ok(())
    }
}

impl TokenStorage for SqliteTokenStorage {
    fn load_token(&self) -> Result<Option<String>, PersistenceError> {
        self.get(TOKEN_KEY)
    }

    fn save_token(&self, token: &str) -> Result<(), PersistenceError> {
        self.set(TOKEN_KEY, token)
    }

    fn clear_token(&self) -> Result<(), PersistenceError> {
        self.remove(TOKEN_KEY)
    }
}

fn initialize_schema(conn: &Connection) -> Result<(), PersistenceError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        );
        ",
    )
    .map_err(|e| PersistenceError::InitializationError(e.to_string()))
}
