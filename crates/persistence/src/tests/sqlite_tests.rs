// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{PersistenceError, SqliteTokenStorage, TOKEN_KEY, TokenStorage};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

static FILE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A unique database path under the system temp directory.
fn temp_db_path() -> PathBuf {
    let id: u64 = FILE_COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!(
        "leaddesk_token_test_{}_{id}.db",
        std::process::id()
    ))
}

#[test]
fn test_empty_store_has_no_token() {
    let storage: SqliteTokenStorage = SqliteTokenStorage::new_in_memory().unwrap();

    assert_eq!(storage.load_token().unwrap(), None);
}

#[test]
fn test_save_and_load_token() {
    let storage: SqliteTokenStorage = SqliteTokenStorage::new_in_memory().unwrap();

    storage.save_token("abc").unwrap();

    assert_eq!(storage.load_token().unwrap().as_deref(), Some("abc"));
    assert_eq!(storage.get(TOKEN_KEY).unwrap().as_deref(), Some("abc"));
}

#[test]
fn test_save_replaces_previous_token() {
    let storage: SqliteTokenStorage = SqliteTokenStorage::new_in_memory().unwrap();

    storage.save_token("first").unwrap();
    storage.save_token("second").unwrap();

    assert_eq!(storage.load_token().unwrap().as_deref(), Some("second"));
}

#[test]
fn test_clear_token() {
    let storage: SqliteTokenStorage = SqliteTokenStorage::new_in_memory().unwrap();
    storage.save_token("abc").unwrap();

    storage.clear_token().unwrap();
    storage.clear_token().unwrap();

    assert_eq!(storage.load_token().unwrap(), None);
}

#[test]
fn test_other_keys_are_independent() {
    let storage: SqliteTokenStorage = SqliteTokenStorage::new_in_memory().unwrap();
    storage.set("theme", "dark").unwrap();
    storage.save_token("abc").unwrap();

    storage.clear_token().unwrap();

    assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn test_token_survives_reopen() {
    let path: PathBuf = temp_db_path();
    {
        let storage: SqliteTokenStorage = SqliteTokenStorage::new_with_file(&path).unwrap();
        storage.save_token("persisted").unwrap();
    }

    let reopened: SqliteTokenStorage = SqliteTokenStorage::new_with_file(&path).unwrap();
    let token: Option<String> = reopened.load_token().unwrap();
    drop(reopened);
    let _ = std::fs::remove_file(&path);

    assert_eq!(token.as_deref(), Some("persisted"));
}

#[test]
fn test_unopenable_path_fails() {
    let path: PathBuf = std::env::temp_dir()
        .join("leaddesk_missing_dir_for_tests")
        .join("nested")
        .join("token.db");

    let result: Result<SqliteTokenStorage, PersistenceError> =
        SqliteTokenStorage::new_with_file(&path);

    assert!(matches!(
        result,
        Err(PersistenceError::DatabaseConnectionFailed(_))
    ));
}

#[test]
fn test_error_display() {
    assert_eq!(
        PersistenceError::LockPoisoned.to_string(),
        "Storage lock poisoned"
    );
    assert_eq!(
        PersistenceError::DatabaseError(String::from("disk full")).to_string(),
        "Database error: disk full"
    );
}
