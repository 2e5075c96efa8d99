// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::{Mutex, MutexGuard};

use crate::TokenStorage;
use crate::error::PersistenceError;

/// Process-local token storage; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage that already holds a token.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }

    fn slot(&self) -> Result<MutexGuard<'_, Option<String>>, PersistenceError> {
        self.token.lock().map_err(|_| PersistenceError::LockPoisoned)
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load_token(&self) -> Result<Option<String>, PersistenceError> {
        Ok(self.slot()?.clone())
    }

    fn save_token(&self, token: &str) -> Result<(), PersistenceError> {
        *self.slot()? = Some(token.to_string());
        Ok(())
    }

    fn clear_token(&self) -> Result<(), PersistenceError> {
        *self.slot()? = None;
        Ok(())
    }
}
