// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Profile of the staff member signed in to the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// The user's backend identifier.
    pub id: String,
    /// The user's login name.
    #[serde(default)]
    pub username: String,
    /// The user's email address.
    #[serde(default)]
    pub email: String,
}

impl AuthUser {
    /// Creates a new user profile.
    #[must_use]
    pub fn new(id: &str, username: &str, email: &str) -> Self {
        Self {
            id: id.to_string(),
            username: username.to_string(),
            email: email.to_string(),
        }
    }
}
