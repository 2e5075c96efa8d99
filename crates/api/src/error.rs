// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use leaddesk::CoreError;
use thiserror::Error;

/// Messages the backend uses to reject a bearer token.
const TOKEN_REJECTION_MESSAGES: [&str; 2] = ["Token invalid", "Token expired"];

/// API-level errors.
///
/// The display string is the human-readable message recorded in store state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response was received.
    #[error("Network error: unable to reach server")]
    Network,
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Http {
        /// The HTTP status code.
        status: u16,
        /// The message extracted from the response.
        message: String,
    },
    /// A response body did not have the expected shape.
    #[error("Invalid response from server: {0}")]
    Decode(String),
    /// The backend answered successfully but reported `success: false`.
    #[error("{0}")]
    Rejected(String),
    /// An operation needed a token and none is held.
    #[error("No token found")]
    NoToken,
    /// A state transition was rejected.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ApiError {
    /// Returns whether the backend rejected the bearer token itself.
    ///
    /// Only these failures end a session; anything else is treated as
    /// transient.
    #[must_use]
    pub fn is_token_rejection(&self) -> bool {
        match self {
            Self::Http { status: 401, .. } => true,
            Self::Http { message, .. } | Self::Rejected(message) => {
                TOKEN_REJECTION_MESSAGES.contains(&message.as_str())
            }
            _ => false,
        }
    }

    /// The HTTP status, when the failure came with one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors raised while building configuration or the HTTP client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The environment name is not recognized.
    #[error("Unknown environment '{0}': expected development, staging or production")]
    UnknownEnvironment(String),
    /// The base URL override is not usable.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}
