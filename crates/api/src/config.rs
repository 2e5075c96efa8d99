// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend selection and endpoint paths.

use std::str::FromStr;
use url::{Url, form_urlencoded};

use crate::error::ConfigError;

/// Path of the login endpoint.
pub const AUTH_LOGIN: &str = "/auth/login";
/// Path of the registration endpoint.
pub const AUTH_REGISTER: &str = "/auth/register";
/// Path of the logout endpoint.
pub const AUTH_LOGOUT: &str = "/auth/logout";
/// Path of the token refresh endpoint.
pub const AUTH_REFRESH_TOKEN: &str = "/auth/refresh-token";
/// Path of the current-user endpoint.
pub const AUTH_USER: &str = "/auth/user";
/// Path of the lead collection.
pub const LEADS: &str = "/leads";

/// Path of a single lead, with the id percent-encoded as one segment.
#[must_use]
pub fn lead_path(id: &str) -> String {
    // form encoding writes a space as `+`; a literal `+` is already `%2B`
    let segment: String = form_urlencoded::byte_serialize(id.as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    format!("{LEADS}/{segment}")
}

/// Deployment the console talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Development,
    Staging,
    #[default]
    Production,
}

impl Environment {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }

    /// The API base URL of this deployment.
    #[must_use]
    pub const fn default_base_url(&self) -> &'static str {
        match self {
            Self::Development => "http://localhost:3000/api",
            Self::Staging => "https://api-staging.yourapp.com/api",
            Self::Production => "https://api.globalgrads.in/api",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ConfigError::UnknownEnvironment(s.to_string())),
        }
    }
}

/// Where the transport sends requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// The selected deployment.
    pub environment: Environment,
    /// Base URL without a trailing slash; endpoint paths are appended.
    pub base_url: String,
}

impl ApiConfig {
    /// Configuration pointing at the given deployment.
    #[must_use]
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            base_url: environment.default_base_url().to_string(),
        }
    }

    /// Overrides the base URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` if the URL does not parse or is
    /// not `http`/`https`.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        let parsed: Url = Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }
        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}
