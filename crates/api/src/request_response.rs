// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use leaddesk_domain::{AuthUser, Lead};
use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    /// The signed-in user.
    pub user: AuthUser,
    /// The issued bearer token.
    pub token: String,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Response of `POST /auth/register`. The backend may or may not sign the
/// new user in, so every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct RegisterResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<AuthUser>,
    #[serde(default)]
    pub token: Option<String>,
}

/// Body of `POST /auth/refresh-token`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Response of `POST /auth/refresh-token`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Response of `GET /auth/user`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserResponse {
    pub user: AuthUser,
}

/// Response of `GET /leads`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadListResponse {
    /// Whether the backend accepted the query.
    #[serde(default)]
    pub success: bool,
    /// The requested page.
    #[serde(default)]
    pub leads: Vec<Lead>,
    /// Total pages for the query.
    #[serde(default)]
    pub total_pages: u32,
    /// Total matching leads.
    #[serde(default)]
    pub total_leads: u64,
    /// Failure detail when `success` is false.
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `GET /leads/:id` and `PUT /leads/:id`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LeadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub lead: Option<Lead>,
    #[serde(default)]
    pub message: Option<String>,
}
