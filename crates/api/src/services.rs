// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed wrappers over the [`Transport`] for each backend resource.

use leaddesk::LeadPage;
use leaddesk_domain::{AuthUser, Lead};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use crate::config::{
    AUTH_LOGIN, AUTH_LOGOUT, AUTH_REFRESH_TOKEN, AUTH_REGISTER, AUTH_USER, LEADS, lead_path,
};
use crate::error::ApiError;
use crate::request_response::{
    LeadListResponse, LeadResponse, LoginRequest, LoginResponse, RefreshTokenRequest,
    RegisterRequest, RegisterResponse, TokenResponse, UserResponse,
};
use crate::transport::{ApiRequest, QueryParams, Transport};

const FETCH_LEADS_FAILED: &str = "Failed to fetch leads";
const FETCH_LEAD_FAILED: &str = "Failed to fetch lead";
const UPDATE_LEAD_FAILED: &str = "Failed to update lead";

fn decode<R: DeserializeOwned>(value: Value) -> Result<R, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Authentication endpoints.
pub struct AuthService<T> {
    transport: Arc<T>,
}

impl<T> Clone for AuthService<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> AuthService<T> {
    #[must_use]
    pub const fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Exchanges credentials for a user profile and bearer token.
    ///
    /// # Errors
    ///
    /// Returns the transport error, or `ApiError::Decode` if the response
    /// lacks a user or token.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body: Value = encode(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })?;
        let value: Value = self
            .transport
            .request(ApiRequest::post(AUTH_LOGIN).with_body(body))
            .await?;
        decode(value)
    }

    /// Creates an account.
    ///
    /// # Errors
    ///
    /// Returns the transport error, or `ApiError::Rejected` if the backend
    /// reports `success: false`.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisterResponse, ApiError> {
        let body: Value = encode(&RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })?;
        let value: Value = self
            .transport
            .request(ApiRequest::post(AUTH_REGISTER).with_body(body))
            .await?;
        let response: RegisterResponse = if value.is_null() {
            RegisterResponse::default()
        } else {
            decode(value)?
        };
        if response.success == Some(false) {
            return Err(ApiError::Rejected(
                response
                    .message
                    .unwrap_or_else(|| String::from("Registration failed")),
            ));
        }
        Ok(response)
    }

    /// Ends the session on the backend.
    ///
    /// # Errors
    ///
    /// Returns the transport error.
    pub async fn logout(&self, token: &str) -> Result<(), ApiError> {
        self.transport
            .request(
                ApiRequest::post(AUTH_LOGOUT)
                    .with_body(Value::Object(serde_json::Map::new()))
                    .with_token(Some(token)),
            )
            .await?;
        Ok(())
    }

    /// Exchanges a refresh token for a new bearer token.
    ///
    /// # Errors
    ///
    /// Returns the transport error, or `ApiError::Decode` if no token is
    /// returned.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<String, ApiError> {
        let body: Value = encode(&RefreshTokenRequest {
            refresh_token: refresh_token.to_string(),
        })?;
        let value: Value = self
            .transport
            .request(ApiRequest::post(AUTH_REFRESH_TOKEN).with_body(body))
            .await?;
        let response: TokenResponse = decode(value)?;
        Ok(response.token)
    }

    /// Fetches the profile behind a token.
    ///
    /// # Errors
    ///
    /// Returns the transport error, or `ApiError::Decode` if no user is
    /// returned.
    pub async fn get_user(&self, token: &str) -> Result<AuthUser, ApiError> {
        let value: Value = self
            .transport
            .request(ApiRequest::get(AUTH_USER).with_token(Some(token)))
            .await?;
        let response: UserResponse = decode(value)?;
        Ok(response.user)
    }
}

/// Lead endpoints.
pub struct LeadService<T> {
    transport: Arc<T>,
}

impl<T> Clone for LeadService<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> LeadService<T> {
    #[must_use]
    pub const fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Fetches one page of leads.
    ///
    /// # Errors
    ///
    /// Returns the transport error, or `ApiError::Rejected` with the body's
    /// message (default "Failed to fetch leads") if `success` is false.
    pub async fn list(
        &self,
        token: Option<&str>,
        query: QueryParams,
    ) -> Result<LeadPage, ApiError> {
        let value: Value = self
            .transport
            .request(ApiRequest::get(LEADS).with_token(token).with_query(query))
            .await?;
        let response: LeadListResponse = decode(value)?;
        if !response.success {
            return Err(rejected(response.message, FETCH_LEADS_FAILED));
        }
        Ok(LeadPage {
            leads: response.leads,
            total_pages: response.total_pages,
            total_leads: response.total_leads,
        })
    }

    /// Fetches a single lead.
    ///
    /// # Errors
    ///
    /// Returns the transport error, or `ApiError::Rejected` if `success` is
    /// false or no lead is returned.
    pub async fn get(&self, id: &str, token: Option<&str>) -> Result<Lead, ApiError> {
        let value: Value = self
            .transport
            .request(ApiRequest::get(&lead_path(id)).with_token(token))
            .await?;
        lead_from(decode(value)?, FETCH_LEAD_FAILED)
    }

    /// Replaces a lead with the given full record and returns the stored one.
    ///
    /// # Errors
    ///
    /// Returns the transport error, or `ApiError::Rejected` with the body's
    /// message (default "Failed to update lead") if `success` is false.
    pub async fn update(&self, lead: &Lead, token: Option<&str>) -> Result<Lead, ApiError> {
        let body: Value = encode(lead)?;
        let value: Value = self
            .transport
            .request(
                ApiRequest::put(&lead_path(&lead.id))
                    .with_body(body)
                    .with_token(token),
            )
            .await?;
        lead_from(decode(value)?, UPDATE_LEAD_FAILED)
    }
}

fn rejected(message: Option<String>, fallback: &str) -> ApiError {
    ApiError::Rejected(
        message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string()),
    )
}

fn lead_from(response: LeadResponse, fallback: &str) -> Result<Lead, ApiError> {
    match (response.success, response.lead) {
        (true, Some(lead)) => Ok(lead),
        (_, _) => Err(rejected(response.message, fallback)),
    }
}
