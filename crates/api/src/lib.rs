// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Client boundary for the LeadDesk console.
//!
//! This crate turns the pure reducers of `leaddesk` into live stores:
//!
//! - [`Transport`] / [`HttpTransport`] issue backend calls and normalize
//!   failures into [`ApiError`]
//! - [`AuthService`] and [`LeadService`] wrap the endpoints
//! - [`SessionStore`], [`LeadStore`] and [`Store`] hold state in `watch`
//!   channels and drive the asynchronous lifecycles

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

mod config;
mod error;
mod lead_store;
mod request_response;
mod services;
mod session_store;
mod store;
mod transport;

#[cfg(test)]
mod tests;

pub use config::{
    AUTH_LOGIN, AUTH_LOGOUT, AUTH_REFRESH_TOKEN, AUTH_REGISTER, AUTH_USER, ApiConfig, Environment,
    LEADS, lead_path,
};
pub use error::{ApiError, ConfigError};
pub use lead_store::LeadStore;
pub use request_response::{
    LeadListResponse, LeadResponse, LoginRequest, LoginResponse, RefreshTokenRequest,
    RegisterRequest, RegisterResponse, TokenResponse, UserResponse,
};
pub use services::{AuthService, LeadService};
pub use session_store::SessionStore;
pub use store::Store;
pub use transport::{ApiRequest, HttpTransport, Method, QueryParams, Transport, error_message};
