// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The HTTP boundary.
//!
//! Every backend call goes through [`Transport::request`], which returns the
//! parsed JSON body or a single [`ApiError`] carrying a human-readable
//! message. [`HttpTransport`] is the production implementation.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use std::future::Future;
use tracing::{debug, warn};
use url::form_urlencoded;

use crate::config::ApiConfig;
use crate::error::{ApiError, ConfigError};

const JSON_MEDIA_TYPE: &str = "application/json";

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Whether a request body is sent with this method.
    #[must_use]
    pub const fn sends_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }

    const fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Ordered query parameters. A key may repeat, which is how list values
/// such as `tags` are sent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter.
    pub fn push(&mut self, key: &str, value: &str) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    /// Appends one entry per value under the same key.
    pub fn push_all<I, S>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for value in values {
            self.push(key, value.as_ref());
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns every value recorded for a key, in order.
    #[must_use]
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serializes to a form-urlencoded query string without a leading `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

impl From<Vec<(&'static str, String)>> for QueryParams {
    fn from(pairs: Vec<(&'static str, String)>) -> Self {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        }
    }
}

/// One backend call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Endpoint path appended to the base URL.
    pub path: String,
    /// JSON body; ignored for methods that do not send one.
    pub body: Option<Value>,
    /// Bearer token; no `Authorization` header is sent without one.
    pub token: Option<String>,
    /// Query parameters.
    pub query: QueryParams,
}

impl ApiRequest {
    /// Creates a request with no body, token or query.
    #[must_use]
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            body: None,
            token: None,
            query: QueryParams::new(),
        }
    }

    #[must_use]
    pub fn get(path: &str) -> Self {
        Self::new(Method::Get, path)
    }

    #[must_use]
    pub fn post(path: &str) -> Self {
        Self::new(Method::Post, path)
    }

    #[must_use]
    pub fn put(path: &str) -> Self {
        Self::new(Method::Put, path)
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attaches a bearer token. An empty token is treated as none.
    #[must_use]
    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token = token.filter(|t| !t.is_empty()).map(ToString::to_string);
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }
}

/// Issues backend calls.
///
/// Implementations must be shareable across tasks; stores hold them behind
/// an `Arc` and the session store spawns its logout call.
pub trait Transport: Send + Sync {
    /// Sends a request and returns the parsed JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` if no response arrives,
    /// `ApiError::Http` for a non-success status and `ApiError::Decode` if
    /// a success body is not JSON.
    fn request(&self, request: ApiRequest) -> impl Future<Output = Result<Value, ApiError>> + Send;
}

/// [`Transport`] over HTTP using `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Creates a transport for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::HttpClient` if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &ApiConfig) -> Result<Self, ConfigError> {
        let client: reqwest::Client = reqwest::Client::builder()
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a path and query.
    #[must_use]
    pub fn url_for(&self, path: &str, query: &QueryParams) -> String {
        let mut url: String = format!("{}{path}", self.base_url);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.to_query_string());
        }
        url
    }
}

impl Transport for HttpTransport {
    async fn request(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let url: String = self.url_for(&request.path, &request.query);
        debug!(method = request.method.as_str(), path = %request.path, "Sending request");

        let mut builder: reqwest::RequestBuilder = self
            .client
            .request(request.method.to_reqwest(), &url)
            .header(CONTENT_TYPE, JSON_MEDIA_TYPE)
            .header(ACCEPT, JSON_MEDIA_TYPE);
        if let Some(token) = &request.token {
            builder = builder.bearer_auth(token);
        }
        if let (true, Some(body)) = (request.method.sends_body(), &request.body) {
            builder = builder.body(body.to_string());
        }

        let response: reqwest::Response = builder.send().await.map_err(|e| {
            warn!(path = %request.path, error = %e, "No response from server");
            ApiError::Network
        })?;
        let status: u16 = response.status().as_u16();
        let success: bool = response.status().is_success();
        let text: String = response.text().await.map_err(|e| {
            warn!(path = %request.path, status, error = %e, "Failed to read response body");
            ApiError::Network
        })?;

        if !success {
            let message: String = error_message(status, &text);
            debug!(path = %request.path, status, %message, "Request failed");
            return Err(ApiError::Http { status, message });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Extracts a human-readable message from a non-success response body.
///
/// A JSON body's `message` wins; a JSON body without one yields
/// `"Error: <status>"`; anything unparseable yields `"Server error: <status>"`.
#[must_use]
pub fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => value
            .get("message")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .map_or_else(|| format!("Error: {status}"), ToString::to_string),
        Err(_) => format!("Server error: {status}"),
    }
}
