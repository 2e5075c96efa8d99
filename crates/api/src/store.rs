// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use leaddesk_domain::AuthUser;
use leaddesk_persistence::TokenStorage;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{ApiError, ConfigError};
use crate::lead_store::LeadStore;
use crate::session_store::SessionStore;
use crate::transport::{HttpTransport, Transport};

/// The session and lead stores wired to one transport.
///
/// Construct one per process (or per test) and hand references to
/// consumers; [`Store::reset`] restores both to their initial state.
pub struct Store<T> {
    session: SessionStore<T>,
    leads: LeadStore<T>,
}

impl Store<HttpTransport> {
    /// Creates stores talking HTTP to the configured backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn connect(
        config: &ApiConfig,
        storage: Arc<dyn TokenStorage>,
    ) -> Result<Self, ConfigError> {
        debug!(environment = %config.environment, base_url = %config.base_url, "Connecting");
        let transport: HttpTransport = HttpTransport::new(config)?;
        Ok(Self::new(Arc::new(transport), storage))
    }
}

impl<T: Transport + 'static> Store<T> {
    /// Wires both stores to `transport`; the lead store reads the session token.
    pub fn new(transport: Arc<T>, storage: Arc<dyn TokenStorage>) -> Self {
        let session: SessionStore<T> = SessionStore::new(Arc::clone(&transport), storage);
        let leads: LeadStore<T> = LeadStore::new(transport, session.subscribe());
        Self { session, leads }
    }

    #[must_use]
    pub const fn session(&self) -> &SessionStore<T> {
        &self.session
    }

    #[must_use]
    pub const fn leads(&self) -> &LeadStore<T> {
        &self.leads
    }

    /// Hydrates the user profile when a persisted token exists.
    ///
    /// Returns `Ok(None)` when there is no token to hydrate from.
    ///
    /// # Errors
    ///
    /// Returns the profile fetch failure.
    pub async fn init(&self) -> Result<Option<AuthUser>, ApiError> {
        if self.session.token().is_none() {
            return Ok(None);
        }
        self.session.load_user().await.map(Some)
    }

    /// Signs out and drops the displayed leads.
    ///
    /// Returns the handle of the background backend call, if one was made.
    #[must_use = "dropping the handle detaches the backend logout call"]
    pub fn logout(&self) -> Option<JoinHandle<()>> {
        let notify: Option<JoinHandle<()>> = self.session.logout();
        self.leads.reset();
        notify
    }

    /// Restores both stores to their initial in-memory state.
    pub fn reset(&self) {
        self.session.reset();
        self.leads.reset();
    }
}
