// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The authenticated-user context.

use leaddesk::{SessionCommand, SessionState, apply_session};
use leaddesk_domain::AuthUser;
use leaddesk_persistence::TokenStorage;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::services::AuthService;
use crate::transport::Transport;

/// Holds the bearer token and user profile.
///
/// State lives in a `watch` channel: every transition is applied through
/// [`apply_session`] under the channel lock, and subscribers see each change.
/// The token is mirrored into [`TokenStorage`] so it survives restarts.
pub struct SessionStore<T> {
    auth: AuthService<T>,
    storage: Arc<dyn TokenStorage>,
    state: watch::Sender<SessionState>,
}

impl<T: Transport + 'static> SessionStore<T> {
    /// Creates a session store, restoring any persisted token.
    ///
    /// A token that cannot be read is logged and treated as absent.
    pub fn new(transport: Arc<T>, storage: Arc<dyn TokenStorage>) -> Self {
        let token: Option<String> = storage.load_token().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to restore persisted token");
            None
        });
        if token.is_some() {
            debug!("Restored persisted token");
        }
        let (state, _) = watch::channel(SessionState::new(token));
        Self {
            auth: AuthService::new(transport),
            storage,
            state,
        }
    }

    /// A copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.state.borrow().token.clone()
    }

    #[must_use]
    pub fn user(&self) -> Option<AuthUser> {
        self.state.borrow().user.clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state.borrow().error().map(ToString::to_string)
    }

    fn dispatch(&self, command: SessionCommand) {
        self.state.send_if_modified(|state| {
            let next: SessionState = apply_session(state, command);
            if next == *state {
                return false;
            }
            *state = next;
            true
        });
    }

    /// Signs in and persists the issued token.
    ///
    /// On failure the error is recorded and any existing token is kept.
    ///
    /// # Errors
    ///
    /// Returns the login failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthUser, ApiError> {
        self.dispatch(SessionCommand::LoginStarted);
        match self.auth.login(email, password).await {
            Ok(response) => {
                if let Err(e) = self.storage.save_token(&response.token) {
                    warn!(error = %e, "Failed to persist token");
                }
                info!(user_id = %response.user.id, "Signed in");
                self.dispatch(SessionCommand::LoginSucceeded {
                    user: response.user.clone(),
                    token: response.token,
                });
                Ok(response.user)
            }
            Err(err) => {
                warn!(error = %err, "Login failed");
                self.dispatch(SessionCommand::LoginFailed(err.to_string()));
                Err(err)
            }
        }
    }

    /// Fetches the profile for the held token.
    ///
    /// Only a token rejection clears the session (and the persisted token);
    /// any other failure keeps token and user so the call can be retried.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NoToken` without touching state if no token is
    /// held, or the fetch failure.
    pub async fn load_user(&self) -> Result<AuthUser, ApiError> {
        let Some(token) = self.token() else {
            return Err(ApiError::NoToken);
        };

        self.dispatch(SessionCommand::LoadUserStarted);
        match self.auth.get_user(&token).await {
            Ok(user) => {
                debug!(user_id = %user.id, "Loaded user profile");
                self.dispatch(SessionCommand::LoadUserSucceeded(user.clone()));
                Ok(user)
            }
            Err(err) => {
                let token_rejected: bool = err.is_token_rejection();
                if token_rejected {
                    info!(error = %err, "Token rejected; clearing session");
                    self.clear_persisted_token();
                } else {
                    warn!(error = %err, "Failed to load user");
                }
                self.dispatch(SessionCommand::LoadUserFailed {
                    message: err.to_string(),
                    token_rejected,
                });
                Err(err)
            }
        }
    }

    /// Signs out locally and tells the backend in the background.
    ///
    /// Never fails: the backend call is spawned on the current runtime (if
    /// any) and its failure is only logged. The returned handle completes
    /// once the backend call has finished; dropping it detaches the call.
    #[must_use = "dropping the handle detaches the backend logout call"]
    pub fn logout(&self) -> Option<JoinHandle<()>> {
        let notify: Option<JoinHandle<()>> = self.token().and_then(|token| {
            let auth: AuthService<T> = self.auth.clone();
            match Handle::try_current() {
                Ok(handle) => Some(handle.spawn(async move {
                    if let Err(err) = auth.logout(&token).await {
                        warn!(error = %err, "Logout request failed");
                    }
                })),
                Err(_) => {
                    debug!("No async runtime; skipping logout request");
                    None
                }
            }
        });
        self.clear_persisted_token();
        self.dispatch(SessionCommand::LoggedOut);
        info!("Signed out");
        notify
    }

    /// Dismisses the recorded error.
    pub fn clear_error(&self) {
        self.dispatch(SessionCommand::ClearError);
    }

    /// Restores the empty in-memory state without touching storage.
    pub fn reset(&self) {
        self.dispatch(SessionCommand::LoggedOut);
    }

    fn clear_persisted_token(&self) {
        if let Err(e) = self.storage.clear_token() {
            warn!(error = %e, "Failed to clear persisted token");
        }
    }
}
