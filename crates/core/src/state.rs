// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use leaddesk_domain::{AuthUser, FilterSet, Lead};

/// Fixed page size for the lead list.
pub const ITEMS_PER_PAGE: u32 = 20;

/// Lifecycle of one asynchronous request.
///
/// A single enum replaces separate loading/error flags, so "loading with an
/// error" cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestStatus {
    /// No request has run since the last reset or dismissal.
    #[default]
    Idle,
    /// A request is in flight.
    Pending,
    /// The last request succeeded.
    Succeeded,
    /// The last request failed with the given message.
    Failed(String),
}

impl RequestStatus {
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns the failure message, if the last request failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Pagination counters for the lead list.
///
/// Invariant: `1 <= current_page <= max(1, total_pages)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// The 1-based page being displayed.
    pub current_page: u32,
    /// Total pages reported by the backend.
    pub total_pages: u32,
    /// Total matching leads reported by the backend.
    pub total_leads: u64,
    /// Page size.
    pub items_per_page: u32,
}

impl Pagination {
    /// Creates pagination positioned on page 1 of 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_leads: 0,
            items_per_page: ITEMS_PER_PAGE,
        }
    }

    /// The highest selectable page.
    #[must_use]
    pub fn last_page(&self) -> u32 {
        self.total_pages.max(1)
    }

    /// Clamps a requested page into `[1, last_page]`.
    #[must_use]
    pub fn clamp(&self, page: u32) -> u32 {
        page.clamp(1, self.last_page())
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page()
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}

/// One page of leads as returned by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadPage {
    /// The leads on this page.
    pub leads: Vec<Lead>,
    /// Total pages for the query.
    pub total_pages: u32,
    /// Total matching leads for the query.
    pub total_leads: u64,
}

/// State of the lead collection.
///
/// The store exclusively owns `leads`; each record is a value copy and an
/// edit replaces the old record by id.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadsState {
    /// The current page of leads.
    pub leads: Vec<Lead>,
    /// Pagination counters.
    pub pagination: Pagination,
    /// Free-text search term.
    pub search_query: String,
    /// Active filters.
    pub filters: FilterSet,
    /// Lifecycle of the list fetch.
    pub status: RequestStatus,
    /// Lifecycle of the last update.
    pub update_status: RequestStatus,
    /// The lead driving the profile and chat panels.
    pub selected_lead_id: Option<String>,
    /// Sequence number of the most recently issued fetch.
    pub latest_request_id: u64,
}

impl LeadsState {
    /// Creates the initial, empty lead state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            leads: Vec::new(),
            pagination: Pagination::new(),
            search_query: String::new(),
            filters: FilterSet::default(),
            status: RequestStatus::Idle,
            update_status: RequestStatus::Idle,
            selected_lead_id: None,
            latest_request_id: 0,
        }
    }

    /// Returns whether a fetch or an update is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.status.is_pending() || self.update_status.is_pending()
    }

    /// Returns the error to show next to the list, fetch errors first.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.status.error().or_else(|| self.update_status.error())
    }
}

impl Default for LeadsState {
    fn default() -> Self {
        Self::new()
    }
}

/// Coarse session phase derived from [`SessionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No usable credentials.
    Anonymous,
    /// Login or hydration in flight.
    Authenticating,
    /// Token and profile present.
    Authenticated,
    /// The last attempt failed and no session is established.
    Failed,
}

/// State of the authenticated-user context.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    /// The bearer token, possibly restored from storage.
    pub token: Option<String>,
    /// The profile of the signed-in user.
    pub user: Option<AuthUser>,
    /// Lifecycle of the last login or hydration.
    pub status: RequestStatus,
}

impl SessionState {
    /// Creates a session, optionally seeded with a persisted token.
    #[must_use]
    pub const fn new(token: Option<String>) -> Self {
        Self {
            token,
            user: None,
            status: RequestStatus::Idle,
        }
    }

    /// A session is authenticated when both a token and a profile are held.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Returns the coarse phase of the session.
    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        if self.status.is_pending() {
            SessionPhase::Authenticating
        } else if self.is_authenticated() {
            SessionPhase::Authenticated
        } else if matches!(self.status, RequestStatus::Failed(_)) {
            SessionPhase::Failed
        } else {
            SessionPhase::Anonymous
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.status.error()
    }
}
