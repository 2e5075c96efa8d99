// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::LeadPage;
use leaddesk_domain::{AssigneeFilter, AuthUser, FilterUpdate, Lead};

/// A command against the lead collection, expressed as data only.
///
/// Commands are the only way to request lead state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum LeadsCommand {
    /// Replace the free-text search term.
    SetSearchQuery(String),
    /// Merge a partial filter update.
    SetFilters(FilterUpdate),
    /// Replace the required tags.
    SetTagFilter(Vec<String>),
    /// Require one more tag.
    AddTagFilter(String),
    /// Stop requiring a tag.
    RemoveTagFilter(String),
    /// Replace the assignment criterion.
    SetAssignedToFilter(AssigneeFilter),
    /// Restore every filter to its default.
    ResetFilters,
    /// Move to a page; out-of-range values are clamped.
    SetPage(u32),
    /// Select a lead by id, or clear the selection.
    SetSelectedLead(Option<String>),
    /// Dismiss any recorded error.
    ClearError,
    /// A list fetch was issued.
    FetchStarted {
        /// Sequence number of the fetch.
        request_id: u64,
    },
    /// A list fetch returned a page.
    FetchSucceeded {
        /// Sequence number of the fetch.
        request_id: u64,
        /// The returned page.
        page: LeadPage,
    },
    /// A list fetch failed.
    FetchFailed {
        /// Sequence number of the fetch.
        request_id: u64,
        /// Human-readable failure message.
        message: String,
    },
    /// An update was issued.
    UpdateStarted,
    /// An update returned the authoritative record.
    UpdateSucceeded(Box<Lead>),
    /// An update failed.
    UpdateFailed(String),
    /// Restore the initial state.
    Reset,
}

/// A command against the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    LoginStarted,
    LoginSucceeded {
        /// The signed-in user.
        user: AuthUser,
        /// The issued bearer token.
        token: String,
    },
    LoginFailed(String),
    LoadUserStarted,
    LoadUserSucceeded(AuthUser),
    LoadUserFailed {
        /// Human-readable failure message.
        message: String,
        /// Whether the backend rejected the token itself.
        token_rejected: bool,
    },
    LoggedOut,
    ClearError,
}
