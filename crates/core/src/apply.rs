// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{LeadsCommand, SessionCommand};
use crate::error::CoreError;
use crate::state::{LeadsState, RequestStatus, SessionState};
use leaddesk_domain::{FilterSet, Lead};

/// Applies a command to the lead state, producing a new state.
///
/// This function is pure: the input state is never mutated. Filter changes
/// move pagination back to page 1. Fetch results whose `request_id` is not
/// the latest issued are ignored and the input state is returned unchanged.
///
/// # Arguments
///
/// * `state` - The current lead state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(LeadsState)` containing the new state
/// * `Err(CoreError)` if the command carries an invalid filter value
///
/// # Errors
///
/// Returns an error if:
/// - A tag is empty after trimming
pub fn apply_leads(state: &LeadsState, command: LeadsCommand) -> Result<LeadsState, CoreError> {
    let mut next: LeadsState = state.clone();

    match command {
        LeadsCommand::SetSearchQuery(query) => {
            next.search_query = query;
            next.pagination.current_page = 1;
        }
        LeadsCommand::SetFilters(update) => {
            next.filters = state.filters.merged(update)?;
            next.pagination.current_page = 1;
        }
        LeadsCommand::SetTagFilter(tags) => {
            next.filters.set_tags(tags)?;
            next.pagination.current_page = 1;
        }
        LeadsCommand::AddTagFilter(tag) => {
            if next.filters.add_tag(&tag)? {
                next.pagination.current_page = 1;
            }
        }
        LeadsCommand::RemoveTagFilter(tag) => {
            next.filters.remove_tag(&tag);
            next.pagination.current_page = 1;
        }
        LeadsCommand::SetAssignedToFilter(assigned_to) => {
            next.filters.assigned_to = assigned_to;
            next.pagination.current_page = 1;
        }
        LeadsCommand::ResetFilters => {
            next.filters = FilterSet::default();
            next.pagination.current_page = 1;
        }
        LeadsCommand::SetPage(page) => {
            next.pagination.current_page = state.pagination.clamp(page);
        }
        LeadsCommand::SetSelectedLead(id) => {
            next.selected_lead_id = id;
        }
        LeadsCommand::ClearError => {
            clear_failure(&mut next.status);
            clear_failure(&mut next.update_status);
        }
        LeadsCommand::FetchStarted { request_id } => {
            if request_id <= state.latest_request_id {
                return Ok(next);
            }
            next.latest_request_id = request_id;
            next.status = RequestStatus::Pending;
            clear_failure(&mut next.update_status);
        }
        LeadsCommand::FetchSucceeded { request_id, page } => {
            if request_id != state.latest_request_id {
                return Ok(next);
            }
            next.leads = page.leads;
            next.pagination.total_pages = page.total_pages;
            next.pagination.total_leads = page.total_leads;
            next.pagination.current_page = next.pagination.clamp(next.pagination.current_page);
            next.status = RequestStatus::Succeeded;
        }
        LeadsCommand::FetchFailed {
            request_id,
            message,
        } => {
            if request_id != state.latest_request_id {
                return Ok(next);
            }
            next.leads = Vec::new();
            next.status = RequestStatus::Failed(message);
        }
        LeadsCommand::UpdateStarted => {
            next.update_status = RequestStatus::Pending;
            clear_failure(&mut next.status);
        }
        LeadsCommand::UpdateSucceeded(updated) => {
            replace_by_id(&mut next.leads, *updated);
            next.update_status = RequestStatus::Succeeded;
        }
        LeadsCommand::UpdateFailed(message) => {
            next.update_status = RequestStatus::Failed(message);
        }
        LeadsCommand::Reset => {
            // Keep the sequence so responses to pre-reset fetches stay stale.
            next = LeadsState {
                latest_request_id: state.latest_request_id,
                ..LeadsState::new()
            };
        }
    }

    Ok(next)
}

/// A new request supersedes any recorded failure, so the list area is never
/// loading and failed at once.
fn clear_failure(status: &mut RequestStatus) {
    if status.error().is_some() {
        *status = RequestStatus::Idle;
    }
}

/// Applies a command to the session state, producing a new state.
///
/// Session transitions cannot fail; the result is always a valid state.
///
/// # Arguments
///
/// * `state` - The current session state (immutable)
/// * `command` - The command to apply
#[must_use]
pub fn apply_session(state: &SessionState, command: SessionCommand) -> SessionState {
    let mut next: SessionState = state.clone();

    match command {
        SessionCommand::LoginStarted | SessionCommand::LoadUserStarted => {
            next.status = RequestStatus::Pending;
        }
        SessionCommand::LoginSucceeded { user, token } => {
            next.token = Some(token);
            next.user = Some(user);
            next.status = RequestStatus::Succeeded;
        }
        SessionCommand::LoginFailed(message) => {
            next.status = RequestStatus::Failed(message);
        }
        SessionCommand::LoadUserSucceeded(user) => {
            next.user = Some(user);
            next.status = RequestStatus::Succeeded;
        }
        SessionCommand::LoadUserFailed {
            message,
            token_rejected,
        } => {
            if token_rejected {
                next.token = None;
                next.user = None;
            }
            next.status = RequestStatus::Failed(message);
        }
        SessionCommand::LoggedOut => {
            next = SessionState::default();
        }
        SessionCommand::ClearError => {
            if next.status.error().is_some() {
                next.status = RequestStatus::Idle;
            }
        }
    }

    next
}

/// Replaces the lead with the same id, keeping list order. Absent ids are ignored.
fn replace_by_id(leads: &mut [Lead], updated: Lead) {
    if let Some(slot) = leads.iter_mut().find(|lead| lead.id == updated.id) {
        *slot = updated;
    }
}
