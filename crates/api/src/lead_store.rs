// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The lead collection: current page, filters, pagination and selection.

use leaddesk::{
    CoreError, LeadPage, LeadsCommand, LeadsState, PageItem, Pagination, SessionState,
    active_filter_count, apply_leads, lead_query, pagination_window, selected_lead,
    showing_summary,
};
use leaddesk_domain::{AssigneeFilter, FilterUpdate, Lead};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::services::LeadService;
use crate::transport::{QueryParams, Transport};

/// Owns the displayed page of leads.
///
/// Filter and page mutations are synchronous and never fetch; call
/// [`LeadStore::fetch_leads`] afterwards. Updates are applied only from the
/// backend's response. Each fetch is stamped with a sequence number and only
/// the latest issued fetch may write its result.
pub struct LeadStore<T> {
    service: LeadService<T>,
    session: watch::Receiver<SessionState>,
    state: watch::Sender<LeadsState>,
    request_seq: AtomicU64,
}

impl<T: Transport + 'static> LeadStore<T> {
    /// Creates an empty lead store reading its token from `session`.
    pub fn new(transport: Arc<T>, session: watch::Receiver<SessionState>) -> Self {
        let (state, _) = watch::channel(LeadsState::new());
        Self {
            service: LeadService::new(transport),
            session,
            state,
            request_seq: AtomicU64::new(0),
        }
    }

    /// A copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> LeadsState {
        self.state.borrow().clone()
    }

    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<LeadsState> {
        self.state.subscribe()
    }

    fn try_dispatch(&self, command: LeadsCommand) -> Result<(), CoreError> {
        let mut outcome: Result<(), CoreError> = Ok(());
        self.state.send_if_modified(|state| match apply_leads(state, command) {
            Ok(next) if next == *state => false,
            Ok(next) => {
                *state = next;
                true
            }
            Err(err) => {
                outcome = Err(err);
                false
            }
        });
        outcome
    }

    fn dispatch(&self, command: LeadsCommand) {
        if let Err(err) = self.try_dispatch(command) {
            warn!(error = %err, "Lead command rejected");
        }
    }

    fn token(&self) -> Option<String> {
        self.session.borrow().token.clone()
    }

    fn is_latest(&self, request_id: u64) -> bool {
        self.state.borrow().latest_request_id == request_id
    }

    pub fn set_search_query(&self, query: &str) {
        self.dispatch(LeadsCommand::SetSearchQuery(query.to_string()));
    }

    /// Merges a partial filter update and returns to page 1.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Core` and leaves state untouched if the update
    /// carries an invalid value.
    pub fn set_filters(&self, update: FilterUpdate) -> Result<(), ApiError> {
        self.try_dispatch(LeadsCommand::SetFilters(update))
            .map_err(ApiError::from)
    }

    /// Replaces the required tags and returns to page 1.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Core` if a tag is empty.
    pub fn set_tag_filter(&self, tags: Vec<String>) -> Result<(), ApiError> {
        self.try_dispatch(LeadsCommand::SetTagFilter(tags))
            .map_err(ApiError::from)
    }

    /// Requires one more tag; a tag already required is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Core` if the tag is empty.
    pub fn add_tag_filter(&self, tag: &str) -> Result<(), ApiError> {
        self.try_dispatch(LeadsCommand::AddTagFilter(tag.to_string()))
            .map_err(ApiError::from)
    }

    pub fn remove_tag_filter(&self, tag: &str) {
        self.dispatch(LeadsCommand::RemoveTagFilter(tag.to_string()));
    }

    pub fn set_assigned_to_filter(&self, assigned_to: AssigneeFilter) {
        self.dispatch(LeadsCommand::SetAssignedToFilter(assigned_to));
    }

    pub fn reset_filters(&self) {
        self.dispatch(LeadsCommand::ResetFilters);
    }

    /// Moves to a page, clamped to `[1, max(1, total_pages)]`.
    pub fn set_page(&self, page: u32) {
        self.dispatch(LeadsCommand::SetPage(page));
    }

    /// Selects a lead by id, or clears the selection. The id is not checked.
    pub fn set_selected_lead(&self, id: Option<&str>) {
        self.dispatch(LeadsCommand::SetSelectedLead(id.map(ToString::to_string)));
    }

    pub fn clear_error(&self) {
        self.dispatch(LeadsCommand::ClearError);
    }

    /// Restores the initial state.
    pub fn reset(&self) {
        self.dispatch(LeadsCommand::Reset);
    }

    /// Fetches the page described by the current search, filters and page.
    ///
    /// On success the page replaces `leads` and the totals. On failure the
    /// list is emptied and the message recorded. A response that arrives
    /// after a newer fetch was issued is discarded.
    ///
    /// # Errors
    ///
    /// Returns the fetch failure, even when the response was discarded.
    pub async fn fetch_leads(&self) -> Result<(), ApiError> {
        let request_id: u64 = self.request_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let query: QueryParams = QueryParams::from(lead_query(&self.state.borrow()));
        self.dispatch(LeadsCommand::FetchStarted { request_id });
        debug!(request_id, "Fetching leads");

        let result: Result<LeadPage, ApiError> =
            self.service.list(self.token().as_deref(), query).await;

        if !self.is_latest(request_id) {
            warn!(request_id, "Discarding stale lead response");
            return result.map(drop);
        }

        match result {
            Ok(page) => {
                debug!(
                    request_id,
                    count = page.leads.len(),
                    total_leads = page.total_leads,
                    "Fetched leads"
                );
                self.dispatch(LeadsCommand::FetchSucceeded { request_id, page });
                Ok(())
            }
            Err(err) => {
                warn!(request_id, error = %err, "Failed to fetch leads");
                self.dispatch(LeadsCommand::FetchFailed {
                    request_id,
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Sends a full record and applies the backend's copy.
    ///
    /// The list is never changed before the backend answers; on success the
    /// entry with the same id is replaced in place.
    ///
    /// # Errors
    ///
    /// Returns the update failure; the list is left unchanged.
    pub async fn update_lead(&self, lead: &Lead) -> Result<Lead, ApiError> {
        self.dispatch(LeadsCommand::UpdateStarted);
        match self.service.update(lead, self.token().as_deref()).await {
            Ok(updated) => {
                debug!(lead_id = %updated.id, "Updated lead");
                self.dispatch(LeadsCommand::UpdateSucceeded(Box::new(updated.clone())));
                Ok(updated)
            }
            Err(err) => {
                warn!(lead_id = %lead.id, error = %err, "Failed to update lead");
                self.dispatch(LeadsCommand::UpdateFailed(err.to_string()));
                Err(err)
            }
        }
    }

    /// Fetches one lead without touching the list.
    ///
    /// # Errors
    ///
    /// Returns the fetch failure.
    pub async fn fetch_lead(&self, id: &str) -> Result<Lead, ApiError> {
        self.service.get(id, self.token().as_deref()).await
    }

    #[must_use]
    pub fn leads(&self) -> Vec<Lead> {
        self.state.borrow().leads.clone()
    }

    #[must_use]
    pub fn selected_lead(&self) -> Option<Lead> {
        selected_lead(&self.state.borrow()).cloned()
    }

    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        active_filter_count(&self.state.borrow().filters)
    }

    #[must_use]
    pub fn pagination(&self) -> Pagination {
        self.state.borrow().pagination
    }

    #[must_use]
    pub fn pagination_window(&self) -> Vec<PageItem> {
        let pagination: Pagination = self.pagination();
        pagination_window(pagination.current_page, pagination.total_pages)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state.borrow().error().map(ToString::to_string)
    }

    #[must_use]
    pub fn showing_summary(&self) -> String {
        showing_summary(&self.state.borrow())
    }
}
