// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{LeadPage, LeadsCommand, LeadsState, apply_leads};
use leaddesk_domain::{AuthUser, Lead};

pub fn create_test_lead(id: &str) -> Lead {
    let mut lead: Lead = Lead::new(id, "+919800000000", "+15550000000");
    lead.name = Some(format!("Lead {id}"));
    lead
}

pub fn create_test_user() -> AuthUser {
    AuthUser::new("user-1", "asha", "asha@example.com")
}

pub fn create_test_page(ids: &[&str], total_pages: u32, total_leads: u64) -> LeadPage {
    LeadPage {
        leads: ids.iter().map(|id| create_test_lead(id)).collect(),
        total_pages,
        total_leads,
    }
}

/// Runs a complete fetch cycle, returning the resulting state.
pub fn fetched_state(state: &LeadsState, page: LeadPage) -> LeadsState {
    let request_id: u64 = state.latest_request_id + 1;
    let started: LeadsState =
        apply_leads(state, LeadsCommand::FetchStarted { request_id }).unwrap();
    apply_leads(&started, LeadsCommand::FetchSucceeded { request_id, page }).unwrap()
}

/// A state showing page `current_page` of a 10-page result.
pub fn create_paged_state(current_page: u32) -> LeadsState {
    let state: LeadsState = fetched_state(
        &LeadsState::new(),
        create_test_page(&["a", "b"], 10, 200),
    );
    apply_leads(&state, LeadsCommand::SetPage(current_page)).unwrap()
}
