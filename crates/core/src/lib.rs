// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod apply;
mod command;
mod error;
mod query;
mod selectors;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{apply_leads, apply_session};
pub use command::{LeadsCommand, SessionCommand};
pub use error::CoreError;
pub use query::{QueryPairs, lead_query};
pub use selectors::{
    PAGINATION_WINDOW, PageItem, active_filter_count, pagination_window, selected_lead,
    showing_summary,
};
pub use state::{
    ITEMS_PER_PAGE, LeadPage, LeadsState, Pagination, RequestStatus, SessionPhase, SessionState,
};
