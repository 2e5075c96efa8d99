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

mod error;
mod filters;
mod lead;
mod session;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::DomainError;
pub use filters::{
    AssigneeFilter, DateRange, FilterSet, FilterUpdate, NeetStatusFilter, ScoreRange,
    UNASSIGNED_TOKEN,
};
pub use lead::{
    Assignee, ChatMessage, Lead, LeadStage, LeadStatus, MessageRole, MessageStatus, RESERVED_TAGS,
};
pub use session::AuthUser;
pub use validation::{
    NEET_MAX_SCORE, format_iso_date, normalize_tag, parse_iso_date, validate_score,
    validate_score_range,
};
