// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Construction of the list-leads query from lead state.

use crate::state::LeadsState;
use leaddesk_domain::{AssigneeFilter, FilterSet, format_iso_date};

/// Ordered query pairs; repeated keys are allowed.
pub type QueryPairs = Vec<(&'static str, String)>;

/// Builds the list-leads query for the current search, filters and page.
///
/// Parameters are emitted in a fixed order. Criteria at their default value
/// are omitted, and each required tag becomes its own `tags` entry.
#[must_use]
pub fn lead_query(state: &LeadsState) -> QueryPairs {
    let mut pairs: QueryPairs = vec![
        ("page", state.pagination.current_page.to_string()),
        ("limit", state.pagination.items_per_page.to_string()),
    ];

    if !state.search_query.is_empty() {
        pairs.push(("search", state.search_query.clone()));
    }

    push_filters(&mut pairs, &state.filters);
    pairs
}

fn push_filters(pairs: &mut QueryPairs, filters: &FilterSet) {
    if let Some(neet_status) = filters.neet_status.as_query_value() {
        pairs.push(("neetStatus", neet_status.to_string()));
    }
    if let Some(min) = filters.score_range.effective_min() {
        pairs.push(("minScore", min.to_string()));
    }
    if let Some(max) = filters.score_range.effective_max() {
        pairs.push(("maxScore", max.to_string()));
    }
    if let Some(country) = &filters.country {
        pairs.push(("country", country.clone()));
    }
    if let Some(location) = &filters.location {
        pairs.push(("location", location.clone()));
    }
    match &filters.assigned_to {
        AssigneeFilter::Any => {}
        AssigneeFilter::Unassigned => pairs.push(("unassigned", String::from("true"))),
        AssigneeFilter::Staff(id) => pairs.push(("assignedTo", id.clone())),
    }
    if filters.qualified_only {
        pairs.push(("isQualified", String::from("true")));
    }
    for tag in &filters.tags {
        pairs.push(("tags", tag.clone()));
    }
    if let Some(start) = filters.date_range.start() {
        pairs.push(("startDate", format_iso_date(start)));
    }
    if let Some(end) = filters.date_range.end() {
        pairs.push(("endDate", format_iso_date(end)));
    }
}
