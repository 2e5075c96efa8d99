// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_paged_state;
use crate::{LeadsCommand, LeadsState, QueryPairs, apply_leads, lead_query};
use leaddesk_domain::{
    AssigneeFilter, DateRange, FilterUpdate, NeetStatusFilter, ScoreRange,
};

fn pair(key: &'static str, value: &str) -> (&'static str, String) {
    (key, value.to_string())
}

#[test]
fn test_default_query_has_only_paging() {
    let query: QueryPairs = lead_query(&LeadsState::new());

    assert_eq!(query, vec![pair("page", "1"), pair("limit", "20")]);
}

#[test]
fn test_full_query_order() {
    let state: LeadsState = create_paged_state(1);
    let state: LeadsState =
        apply_leads(&state, LeadsCommand::SetSearchQuery(String::from("asha"))).unwrap();
    let state: LeadsState = apply_leads(
        &state,
        LeadsCommand::SetFilters(
            FilterUpdate::new()
                .with_neet_status(NeetStatusFilter::WithScore)
                .with_score_range(ScoreRange::new(300, 650).unwrap())
                .with_country("Georgia")
                .with_location("Pune")
                .with_assigned_to(AssigneeFilter::Staff(String::from("staff-9")))
                .with_qualified_only(true)
                .with_tags(vec![String::from("Interested"), String::from("Qualified")])
                .with_date_range(DateRange::parse("2025-01-01", "2025-03-31").unwrap()),
        ),
    )
    .unwrap();
    let state: LeadsState = apply_leads(&state, LeadsCommand::SetPage(2)).unwrap();

    let query: QueryPairs = lead_query(&state);

    assert_eq!(
        query,
        vec![
            pair("page", "2"),
            pair("limit", "20"),
            pair("search", "asha"),
            pair("neetStatus", "withScore"),
            pair("minScore", "300"),
            pair("maxScore", "650"),
            pair("country", "Georgia"),
            pair("location", "Pune"),
            pair("assignedTo", "staff-9"),
            pair("isQualified", "true"),
            pair("tags", "Interested"),
            pair("tags", "Qualified"),
            pair("startDate", "2025-01-01"),
            pair("endDate", "2025-03-31"),
        ]
    );
}

#[test]
fn test_unassigned_uses_flag() {
    let state: LeadsState = apply_leads(
        &LeadsState::new(),
        LeadsCommand::SetAssignedToFilter(AssigneeFilter::parse("unassigned")),
    )
    .unwrap();

    let query: QueryPairs = lead_query(&state);

    assert!(query.contains(&pair("unassigned", "true")));
    assert!(!query.iter().any(|(key, _)| *key == "assignedTo"));
}

#[test]
fn test_score_bounds_at_domain_edges_are_omitted() {
    let state: LeadsState = apply_leads(
        &LeadsState::new(),
        LeadsCommand::SetFilters(
            FilterUpdate::new().with_score_range(ScoreRange::new(0, 500).unwrap()),
        ),
    )
    .unwrap();

    let query: QueryPairs = lead_query(&state);

    assert!(!query.iter().any(|(key, _)| *key == "minScore"));
    assert!(query.contains(&pair("maxScore", "500")));
}

#[test]
fn test_empty_search_is_omitted() {
    let state: LeadsState =
        apply_leads(&LeadsState::new(), LeadsCommand::SetSearchQuery(String::new())).unwrap();

    let query: QueryPairs = lead_query(&state);

    assert_eq!(query.len(), 2);
}

#[test]
fn test_search_is_sent_as_typed() {
    let state: LeadsState = apply_leads(
        &LeadsState::new(),
        LeadsCommand::SetSearchQuery(String::from(" asha k ")),
    )
    .unwrap();

    let query: QueryPairs = lead_query(&state);

    assert!(query.contains(&pair("search", " asha k ")));
}

#[test]
fn test_open_ended_date_range() {
    let state: LeadsState = apply_leads(
        &LeadsState::new(),
        LeadsCommand::SetFilters(
            FilterUpdate::new().with_date_range(DateRange::parse("", "2025-06-30").unwrap()),
        ),
    )
    .unwrap();

    let query: QueryPairs = lead_query(&state);

    assert!(!query.iter().any(|(key, _)| *key == "startDate"));
    assert!(query.contains(&pair("endDate", "2025-06-30")));
}
