// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AssigneeFilter, DateRange, DomainError, FilterSet, FilterUpdate, NeetStatusFilter, ScoreRange,
};
use time::macros::date;

#[test]
fn test_default_filter_set_is_unrestricted() {
    let filters: FilterSet = FilterSet::default();
    assert!(filters.is_default());
    assert!(filters.score_range.is_full());
    assert!(filters.date_range.is_unbounded());
    assert!(filters.assigned_to.is_any());
    assert_eq!(filters.neet_status.as_query_value(), None);
}

#[test]
fn test_score_range_rejects_out_of_domain_bounds() {
    assert!(matches!(
        ScoreRange::new(0, 721),
        Err(DomainError::ScoreOutOfRange { score: 721, .. })
    ));
    assert!(matches!(
        ScoreRange::new(400, 200),
        Err(DomainError::InvertedScoreRange { .. })
    ));
}

#[test]
fn test_score_range_effective_bounds_skip_domain_edges() {
    let range: ScoreRange = ScoreRange::new(0, 720).unwrap();
    assert_eq!(range.effective_min(), None);
    assert_eq!(range.effective_max(), None);

    let range: ScoreRange = ScoreRange::new(350, 600).unwrap();
    assert_eq!(range.effective_min(), Some(350));
    assert_eq!(range.effective_max(), Some(600));
}

#[test]
fn test_date_range_rejects_inverted_bounds() {
    let result: Result<DateRange, DomainError> = DateRange::parse("2025-03-10", "2025-03-01");
    assert!(matches!(result, Err(DomainError::InvertedDateRange { .. })));
}

#[test]
fn test_date_range_allows_open_ends() {
    let range: DateRange = DateRange::parse("2025-03-01", "").unwrap();
    assert_eq!(range.start(), Some(date!(2025 - 03 - 01)));
    assert_eq!(range.end(), None);
    assert!(!range.is_unbounded());
}

#[test]
fn test_assignee_filter_parses_selector_values() {
    assert_eq!(AssigneeFilter::parse(""), AssigneeFilter::Any);
    assert_eq!(AssigneeFilter::parse("unassigned"), AssigneeFilter::Unassigned);
    assert_eq!(
        AssigneeFilter::parse("67ced4c72fe58c7016c27423"),
        AssigneeFilter::Staff(String::from("67ced4c72fe58c7016c27423"))
    );
}

#[test]
fn test_neet_status_filter_round_trips_query_values() {
    let parsed: NeetStatusFilter = "withScore".parse().unwrap();
    assert_eq!(parsed, NeetStatusFilter::WithScore);
    assert_eq!(parsed.as_query_value(), Some("withScore"));
    assert!("scored".parse::<NeetStatusFilter>().is_err());
}

#[test]
fn test_merged_only_touches_supplied_fields() {
    let base: FilterSet = FilterSet::default()
        .merged(FilterUpdate::new().with_country("Russia"))
        .unwrap();

    let merged: FilterSet = base
        .merged(FilterUpdate::new().with_qualified_only(true))
        .unwrap();

    assert_eq!(merged.country.as_deref(), Some("Russia"));
    assert!(merged.qualified_only);
    assert_eq!(merged.location, None);
}

#[test]
fn test_merged_empty_text_clears_criterion() {
    let base: FilterSet = FilterSet::default()
        .merged(FilterUpdate::new().with_location("Pune"))
        .unwrap();

    let cleared: FilterSet = base.merged(FilterUpdate::new().with_location("  ")).unwrap();

    assert_eq!(cleared.location, None);
    assert!(cleared.is_default());
}

#[test]
fn test_merged_tags_are_deduplicated_in_order() {
    let merged: FilterSet = FilterSet::default()
        .merged(FilterUpdate::new().with_tags(vec![
            String::from("Junk"),
            String::from("Interested"),
            String::from(" Junk "),
        ]))
        .unwrap();

    assert_eq!(merged.tags, vec!["Junk", "Interested"]);
}

#[test]
fn test_merged_rejects_blank_tag_without_partial_apply() {
    let base: FilterSet = FilterSet::default();
    let result: Result<FilterSet, DomainError> = base.merged(
        FilterUpdate::new()
            .with_country("India")
            .with_tags(vec![String::new()]),
    );

    assert!(matches!(result, Err(DomainError::InvalidTag(_))));
    assert!(base.is_default());
}

#[test]
fn test_add_and_remove_tag_report_changes() {
    let mut filters: FilterSet = FilterSet::default();
    assert!(filters.add_tag("Interested").unwrap());
    assert!(!filters.add_tag("Interested").unwrap());
    assert!(filters.remove_tag("Interested"));
    assert!(!filters.remove_tag("Interested"));
}

#[test]
fn test_filter_update_is_empty() {
    assert!(FilterUpdate::new().is_empty());
    assert!(!FilterUpdate::new().with_qualified_only(false).is_empty());
}
