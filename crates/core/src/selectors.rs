// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derived view values recomputed from raw state.

use crate::state::LeadsState;
use leaddesk_domain::{FilterSet, Lead};

/// Number of consecutive page numbers shown around the current page.
pub const PAGINATION_WINDOW: u32 = 5;

/// One entry of a rendered pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A selectable page number.
    Page(u32),
    /// A gap between non-adjacent page numbers.
    Ellipsis,
}

impl std::fmt::Display for PageItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Page(page) => write!(f, "{page}"),
            Self::Ellipsis => write!(f, "…"),
        }
    }
}

/// Returns the lead whose id matches the selection, if it is on the current page.
#[must_use]
pub fn selected_lead(state: &LeadsState) -> Option<&Lead> {
    let id: &str = state.selected_lead_id.as_deref()?;
    state.leads.iter().find(|lead| lead.id == id)
}

/// Counts the filter criteria that differ from their defaults.
///
/// The date range counts once when either bound is set; each required tag
/// counts individually.
#[must_use]
pub fn active_filter_count(filters: &FilterSet) -> usize {
    let flags: [bool; 7] = [
        filters.neet_status.as_query_value().is_some(),
        !filters.score_range.is_full(),
        filters.country.is_some(),
        filters.location.is_some(),
        filters.qualified_only,
        !filters.assigned_to.is_any(),
        !filters.date_range.is_unbounded(),
    ];
    flags.iter().filter(|flag| **flag).count() + filters.tags.len()
}

/// Computes the pagination control for a page position.
///
/// # Arguments
///
/// * `current_page` - The 1-based current page; clamped into range
/// * `total_pages` - Total pages; zero is treated as one
#[must_use]
pub fn pagination_window(current_page: u32, total_pages: u32) -> Vec<PageItem> {
    let total: u32 = total_pages.max(1);
    let current: u32 = current_page.clamp(1, total);

    let mut start: u32 = current.saturating_sub(PAGINATION_WINDOW / 2).max(1);
    let end: u32 = total.min(start + PAGINATION_WINDOW - 1);
    if end == total {
        start = end.saturating_sub(PAGINATION_WINDOW - 1).max(1);
    }

    let mut items: Vec<PageItem> = Vec::new();
    if start > 1 {
        items.push(PageItem::Page(1));
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < total {
        if end < total - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(total));
    }
    items
}

/// Renders the "Showing N of M leads" summary line.
#[must_use]
pub fn showing_summary(state: &LeadsState) -> String {
    format!(
        "Showing {} of {} leads",
        state.leads.len(),
        state.pagination.total_leads
    )
}
