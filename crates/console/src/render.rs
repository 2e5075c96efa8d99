// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of store state.

use leaddesk::{PageItem, Pagination};
use leaddesk_domain::{AuthUser, Lead, format_iso_date};
use time::Date;

const EMPTY: &str = "-";

#[must_use]
pub fn user_line(user: &AuthUser) -> String {
    format!("{} <{}> ({})", user.username, user.email, user.id)
}

/// One row of the lead table.
#[must_use]
pub fn lead_line(lead: &Lead) -> String {
    let assignee: &str = lead
        .assigned_to
        .as_ref()
        .map_or("unassigned", |assignee| assignee.name.as_str());
    let tags: String = if lead.tags.is_empty() {
        String::from(EMPTY)
    } else {
        lead.tags.join(", ")
    };
    format!(
        "{:<24} {:<20} {:<14} {:<22} {:<14} {:<16} {}",
        lead.id,
        lead.display_name(),
        lead.lead_phone_number,
        lead.stage_label(),
        lead.neet_status_label(),
        assignee,
        tags
    )
}

/// The pagination control, with the current page bracketed.
///
/// `1 … 5 6 [7] 8 9 … 20`
#[must_use]
pub fn pagination_line(items: &[PageItem], pagination: &Pagination) -> String {
    let mut line: String = String::new();
    if pagination.has_previous() {
        line.push_str("‹ ");
    }
    let pages: Vec<String> = items
        .iter()
        .map(|item| match item {
            PageItem::Page(page) if *page == pagination.current_page => format!("[{page}]"),
            other => other.to_string(),
        })
        .collect();
    line.push_str(&pages.join(" "));
    if pagination.has_next() {
        line.push_str(" ›");
    }
    line
}

/// Badge shown next to the filter controls; empty when nothing narrows the list.
#[must_use]
pub fn filter_badge(active: usize) -> Option<String> {
    match active {
        0 => None,
        1 => Some(String::from("1 filter active")),
        n => Some(format!("{n} filters active")),
    }
}

/// The full profile of one lead.
#[must_use]
pub fn lead_profile(lead: &Lead) -> String {
    let score: String = lead
        .neet_score
        .map_or_else(|| String::from(EMPTY), |score| score.to_string());
    let country: &str = or_empty(
        lead.preferred_country
            .as_deref()
            .or(lead.country_interest.as_deref()),
    );
    let location: String = lead
        .display_location()
        .unwrap_or_else(|| String::from(EMPTY));
    let tags: String = lead.tags.join(", ");
    let assignee: String = lead.assigned_to.as_ref().map_or_else(
        || String::from("unassigned"),
        |assignee| format!("{} ({})", assignee.name, assignee.id),
    );
    let created: String = lead.created_at.map_or_else(
        || String::from(EMPTY),
        |created| {
            let date: Date = created.date();
            format_iso_date(date)
        },
    );

    let lines: Vec<String> = vec![
        format!("{} ({})", lead.display_name(), lead.id),
        format!("  Phone:       {}", lead.lead_phone_number),
        format!("  Email:       {}", or_empty(lead.email.as_deref())),
        format!("  Location:    {location}"),
        format!("  Country:     {country}"),
        format!("  NEET:        {} ({score})", lead.neet_status_label()),
        format!("  Stage:       {}", lead.stage_label()),
        format!("  Status:      {}", lead.status),
        format!(
            "  Qualified:   {}",
            if lead.is_qualified() { "yes" } else { "no" }
        ),
        format!("  Tags:        {}", or_empty(Some(&tags))),
        format!("  Assigned to: {assignee}"),
        format!(
            "  Enquiries:   {}  Messages: {}",
            lead.number_of_enquiry, lead.message_count
        ),
        format!("  Created:     {created}"),
        format!("  Notes:       {}", or_empty(lead.notes.as_deref())),
    ];
    lines.join("\n")
}

fn or_empty(value: Option<&str>) -> &str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(EMPTY)
}
