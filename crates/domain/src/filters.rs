// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The filter set narrowing the lead list, and its typed partial update.

use crate::error::DomainError;
use crate::validation::{NEET_MAX_SCORE, normalize_tag, parse_iso_date, validate_score_range};
use std::str::FromStr;
use time::Date;

/// Literal accepted in place of a staff id to select unassigned leads.
pub const UNASSIGNED_TOKEN: &str = "unassigned";

/// NEET-status bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NeetStatusFilter {
    /// No restriction.
    #[default]
    Any,
    /// Only leads with a recorded score.
    WithScore,
    /// Only leads without a recorded score.
    WithoutScore,
}

impl NeetStatusFilter {
    /// Returns the query value for this bucket, or `None` for [`Self::Any`].
    #[must_use]
    pub const fn as_query_value(&self) -> Option<&'static str> {
        match self {
            Self::Any => None,
            Self::WithScore => Some("withScore"),
            Self::WithoutScore => Some("withoutScore"),
        }
    }
}

impl FromStr for NeetStatusFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "any" => Ok(Self::Any),
            "withScore" => Ok(Self::WithScore),
            "withoutScore" => Ok(Self::WithoutScore),
            _ => Err(DomainError::InvalidNeetStatus(s.to_string())),
        }
    }
}

/// Inclusive NEET score range within `0..=720`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreRange {
    min: u16,
    max: u16,
}

impl ScoreRange {
    /// Creates a validated score range.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound exceeds 720 or `min > max`.
    pub fn new(min: u16, max: u16) -> Result<Self, DomainError> {
        validate_score_range(min, max)?;
        Ok(Self { min, max })
    }

    /// The unrestricted range `[0, 720]`.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            min: 0,
            max: NEET_MAX_SCORE,
        }
    }

    #[must_use]
    pub const fn min(&self) -> u16 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> u16 {
        self.max
    }

    /// Returns the lower bound if it restricts anything.
    #[must_use]
    pub const fn effective_min(&self) -> Option<u16> {
        if self.min > 0 { Some(self.min) } else { None }
    }

    /// Returns the upper bound if it restricts anything.
    #[must_use]
    pub const fn effective_max(&self) -> Option<u16> {
        if self.max < NEET_MAX_SCORE {
            Some(self.max)
        } else {
            None
        }
    }

    /// Returns whether the range is the unrestricted default.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.min == 0 && self.max == NEET_MAX_SCORE
    }
}

impl Default for ScoreRange {
    fn default() -> Self {
        Self::full()
    }
}

/// Inclusive creation-date range; a missing bound is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateRange {
    start: Option<Date>,
    end: Option<Date>,
}

impl DateRange {
    /// Creates a validated date range.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvertedDateRange` if both bounds are set and
    /// `start` is after `end`.
    pub fn new(start: Option<Date>, end: Option<Date>) -> Result<Self, DomainError> {
        match (start, end) {
            (Some(start), Some(end)) if start > end => {
                Err(DomainError::InvertedDateRange { start, end })
            }
            _ => Ok(Self { start, end }),
        }
    }

    /// Parses a range from ISO date strings; empty strings are unbounded.
    ///
    /// # Errors
    ///
    /// Returns an error if either string is not a valid date or the range
    /// is inverted.
    pub fn parse(start: &str, end: &str) -> Result<Self, DomainError> {
        Self::new(parse_iso_date(start)?, parse_iso_date(end)?)
    }

    #[must_use]
    pub const fn start(&self) -> Option<Date> {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> Option<Date> {
        self.end
    }

    /// Returns whether neither bound is set.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// Assignment criterion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AssigneeFilter {
    /// Any assignment, including none.
    #[default]
    Any,
    /// Only leads assigned to nobody.
    Unassigned,
    /// Only leads assigned to the given staff id.
    Staff(String),
}

impl AssigneeFilter {
    /// Interprets a raw selector value: empty is any, the literal
    /// `"unassigned"` is unassigned, anything else a staff id.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" => Self::Any,
            UNASSIGNED_TOKEN => Self::Unassigned,
            id => Self::Staff(id.to_string()),
        }
    }

    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

/// The combination of all active list-narrowing criteria.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSet {
    /// NEET-status bucket.
    pub neet_status: NeetStatusFilter,
    /// NEET score range.
    pub score_range: ScoreRange,
    /// Preferred country, `None` for any.
    pub country: Option<String>,
    /// Free-text location, `None` for any.
    pub location: Option<String>,
    /// Restrict to qualified leads.
    pub qualified_only: bool,
    /// Assignment criterion.
    pub assigned_to: AssigneeFilter,
    /// Tags every returned lead must carry, in selection order.
    pub tags: Vec<String>,
    /// Creation-date range.
    pub date_range: DateRange,
}

impl FilterSet {
    /// Returns whether every criterion is at its default.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Merges a partial update field by field, returning the new filter set.
    ///
    /// Fields absent from the update keep their current value. Text fields
    /// set to an empty string clear the criterion.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTag` if the update carries an empty tag.
    pub fn merged(&self, update: FilterUpdate) -> Result<Self, DomainError> {
        let mut merged: Self = self.clone();
        if let Some(neet_status) = update.neet_status {
            merged.neet_status = neet_status;
        }
        if let Some(score_range) = update.score_range {
            merged.score_range = score_range;
        }
        if let Some(country) = update.country {
            merged.country = non_empty(&country);
        }
        if let Some(location) = update.location {
            merged.location = non_empty(&location);
        }
        if let Some(qualified_only) = update.qualified_only {
            merged.qualified_only = qualified_only;
        }
        if let Some(assigned_to) = update.assigned_to {
            merged.assigned_to = assigned_to;
        }
        if let Some(tags) = update.tags {
            merged.set_tags(tags)?;
        }
        if let Some(date_range) = update.date_range {
            merged.date_range = date_range;
        }
        Ok(merged)
    }

    /// Replaces the required tags, trimming and dropping duplicates.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTag` if any tag is empty.
    pub fn set_tags(&mut self, tags: Vec<String>) -> Result<(), DomainError> {
        let mut normalized: Vec<String> = Vec::with_capacity(tags.len());
        for tag in tags {
            let tag: String = normalize_tag(&tag)?;
            if !normalized.contains(&tag) {
                normalized.push(tag);
            }
        }
        self.tags = normalized;
        Ok(())
    }

    /// Adds a required tag. Returns `true` if it was not already present.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTag` if the tag is empty.
    pub fn add_tag(&mut self, tag: &str) -> Result<bool, DomainError> {
        let tag: String = normalize_tag(tag)?;
        if self.tags.contains(&tag) {
            return Ok(false);
        }
        self.tags.push(tag);
        Ok(true)
    }

    /// Removes a required tag. Returns `true` if it was present.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before: usize = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }
}

/// A typed partial update to a [`FilterSet`].
///
/// `None` leaves a field untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterUpdate {
    pub neet_status: Option<NeetStatusFilter>,
    pub score_range: Option<ScoreRange>,
    pub country: Option<String>,
    pub location: Option<String>,
    pub qualified_only: Option<bool>,
    pub assigned_to: Option<AssigneeFilter>,
    pub tags: Option<Vec<String>>,
    pub date_range: Option<DateRange>,
}

impl FilterUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_neet_status(mut self, neet_status: NeetStatusFilter) -> Self {
        self.neet_status = Some(neet_status);
        self
    }

    #[must_use]
    pub fn with_score_range(mut self, score_range: ScoreRange) -> Self {
        self.score_range = Some(score_range);
        self
    }

    #[must_use]
    pub fn with_country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    #[must_use]
    pub fn with_qualified_only(mut self, qualified_only: bool) -> Self {
        self.qualified_only = Some(qualified_only);
        self
    }

    #[must_use]
    pub fn with_assigned_to(mut self, assigned_to: AssigneeFilter) -> Self {
        self.assigned_to = Some(assigned_to);
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    #[must_use]
    pub fn with_date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = Some(date_range);
        self
    }

    /// Returns whether the update touches no field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
