// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// The highest attainable NEET score.
pub const NEET_MAX_SCORE: u16 = 720;

/// ISO calendar date format used on the wire (`YYYY-MM-DD`).
const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Validates a single NEET score against the 0–720 domain.
///
/// # Errors
///
/// Returns `DomainError::ScoreOutOfRange` if the score exceeds [`NEET_MAX_SCORE`].
pub fn validate_score(score: u16) -> Result<(), DomainError> {
    if score > NEET_MAX_SCORE {
        return Err(DomainError::ScoreOutOfRange {
            score,
            max: NEET_MAX_SCORE,
        });
    }
    Ok(())
}

/// Validates a NEET score range.
///
/// # Arguments
///
/// * `min` - The lower bound (inclusive)
/// * `max` - The upper bound (inclusive)
///
/// # Errors
///
/// Returns an error if:
/// - Either bound is above [`NEET_MAX_SCORE`]
/// - `min` is greater than `max`
pub fn validate_score_range(min: u16, max: u16) -> Result<(), DomainError> {
    validate_score(min)?;
    validate_score(max)?;
    if min > max {
        return Err(DomainError::InvertedScoreRange { min, max });
    }
    Ok(())
}

/// Parses an ISO `YYYY-MM-DD` date.
///
/// An empty (or whitespace-only) string means "unbounded" and yields `None`.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_iso_date(value: &str) -> Result<Option<Date>, DomainError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Date::parse(trimmed, ISO_DATE)
        .map(Some)
        .map_err(|e| DomainError::DateParseError {
            date_string: value.to_string(),
            error: e.to_string(),
        })
}

/// Formats a date as ISO `YYYY-MM-DD`.
#[must_use]
pub fn format_iso_date(date: Date) -> String {
    // Formatting a plain calendar date with this description cannot fail.
    date.format(ISO_DATE).unwrap_or_else(|_| date.to_string())
}

/// Validates and normalizes a tag label.
///
/// Surrounding whitespace is trimmed.
///
/// # Errors
///
/// Returns `DomainError::InvalidTag` if the tag is empty after trimming.
pub fn normalize_tag(tag: &str) -> Result<String, DomainError> {
    let trimmed: &str = tag.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidTag(String::from(
            "Tag cannot be empty",
        )));
    }
    Ok(trimmed.to_string())
}
