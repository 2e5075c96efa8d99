// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A NEET score bound lies outside the 0–720 domain.
    ScoreOutOfRange {
        /// The offending score.
        score: u16,
        /// The maximum permitted score.
        max: u16,
    },
    /// The lower score bound exceeds the upper bound.
    InvertedScoreRange {
        /// The lower bound.
        min: u16,
        /// The upper bound.
        max: u16,
    },
    /// Failed to parse an ISO date string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// The date range starts after it ends.
    InvertedDateRange {
        /// The start of the range.
        start: time::Date,
        /// The end of the range.
        end: time::Date,
    },
    /// A tag is empty or whitespace only.
    InvalidTag(String),
    /// A lead status string is not recognized.
    InvalidLeadStatus(String),
    /// A lead stage string is not recognized.
    InvalidLeadStage(String),
    /// A NEET status bucket string is not recognized.
    InvalidNeetStatus(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ScoreOutOfRange { score, max } => {
                write!(f, "Score {score} is out of range: must be between 0 and {max}")
            }
            Self::InvertedScoreRange { min, max } => {
                write!(
                    f,
                    "Invalid score range: minimum {min} is greater than maximum {max}"
                )
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvertedDateRange { start, end } => {
                write!(f, "Invalid date range: {start} is after {end}")
            }
            Self::InvalidTag(msg) => write!(f, "Invalid tag: {msg}"),
            Self::InvalidLeadStatus(value) => write!(f, "Invalid lead status: '{value}'"),
            Self::InvalidLeadStage(value) => write!(f, "Invalid lead stage: '{value}'"),
            Self::InvalidNeetStatus(value) => write!(f, "Invalid NEET status: '{value}'"),
        }
    }
}

impl std::error::Error for DomainError {}
