// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The lead record and its workflow enumerations.
//!
//! Leads are value copies of backend records. The client never computes
//! timestamps or identity; it only reads them, formats them and sends the
//! entire record back on update.

use crate::error::DomainError;
use crate::validation::normalize_tag;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;
use time::OffsetDateTime;

/// Labels offered by the console for tagging and tag filtering.
pub const RESERVED_TAGS: &[&str] = &[
    "Interested",
    "Most Interested",
    "Least Interested",
    "Not Interested",
    "Not Picking Call",
    "Number Busy",
    "Invalid Phone Number",
    "Invalid Whatsapp Number",
    "Will Tell Later",
    "Junk",
    "Qualified",
];

/// Record status. Archival is a status transition, never a deletion.
///
/// Values the client does not recognize are kept as [`Self::Other`] and
/// written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum LeadStatus {
    /// The lead is being worked.
    #[default]
    Active,
    /// The lead is dormant.
    Inactive,
    /// The lead is archived.
    Archived,
    /// A status this client does not know.
    Other(String),
}

impl LeadStatus {
    /// Returns the wire representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Archived => "archived",
            Self::Other(value) => value,
        }
    }
}

impl FromStr for LeadStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "archived" => Ok(Self::Archived),
            _ => Err(DomainError::InvalidLeadStatus(s.to_string())),
        }
    }
}

impl From<String> for LeadStatus {
    fn from(value: String) -> Self {
        value.parse().unwrap_or(Self::Other(value))
    }
}

impl From<LeadStatus> for String {
    fn from(status: LeadStatus) -> Self {
        match status {
            LeadStatus::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pipeline step for a lead.
///
/// Unrecognized stages, including the empty string, are kept as
/// [`Self::Other`]; they read as a new lead and are written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LeadStage {
    /// Freshly ingested.
    New,
    /// Contact attempts have gone unanswered.
    NotResponding,
    /// A call has been started.
    CallStarted,
    /// Awaiting a follow-up.
    FollowUp,
    /// Documents have been requested from the lead.
    DocumentsRequested,
    /// Documents have been received.
    DocumentsReceived,
    /// An application has been submitted.
    ApplicationSubmitted,
    /// Converted.
    ClosedWon,
    /// Lost.
    ClosedLost,
    /// A stage this client does not know.
    Other(String),
}

impl LeadStage {
    /// All known stages in pipeline order.
    pub const ALL: [Self; 9] = [
        Self::New,
        Self::NotResponding,
        Self::CallStarted,
        Self::FollowUp,
        Self::DocumentsRequested,
        Self::DocumentsReceived,
        Self::ApplicationSubmitted,
        Self::ClosedWon,
        Self::ClosedLost,
    ];

    /// Returns the wire representation of the stage.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::New => "new",
            Self::NotResponding => "not_responding",
            Self::CallStarted => "call_started",
            Self::FollowUp => "follow_up",
            Self::DocumentsRequested => "documents_requested",
            Self::DocumentsReceived => "documents_received",
            Self::ApplicationSubmitted => "application_submitted",
            Self::ClosedWon => "closed_won",
            Self::ClosedLost => "closed_lost",
            Self::Other(value) => value,
        }
    }

    /// Returns the human-readable label for the stage.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::New | Self::Other(_) => "New Lead",
            Self::NotResponding => "Not Responding",
            Self::CallStarted => "Call Started",
            Self::FollowUp => "Follow Up",
            Self::DocumentsRequested => "Documents Requested",
            Self::DocumentsReceived => "Documents Received",
            Self::ApplicationSubmitted => "Application Submitted",
            Self::ClosedWon => "Closed Won",
            Self::ClosedLost => "Closed Lost",
        }
    }
}

impl FromStr for LeadStage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|stage| stage.as_str() == s)
            .cloned()
            .ok_or_else(|| DomainError::InvalidLeadStage(s.to_string()))
    }
}

impl From<String> for LeadStage {
    fn from(value: String) -> Self {
        value.parse().unwrap_or(Self::Other(value))
    }
}

impl From<LeadStage> for String {
    fn from(stage: LeadStage) -> Self {
        match stage {
            LeadStage::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for LeadStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Weak reference to the staff member a lead is assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignee {
    /// The staff member's identifier.
    pub id: String,
    /// The staff member's display name.
    pub name: String,
}

impl Assignee {
    /// Creates a new assignee reference.
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Sent by the lead.
    Lead,
    /// Sent by the console operator or assistant.
    Assistant,
}

/// Delivery state of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Sent,
    Delivered,
    Read,
    Failed,
}

/// A single message in a lead's chat history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// The message identifier.
    pub message_id: String,
    /// The message text.
    pub content: String,
    /// Who sent the message.
    pub role: MessageRole,
    /// When the message was sent.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Delivery state, if tracked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MessageStatus>,
}

/// A prospective student record.
///
/// Fields the client does not model are kept in `extra` and written back
/// unchanged, so a full-record update never drops backend data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// Stable identifier assigned by the backend.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub lead_phone_number: String,
    #[serde(default)]
    pub business_phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_phone_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// NEET score in the 0–720 domain, if the lead has one.
    #[serde(default)]
    pub neet_score: Option<u16>,
    #[serde(default)]
    pub number_of_enquiry: u32,
    #[serde(default)]
    pub number_of_chats_messages: u32,
    #[serde(default)]
    pub message_count: u32,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_interaction: Option<OffsetDateTime>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_interaction: Option<OffsetDateTime>,
    #[serde(default)]
    pub status: LeadStatus,
    /// Labels in insertion order, without duplicates.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_history: Option<Vec<ChatMessage>>,
    /// The staff member working this lead, if any.
    #[serde(default)]
    pub assigned_to: Option<Assignee>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<OffsetDateTime>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualified_lead: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_interest: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<LeadStage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neet_status: Option<String>,
    /// Backend fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Lead {
    /// Creates a minimal lead record.
    ///
    /// # Arguments
    ///
    /// * `id` - The backend identifier
    /// * `lead_phone_number` - The lead's phone number
    /// * `business_phone_number` - The business number the lead contacted
    #[must_use]
    pub fn new(id: &str, lead_phone_number: &str, business_phone_number: &str) -> Self {
        Self {
            id: id.to_string(),
            name: None,
            lead_phone_number: lead_phone_number.to_string(),
            business_phone_number: business_phone_number.to_string(),
            business_phone_id: None,
            email: None,
            preferred_country: None,
            city: None,
            state: None,
            neet_score: None,
            number_of_enquiry: 0,
            number_of_chats_messages: 0,
            message_count: 0,
            first_interaction: None,
            last_interaction: None,
            status: LeadStatus::Active,
            tags: Vec::new(),
            source: None,
            notes: None,
            chat_history: None,
            assigned_to: None,
            created_at: None,
            updated_at: None,
            qualified_lead: None,
            location: None,
            country_interest: None,
            stage: None,
            neet_status: None,
            extra: Map::new(),
        }
    }

    /// Returns the lead's name, falling back to the phone number.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.lead_phone_number)
    }

    /// Returns the display location.
    ///
    /// Uses the backend's `location` when present, otherwise joins the
    /// non-empty parts of city and state.
    #[must_use]
    pub fn display_location(&self) -> Option<String> {
        if let Some(location) = self.location.as_deref().filter(|l| !l.trim().is_empty()) {
            return Some(location.to_string());
        }
        let parts: Vec<&str> = [self.city.as_deref(), self.state.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }

    /// Returns whether the backend flagged this lead as qualified.
    #[must_use]
    pub fn is_qualified(&self) -> bool {
        self.qualified_lead.unwrap_or(false)
    }

    /// Returns the NEET status label, deriving one from the score if absent.
    #[must_use]
    pub fn neet_status_label(&self) -> String {
        match (&self.neet_status, self.neet_score) {
            (Some(status), _) if !status.trim().is_empty() => status.clone(),
            (_, Some(_)) => String::from("With Score"),
            (_, None) => String::from("Without Score"),
        }
    }

    /// Returns the stage label; leads without a stage read as new.
    #[must_use]
    pub fn stage_label(&self) -> &'static str {
        self.stage.as_ref().map_or(LeadStage::New.label(), LeadStage::label)
    }

    /// Returns whether the lead carries the given tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Appends a tag if it is not already present.
    ///
    /// Returns `true` if the tag was added.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTag` if the tag is empty.
    pub fn add_tag(&mut self, tag: &str) -> Result<bool, DomainError> {
        let tag: String = normalize_tag(tag)?;
        if self.has_tag(&tag) {
            return Ok(false);
        }
        self.tags.push(tag);
        Ok(true)
    }

    /// Removes a tag, preserving the order of the rest.
    ///
    /// Returns `true` if the tag was present.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before: usize = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }
}
