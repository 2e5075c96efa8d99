// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command-line arguments and their translation into store inputs.

use clap::{Parser, Subcommand};
use leaddesk_api::{ApiConfig, ConfigError, Environment};
use leaddesk_domain::{
    Assignee, AssigneeFilter, DateRange, DomainError, FilterUpdate, Lead, LeadStage, LeadStatus,
    NEET_MAX_SCORE, NeetStatusFilter, ScoreRange,
};
use std::path::PathBuf;
use std::str::FromStr;

const APP_DIR: &str = "leaddesk";
const STATE_DB_FILE: &str = "session.db";

/// `LeadDesk` console - browse and update leads from the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Deployment to talk to (development, staging, production)
    #[arg(
        long = "env",
        env = "LEADDESK_ENV",
        global = true,
        default_value_t = Environment::Production
    )]
    pub environment: Environment,

    /// Override the API base URL of the selected deployment
    #[arg(long, env = "LEADDESK_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Path to the `SQLite` file holding the session token [default:
    /// `<local data dir>/leaddesk/session.db`]
    #[arg(long, env = "LEADDESK_STATE_DB", global = true)]
    pub state_db: Option<PathBuf>,

    /// Keep the session in memory only; it ends with this command
    #[arg(long, global = true, conflicts_with = "state_db")]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Resolves the backend configuration from the global flags.
    ///
    /// # Errors
    ///
    /// Returns an error if `--api-url` is not a valid http(s) URL.
    pub fn api_config(&self) -> Result<ApiConfig, ConfigError> {
        let config: ApiConfig = ApiConfig::for_environment(self.environment);
        match self.api_url.as_deref() {
            Some(url) => config.with_base_url(url),
            None => Ok(config),
        }
    }

    /// Where the session token is kept.
    ///
    /// An explicit `--state-db` wins, then the per-user default. Memory is
    /// used only with `--ephemeral`, or when no data directory exists.
    #[must_use]
    pub fn session_db(&self) -> SessionDb {
        if self.ephemeral {
            return SessionDb::InMemory;
        }
        self.state_db
            .clone()
            .or_else(default_state_db)
            .map_or(SessionDb::InMemory, SessionDb::File)
    }
}

/// Backing database for the session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionDb {
    File(PathBuf),
    InMemory,
}

/// The per-user session database, under the platform's local data directory.
#[must_use]
pub fn default_state_db() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR).join(STATE_DB_FILE))
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and remember the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Show the signed-in user
    Whoami,
    /// Sign out and forget the session
    Logout,
    /// List one page of leads
    Leads(LeadsArgs),
    /// Show one lead's profile
    Show {
        /// Lead identifier
        id: String,
    },
    /// Change a lead and send the full record back
    Update(UpdateArgs),
}

/// Search, filter and paging flags of `leads`.
#[derive(clap::Args, Debug, PartialEq, Eq)]
pub struct LeadsArgs {
    /// Free-text search
    #[arg(long)]
    pub search: Option<String>,

    /// NEET status bucket (any, withScore, withoutScore)
    #[arg(long)]
    pub neet_status: Option<NeetStatusFilter>,

    /// Lowest NEET score to include
    #[arg(long)]
    pub min_score: Option<u16>,

    /// Highest NEET score to include
    #[arg(long)]
    pub max_score: Option<u16>,

    /// Preferred country
    #[arg(long)]
    pub country: Option<String>,

    /// Location text
    #[arg(long)]
    pub location: Option<String>,

    /// Only qualified leads
    #[arg(long)]
    pub qualified: bool,

    /// Staff id, or "unassigned"
    #[arg(long)]
    pub assigned_to: Option<String>,

    /// Required tag; repeat for several
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Earliest creation date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Latest creation date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Page to display
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Lead to show in full below the list
    #[arg(long)]
    pub select: Option<String>,
}

impl LeadsArgs {
    /// Builds the filter update carrying only the flags that were given.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid score range, date or tag.
    pub fn filter_update(&self) -> Result<FilterUpdate, DomainError> {
        let mut update: FilterUpdate = FilterUpdate::new();
        if let Some(neet_status) = self.neet_status {
            update = update.with_neet_status(neet_status);
        }
        if self.min_score.is_some() || self.max_score.is_some() {
            update = update.with_score_range(ScoreRange::new(
                self.min_score.unwrap_or(0),
                self.max_score.unwrap_or(NEET_MAX_SCORE),
            )?);
        }
        if let Some(country) = &self.country {
            update = update.with_country(country);
        }
        if let Some(location) = &self.location {
            update = update.with_location(location);
        }
        if self.qualified {
            update = update.with_qualified_only(true);
        }
        if let Some(assigned_to) = &self.assigned_to {
            update = update.with_assigned_to(AssigneeFilter::parse(assigned_to));
        }
        if !self.tags.is_empty() {
            update = update.with_tags(self.tags.clone());
        }
        if self.from.is_some() || self.to.is_some() {
            update = update.with_date_range(DateRange::parse(
                self.from.as_deref().unwrap_or_default(),
                self.to.as_deref().unwrap_or_default(),
            )?);
        }
        Ok(update)
    }
}

/// Edits applied by `update` before the record is sent.
#[derive(clap::Args, Debug, PartialEq, Eq)]
pub struct UpdateArgs {
    /// Lead identifier
    pub id: String,

    /// New record status (active, inactive, archived)
    #[arg(long, value_parser = LeadStatus::from_str)]
    pub status: Option<LeadStatus>,

    /// New pipeline stage (e.g. follow_up)
    #[arg(long, value_parser = LeadStage::from_str)]
    pub stage: Option<LeadStage>,

    /// Tag to add; repeat for several
    #[arg(long = "add-tag")]
    pub add_tags: Vec<String>,

    /// Tag to remove; repeat for several
    #[arg(long = "remove-tag")]
    pub remove_tags: Vec<String>,

    /// Replace the notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Assign to this staff id
    #[arg(long, requires = "assign_name")]
    pub assign_id: Option<String>,

    /// Display name of the assignee
    #[arg(long, requires = "assign_id")]
    pub assign_name: Option<String>,

    /// Clear the assignment
    #[arg(long, conflicts_with = "assign_id")]
    pub unassign: bool,
}

impl UpdateArgs {
    /// Applies the requested edits to a lead record.
    ///
    /// Returns `true` if the record changed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTag` for an empty tag.
    pub fn apply_to(&self, lead: &mut Lead) -> Result<bool, DomainError> {
        let before: Lead = lead.clone();
        if let Some(status) = &self.status {
            lead.status = status.clone();
        }
        if let Some(stage) = &self.stage {
            lead.stage = Some(stage.clone());
        }
        for tag in &self.add_tags {
            lead.add_tag(tag)?;
        }
        for tag in &self.remove_tags {
            lead.remove_tag(tag.trim());
        }
        if let Some(notes) = &self.notes {
            lead.notes = Some(notes.clone());
        }
        if let (Some(id), Some(name)) = (&self.assign_id, &self.assign_name) {
            lead.assigned_to = Some(Assignee::new(id, name));
        }
        if self.unassign {
            lead.assigned_to = None;
        }
        Ok(*lead != before)
    }
}
