// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod cli;
mod render;

#[cfg(test)]
mod tests;

use clap::Parser;
use leaddesk::Pagination;
use leaddesk_api::{ApiConfig, HttpTransport, LeadStore, Store};
use leaddesk_domain::{AuthUser, FilterUpdate, Lead};
use leaddesk_persistence::{SqliteTokenStorage, TokenStorage};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::cli::{Args, Command, LeadsArgs, SessionDb, UpdateArgs};

type ConsoleResult = Result<(), Box<dyn std::error::Error>>;

#[tokio::main]
async fn main() -> ConsoleResult {
    let args: Args = Args::parse();

    // Logs go to stderr so stdout stays the command's output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config: ApiConfig = args.api_config()?;
    info!(
        environment = %config.environment,
        base_url = %config.base_url,
        "Starting LeadDesk console"
    );

    let storage: SqliteTokenStorage = match args.session_db() {
        SessionDb::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            info!("Using session database at: {}", path.display());
            SqliteTokenStorage::new_with_file(&path)?
        }
        SessionDb::InMemory => {
            warn!("Using in-memory session database; the session ends with this command");
            SqliteTokenStorage::new_in_memory()?
        }
    };
    let storage: Arc<dyn TokenStorage> = Arc::new(storage);
    let store: Store<HttpTransport> = Store::connect(&config, storage)?;

    run(&store, args.command).await
}

async fn run(store: &Store<HttpTransport>, command: Command) -> ConsoleResult {
    match command {
        Command::Login { email, password } => {
            let user: AuthUser = store.session().login(&email, &password).await?;
            println!("Signed in as {}", render::user_line(&user));
        }
        Command::Whoami => match store.init().await? {
            Some(user) => println!("{}", render::user_line(&user)),
            None => println!("Not signed in"),
        },
        Command::Logout => {
            if let Some(notify) = store.logout() {
                notify.await?;
            }
            println!("Signed out");
        }
        Command::Leads(args) => list_leads(store, &args).await?,
        Command::Show { id } => {
            store.init().await?;
            let lead: Lead = store.leads().fetch_lead(&id).await?;
            println!("{}", render::lead_profile(&lead));
        }
        Command::Update(args) => update_lead(store, &args).await?,
    }
    Ok(())
}

async fn list_leads(store: &Store<HttpTransport>, args: &LeadsArgs) -> ConsoleResult {
    store.init().await?;
    let leads: &LeadStore<HttpTransport> = store.leads();

    if let Some(search) = &args.search {
        leads.set_search_query(search);
    }
    let update: FilterUpdate = args.filter_update()?;
    if !update.is_empty() {
        leads.set_filters(update)?;
    }
    leads.fetch_leads().await?;

    // Page numbers are only known after the first page arrives.
    if args.page > 1 {
        leads.set_page(args.page);
        let pagination: Pagination = leads.pagination();
        debug!(requested = args.page, current = pagination.current_page, "Paging");
        if pagination.current_page > 1 {
            leads.fetch_leads().await?;
        }
    }
    leads.set_selected_lead(args.select.as_deref());

    for lead in leads.leads() {
        println!("{}", render::lead_line(&lead));
    }
    println!();
    println!(
        "{}",
        render::pagination_line(&leads.pagination_window(), &leads.pagination())
    );
    println!("{}", leads.showing_summary());
    if let Some(badge) = render::filter_badge(leads.active_filter_count()) {
        println!("{badge}");
    }

    match (leads.selected_lead(), &args.select) {
        (Some(lead), _) => {
            println!();
            println!("{}", render::lead_profile(&lead));
        }
        (None, Some(id)) => eprintln!("Lead {id} is not on this page"),
        (None, None) => {}
    }
    Ok(())
}

async fn update_lead(store: &Store<HttpTransport>, args: &UpdateArgs) -> ConsoleResult {
    store.init().await?;
    let mut lead: Lead = store.leads().fetch_lead(&args.id).await?;
    if !args.apply_to(&mut lead)? {
        println!("Nothing to update");
        return Ok(());
    }
    let updated: Lead = store.leads().update_lead(&lead).await?;
    println!("{}", render::lead_profile(&updated));
    Ok(())
}
