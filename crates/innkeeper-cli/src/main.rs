//! Innkeeper CLI Application
//!
//! Command-line front end for the listing-creation wizard engine.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands, DraftCommands, ListingCommands};
use clap::Parser;
use cli::Cli;
use innkeeper_core::{DraftStore, SqliteStore};
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, no_color, command } = Args::parse();

    let store = match database_file {
        Some(path) => SqliteStore::new(path),
        None => SqliteStore::at_default_path(),
    }
    .context("Failed to open draft database")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(DraftStore::new(store), renderer);

    info!("Innkeeper started");

    match command {
        Commands::Draft { command } => match command {
            DraftCommands::Seed(args) => cli.seed_draft(args),
            DraftCommands::Show => cli.show_draft(),
            DraftCommands::Validate => cli.validate_draft(),
            DraftCommands::Clear => cli.clear_draft(),
        },
        Commands::Listing { command } => match command {
            ListingCommands::Fetch(args) => cli.fetch_listing(args).await,
            ListingCommands::Submit(args) => cli.submit_draft(args).await,
        },
    }
}
