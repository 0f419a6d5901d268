use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Main command-line interface for the Innkeeper listing wizard
///
/// Innkeeper walks a property owner through creating or updating a hotel
/// listing: draft the form locally, validate it step by step, then submit
/// the whole aggregate (listing, room types, images) to the marketplace
/// backend in one pass.
#[derive(Parser)]
#[command(version, about, name = "inn")]
pub struct Args {
    /// Path to the SQLite draft database. Defaults to
    /// $XDG_DATA_HOME/innkeeper/innkeeper.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Innkeeper CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage the local listing draft
    #[command(alias = "d")]
    Draft {
        #[command(subcommand)]
        command: DraftCommands,
    },
    /// Talk to the marketplace backend
    #[command(alias = "l")]
    Listing {
        #[command(subcommand)]
        command: ListingCommands,
    },
}

#[derive(Subcommand)]
pub enum DraftCommands {
    /// Load a listing JSON file into the draft slot
    Seed(SeedDraftArgs),
    /// Print the current draft
    #[command(alias = "s")]
    Show,
    /// Run every step validator against the current draft
    #[command(alias = "v")]
    Validate,
    /// Discard the current draft
    Clear,
}

#[derive(Subcommand)]
pub enum ListingCommands {
    /// Fetch a listing from the backend and print it
    #[command(alias = "f")]
    Fetch(FetchListingArgs),
    /// Validate the current draft and submit it to the backend
    Submit(SubmitArgs),
}

/// Seed the draft slot from a file
#[derive(ClapArgs)]
pub struct SeedDraftArgs {
    /// Path to a listing JSON file
    #[arg(short, long)]
    pub file: PathBuf,
}

/// Fetch one listing by backend id
#[derive(ClapArgs)]
pub struct FetchListingArgs {
    /// Backend listing id
    pub id: String,

    /// Backend base URL. Falls back to $INNKEEPER_API_URL
    #[arg(long)]
    pub base_url: Option<String>,
}

/// Submit the current draft
#[derive(ClapArgs)]
pub struct SubmitArgs {
    /// Backend base URL. Falls back to $INNKEEPER_API_URL
    #[arg(long)]
    pub base_url: Option<String>,
}
