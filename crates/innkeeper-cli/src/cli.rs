//! Command handlers bridging parsed arguments to the wizard engine.
//!
//! Each handler loads what it needs, runs one engine operation, and renders
//! the result as markdown through the [`TerminalRenderer`]. CLI argument
//! structures live in [`crate::args`]; this module only sees their fields.

use std::fs;

use anyhow::{bail, Context, Result};
use log::info;

use innkeeper_api::ListingApi;
use innkeeper_core::models::{ListingRecord, WizardMode};
use innkeeper_core::{
    submit, DraftStore, ListingBackend, SqliteStore, SubmissionResult, ValidationReport,
    WizardError, WizardSession,
};

use crate::args::{FetchListingArgs, SeedDraftArgs, SubmitArgs};
use crate::renderer::TerminalRenderer;

/// Environment variable consulted when `--base-url` is absent.
const API_URL_ENV: &str = "INNKEEPER_API_URL";

pub struct Cli {
    drafts: DraftStore<SqliteStore>,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(drafts: DraftStore<SqliteStore>, renderer: TerminalRenderer) -> Self {
        Self { drafts, renderer }
    }

    /// `draft seed`: load a listing JSON file into the draft slot.
    pub fn seed_draft(&self, args: SeedDraftArgs) -> Result<()> {
        let payload = fs::read_to_string(&args.file)
            .with_context(|| format!("Failed to read {}", args.file.display()))?;
        let mut record: ListingRecord =
            serde_json::from_str(&payload).context("File is not a valid listing")?;
        record.normalize_numbers();

        self.drafts
            .save_record(WizardMode::Create, &record)
            .context("Failed to save draft")?;
        info!("draft seeded from {}", args.file.display());
        self.renderer.render(&format!("Draft saved: {}\n", record.name))
    }

    /// `draft show`: print the current draft as markdown.
    pub fn show_draft(&self) -> Result<()> {
        match self.load_draft()? {
            Some(record) => self.renderer.render(&record.to_string()),
            None => self.renderer.render("No draft found.\n"),
        }
    }

    /// `draft validate`: run every step validator against the draft.
    pub fn validate_draft(&self) -> Result<()> {
        let Some(record) = self.load_draft()? else {
            return self.renderer.render("No draft found.\n");
        };
        let session = WizardSession::from_draft(record);
        let report = ValidationReport(session.validate_all());
        self.renderer.render(&report.to_string())
    }

    /// `draft clear`: discard the draft slot.
    pub fn clear_draft(&self) -> Result<()> {
        self.drafts
            .clear(WizardMode::Create)
            .context("Failed to clear draft")?;
        self.renderer.render("Draft cleared.\n")
    }

    /// `listing fetch`: load a backend listing and print it.
    pub async fn fetch_listing(&self, args: FetchListingArgs) -> Result<()> {
        let api = api_client(args.base_url)?;
        let entity = api
            .get_listing(&args.id)
            .await
            .context("Failed to fetch listing")?;
        let record = innkeeper_core::adapter::from_system(&entity);
        self.renderer.render(&record.to_string())
    }

    /// `listing submit`: validate the draft and push the whole aggregate.
    pub async fn submit_draft(&self, args: SubmitArgs) -> Result<()> {
        let Some(record) = self.load_draft()? else {
            bail!("No draft to submit");
        };
        let api = api_client(args.base_url)?;
        let mut session = WizardSession::from_draft(record);

        match submit(&mut session, &api, &self.drafts).await {
            Ok(outcome) => self.renderer.render(&SubmissionResult(outcome).to_string()),
            Err(WizardError::Validation(failures)) => {
                self.renderer.render(&ValidationReport(failures).to_string())?;
                bail!("Draft failed validation");
            }
            Err(e) => Err(e).context("Submission failed"),
        }
    }

    fn load_draft(&self) -> Result<Option<ListingRecord>> {
        self.drafts
            .load(WizardMode::Create)
            .context("Failed to load draft")
    }
}

/// Resolves the backend base URL from the flag or the environment.
fn api_client(base_url: Option<String>) -> Result<ListingApi> {
    let url = match base_url.or_else(|| std::env::var(API_URL_ENV).ok()) {
        Some(url) => url,
        None => bail!("No backend URL: pass --base-url or set {API_URL_ENV}"),
    };
    Ok(ListingApi::new(url.trim_end_matches('/')))
}
