//! Submission orchestration.
//!
//! `submit` composes the validator, the schema adapter, the backend
//! collaborator, and the draft store. Nothing here is fatal: a rejected or
//! failed submission leaves the session record and the draft exactly as
//! they were, so the user can fix the reported problem and retry.

use log::{debug, info};

use crate::adapter;
use crate::backend::ListingBackend;
use crate::draft::{DraftStore, KeyValueStore};
use crate::error::{Result, WizardError};
use crate::models::{Attachment, WizardMode};
use crate::session::WizardSession;

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Backend identity of the listing (new on create, existing on update)
    pub id: String,
    /// Room-type children created after the parent resolved
    pub rooms_created: usize,
}

/// Validates, adapts, and submits the session's record.
///
/// Whole-form validation runs first; any failure aborts with the collected
/// reasons before a single network or persistence side effect. On success
/// the parent listing is created or updated (multipart when pending
/// attachments exist), room types are created strictly after the parent
/// resolves, and the draft is cleared — on create only.
///
/// On any backend failure the session is left untouched and the error
/// carries the first available human-readable message.
pub async fn submit<S: KeyValueStore>(
    session: &mut WizardSession,
    backend: &dyn ListingBackend,
    drafts: &DraftStore<S>,
) -> Result<Submission> {
    let failures = session.validate_all();
    if !failures.is_empty() {
        debug!("submission rejected: {} validation failures", failures.len());
        return Err(WizardError::Validation(failures));
    }

    let record = session.record();
    let pending: Vec<Attachment> = record
        .pending_attachments()
        .into_iter()
        .filter(|a| !a.is_placeholder())
        .cloned()
        .collect();

    let id = match session.mode() {
        WizardMode::Create => {
            let request = adapter::to_system_create(record);
            let created = if pending.is_empty() {
                backend.create_listing(&request).await?
            } else {
                backend.create_listing_multipart(&request, &pending).await?
            };
            info!("listing created with id {}", created.id);
            created.id
        }
        WizardMode::Edit => {
            let id = record.id.clone().ok_or_else(|| WizardError::Configuration {
                message: "edit-mode session has no listing id".to_string(),
            })?;
            let request = adapter::to_system_update(record);
            if pending.is_empty() {
                backend.update_listing(&id, &request).await?;
            } else {
                backend.update_listing_multipart(&id, &request, &pending).await?;
            }
            info!("listing {id} updated");
            id
        }
    };

    // Parent-before-children: room types only exist under a resolved
    // listing. On update, rooms the backend already knows keep their ids
    // and are not re-created.
    let mut rooms_created = 0;
    for room in &session.record().rooms {
        if room.id.is_some() {
            continue;
        }
        let room_request = adapter::to_room_create(room);
        backend.create_room_type(&id, &room_request).await?;
        rooms_created += 1;
    }

    if session.mode() == WizardMode::Create {
        drafts.clear(WizardMode::Create)?;
    }
    session.assign_id(id.clone());
    session.mark_clean();

    Ok(Submission { id, rooms_created })
}
