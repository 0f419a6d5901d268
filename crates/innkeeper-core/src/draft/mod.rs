//! Draft persistence for in-progress listings.
//!
//! A draft is a serialized snapshot of the wizard representation written to
//! a durable key-value slot, scoped by creation mode. Only create-mode
//! sessions are ever drafted: resuming a draft of an existing listing in
//! edit mode would silently diverge from the live backend record, so every
//! edit-mode operation here is a deliberate no-op.
//!
//! Binary attachments never reach the store. On save, each pending image is
//! reduced to its metadata placeholder; on load, every numeric field is
//! re-normalized so a corrupted or hand-edited draft cannot propagate a
//! non-number into the form.

use log::{debug, info, warn};

use crate::error::Result;
use crate::models::{ImageRef, ListingRecord, WizardMode};
use crate::session::WizardSession;

pub mod autosave;
pub mod sqlite;

pub use autosave::DraftAutosaver;
pub use sqlite::SqliteStore;

/// Durable key-value persistence primitive backing the draft store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.as_ref().get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.as_ref().set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.as_ref().remove(key)
    }
}

/// Persistence key for a mode's draft slot.
pub fn draft_key(mode: WizardMode) -> String {
    format!("draft_{}", mode.as_str())
}

/// Serializes and restores wizard records through a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct DraftStore<S> {
    store: S,
}

impl<S: KeyValueStore> DraftStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persists the session's record if the session is dirty.
    ///
    /// Returns whether a write happened: edit-mode sessions and clean
    /// sessions are skipped.
    pub fn save(&self, session: &WizardSession) -> Result<bool> {
        if session.mode() == WizardMode::Edit {
            debug!("draft save skipped: edit mode is never drafted");
            return Ok(false);
        }
        if !session.is_dirty() {
            debug!("draft save skipped: session is clean");
            return Ok(false);
        }
        self.save_record(session.mode(), session.record())?;
        Ok(true)
    }

    /// Persists a record snapshot directly. Used by the autosave timer,
    /// which holds snapshots rather than the session itself.
    pub fn save_record(&self, mode: WizardMode, record: &ListingRecord) -> Result<()> {
        if mode == WizardMode::Edit {
            return Ok(());
        }
        let payload = serde_json::to_string(&to_draft_payload(record))?;
        self.store.set(&draft_key(mode), &payload)?;
        debug!("draft saved ({} bytes)", payload.len());
        Ok(())
    }

    /// Restores the draft for a mode, if one exists.
    ///
    /// Always "no draft found" in edit mode. Numeric fields are normalized
    /// on the way in. A payload that fails to deserialize at all is treated
    /// like a missing draft: the failure is logged and the caller starts
    /// from an empty record, never from an error.
    pub fn load(&self, mode: WizardMode) -> Result<Option<ListingRecord>> {
        if mode == WizardMode::Edit {
            return Ok(None);
        }
        let Some(payload) = self.store.get(&draft_key(mode))? else {
            return Ok(None);
        };
        let mut record: ListingRecord = match serde_json::from_str(&payload) {
            Ok(record) => record,
            Err(e) => {
                warn!("discarding unreadable draft: {e}");
                return Ok(None);
            }
        };
        record.normalize_numbers();
        info!("draft restored for mode {}", mode.as_str());
        Ok(Some(record))
    }

    /// Removes the persisted draft. Called after a successful create,
    /// never after an update.
    pub fn clear(&self, mode: WizardMode) -> Result<()> {
        if mode == WizardMode::Edit {
            return Ok(());
        }
        self.store.remove(&draft_key(mode))
    }
}

/// Copy of the record with every pending attachment reduced to its
/// metadata placeholder, so the draft never attempts to persist raw bytes.
fn to_draft_payload(record: &ListingRecord) -> ListingRecord {
    let mut draft = record.clone();
    strip_attachment_bytes(&mut draft.images);
    for room in &mut draft.rooms {
        strip_attachment_bytes(&mut room.images);
    }
    draft
}

fn strip_attachment_bytes(images: &mut [ImageRef]) {
    for image in images {
        if let ImageRef::Pending(attachment) = image {
            *attachment = attachment.as_placeholder();
        }
    }
}

/// In-memory key-value store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: std::sync::Mutex<std::collections::HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().expect("memory store lock").get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .expect("memory store lock")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().expect("memory store lock").remove(key);
        Ok(())
    }
}
