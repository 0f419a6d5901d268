//! Debounced draft autosave.
//!
//! Repeated field edits coalesce into a single persisted write: every edit
//! replaces the pending snapshot and reschedules one deferred save, so at
//! most one save is logically in flight. The timer is an owned resource
//! scoped to the session's lifetime — dropping the autosaver aborts any
//! pending task, which guarantees teardown never leaves a write aimed at a
//! persistence target that no longer exists.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::warn;
use tokio::task::JoinHandle;

use super::{DraftStore, KeyValueStore};
use crate::models::{ListingRecord, WizardMode};
use crate::session::WizardSession;

/// Default quiet period before an edit is persisted.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(800);

type Snapshot = Arc<Mutex<Option<ListingRecord>>>;

/// Cancel-and-reschedule debounce timer driving [`DraftStore::save_record`].
pub struct DraftAutosaver<S> {
    drafts: Arc<DraftStore<S>>,
    mode: WizardMode,
    delay: Duration,
    pending: Snapshot,
    handle: Option<JoinHandle<()>>,
}

impl<S> DraftAutosaver<S>
where
    S: KeyValueStore + Send + Sync + 'static,
{
    pub fn new(drafts: DraftStore<S>, mode: WizardMode, delay: Duration) -> Self {
        Self {
            drafts: Arc::new(drafts),
            mode,
            delay,
            pending: Arc::new(Mutex::new(None)),
            handle: None,
        }
    }

    /// Records the session's current state and (re)schedules the save.
    ///
    /// The snapshot cell always holds the newest record, so the save that
    /// eventually fires reflects the latest edit at trigger time, not the
    /// edit that originally scheduled it. Edit-mode sessions and clean
    /// sessions schedule nothing.
    pub fn note_edit(&mut self, session: &WizardSession) {
        if session.mode() == WizardMode::Edit || !session.is_dirty() {
            return;
        }
        *self.pending.lock().expect("autosave snapshot lock") = Some(session.record().clone());
        self.reschedule();
    }

    /// Cancels any pending save without persisting.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        self.pending.lock().expect("autosave snapshot lock").take();
    }

    /// True while a save is scheduled but has not fired.
    pub fn is_pending(&self) -> bool {
        self.handle.as_ref().map_or(false, |h| !h.is_finished())
    }

    fn reschedule(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        let drafts = Arc::clone(&self.drafts);
        let pending = Arc::clone(&self.pending);
        let mode = self.mode;
        let delay = self.delay;
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let snapshot = pending.lock().expect("autosave snapshot lock").take();
            let Some(record) = snapshot else {
                return;
            };
            // A failed draft save must never disturb editing.
            let result =
                tokio::task::spawn_blocking(move || drafts.save_record(mode, &record)).await;
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => warn!("draft autosave failed: {e}"),
                Err(e) => warn!("draft autosave task failed: {e}"),
            }
        }));
    }
}

impl<S> Drop for DraftAutosaver<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{draft_key, MemoryStore};
    use crate::models::ListingPatch;

    fn dirty_session(name: &str) -> WizardSession {
        let mut session = WizardSession::new(WizardMode::Create);
        session.update_form(ListingPatch {
            name: Some(name.to_string()),
            ..ListingPatch::default()
        });
        session
    }

    fn store_with_shared_map() -> (DraftStore<Arc<MemoryStore>>, Arc<MemoryStore>) {
        let memory = Arc::new(MemoryStore::new());
        (DraftStore::new(Arc::clone(&memory)), memory)
    }

    #[tokio::test]
    async fn test_edits_coalesce_into_latest_snapshot() {
        let (drafts, memory) = store_with_shared_map();
        let mut autosaver =
            DraftAutosaver::new(drafts, WizardMode::Create, Duration::from_millis(30));

        autosaver.note_edit(&dirty_session("First"));
        autosaver.note_edit(&dirty_session("Second"));

        tokio::time::sleep(Duration::from_millis(300)).await;

        let payload = memory
            .get(&draft_key(WizardMode::Create))
            .unwrap()
            .expect("draft persisted");
        assert!(payload.contains("Second"));
        assert!(!payload.contains("First"));
    }

    #[tokio::test]
    async fn test_cancel_prevents_the_write() {
        let (drafts, memory) = store_with_shared_map();
        let mut autosaver =
            DraftAutosaver::new(drafts, WizardMode::Create, Duration::from_millis(30));

        autosaver.note_edit(&dirty_session("Never"));
        autosaver.cancel();

        tokio::time::sleep(Duration::from_millis(300)).await;

        assert!(memory.get(&draft_key(WizardMode::Create)).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_edit_mode_schedules_nothing() {
        let (drafts, _memory) = store_with_shared_map();
        let mut autosaver =
            DraftAutosaver::new(drafts, WizardMode::Edit, Duration::from_millis(10));

        let mut session = WizardSession::new(WizardMode::Edit);
        session.update_form(ListingPatch::default());
        autosaver.note_edit(&session);
        assert!(!autosaver.is_pending());
    }
}
