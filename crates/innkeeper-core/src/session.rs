//! Wizard session: the mutable core of the engine.
//!
//! A [`WizardSession`] owns exactly one [`ListingRecord`] for its lifetime,
//! together with the navigation state machine, the completed-step set, and
//! the dirty flag. All mutation goes through [`update_form`] and the
//! navigation methods; the rendering layer only ever sees a read-only view
//! of the record.
//!
//! [`update_form`]: WizardSession::update_form

use std::collections::BTreeSet;

use crate::models::{
    ListingPatch, ListingRecord, WizardMode, WizardStep, STEP_COUNT,
};
use crate::nav::{StepNavigator, Transition};
use crate::system::SystemEntity;
use crate::validate::{self, StepFailure};

/// Process-local state wrapping one in-progress listing.
#[derive(Debug, Clone)]
pub struct WizardSession {
    mode: WizardMode,
    record: ListingRecord,
    nav: StepNavigator,
    completed: BTreeSet<usize>,
    dirty: bool,
}

impl WizardSession {
    /// Starts a session over a freshly-initialized empty record.
    pub fn new(mode: WizardMode) -> Self {
        Self::with_record(mode, ListingRecord::default())
    }

    /// Starts an edit-mode session seeded from a backend listing.
    pub fn from_system(entity: &SystemEntity) -> Self {
        Self::with_record(WizardMode::Edit, crate::adapter::from_system(entity))
    }

    /// Starts a create-mode session seeded from a restored draft.
    pub fn from_draft(record: ListingRecord) -> Self {
        Self::with_record(WizardMode::Create, record)
    }

    fn with_record(mode: WizardMode, record: ListingRecord) -> Self {
        Self {
            mode,
            record,
            nav: StepNavigator::new(STEP_COUNT),
            completed: BTreeSet::new(),
            dirty: false,
        }
    }

    /// Read-only view of the in-progress record.
    pub fn record(&self) -> &ListingRecord {
        &self.record
    }

    pub fn mode(&self) -> WizardMode {
        self.mode
    }

    pub fn navigator(&self) -> &StepNavigator {
        &self.nav
    }

    /// True once any field differs from the last loaded/saved baseline.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Steps currently marked completed, by index.
    pub fn completed_steps(&self) -> &BTreeSet<usize> {
        &self.completed
    }

    /// Applies a partial update and marks the session dirty.
    ///
    /// Scalars merge shallowly; the rooms, images, and amenities collections
    /// are replaced wholesale (see [`ListingPatch`]).
    pub fn update_form(&mut self, patch: ListingPatch) {
        patch.apply(&mut self.record);
        self.dirty = true;
    }

    /// Marks the session clean; called after the record is persisted or a
    /// baseline is (re)established.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Records the backend-assigned identity after a successful create.
    pub(crate) fn assign_id(&mut self, id: String) {
        self.record.id = Some(id);
    }

    pub fn mark_step_completed(&mut self, step: WizardStep) {
        self.completed.insert(step.index());
    }

    pub fn unmark_step_completed(&mut self, step: WizardStep) {
        self.completed.remove(&step.index());
    }

    /// The step the navigator is currently on.
    pub fn current_step(&self) -> WizardStep {
        // The navigator's index is bounded by STEP_COUNT by construction.
        WizardStep::from_index(self.nav.active_step()).unwrap_or(WizardStep::Review)
    }

    /// Validates the active step. With `mark_if_valid`, a passing step is
    /// added to the completed set; a failing step that was previously
    /// completed is unmarked either way.
    pub fn validate_current_step(&mut self, mark_if_valid: bool) -> Option<String> {
        let step = self.current_step();
        match validate::validate_step(step, &self.record) {
            None => {
                if mark_if_valid {
                    self.mark_step_completed(step);
                }
                None
            }
            Some(reason) => {
                self.unmark_step_completed(step);
                Some(reason)
            }
        }
    }

    /// Runs every step validator and collects all failures.
    pub fn validate_all(&self) -> Vec<StepFailure> {
        validate::validate_all(&self.record)
    }

    /// Advances to the next step. The departed step is validated
    /// informationally: the result is carried on the transition and an
    /// invalid previously-completed step is unmarked, but the advance is
    /// never blocked.
    pub fn next(&mut self) -> Option<Transition> {
        let step = self.current_step();
        let valid = validate::validate_step(step, &self.record).is_none();
        if valid {
            self.mark_step_completed(step);
        } else {
            self.unmark_step_completed(step);
        }
        self.nav.next(Some(valid))
    }

    /// Steps back unconditionally.
    pub fn back(&mut self) -> Option<Transition> {
        self.nav.back()
    }

    /// Moves to a visited-or-next step; see [`StepNavigator::go_to_step`].
    pub fn go_to_step(&mut self, target: usize, must_validate: bool) -> bool {
        let step = self.current_step();
        let record = &self.record;
        self.nav.go_to_step(target, must_validate, || {
            validate::validate_step(step, record).is_none()
        })
    }

    /// Moves to any in-range step; see [`StepNavigator::jump_to_step`].
    pub fn jump_to_step(&mut self, target: usize, validate_current: bool) -> bool {
        let step = self.current_step();
        let record = &self.record;
        self.nav.jump_to_step(target, validate_current, || {
            validate::validate_step(step, record).is_none()
        })
    }

    /// Returns to step 0 and clears the visited set.
    pub fn reset_navigation(&mut self) {
        self.nav.reset();
    }
}
