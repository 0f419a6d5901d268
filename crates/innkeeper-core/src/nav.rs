//! Step navigation state machine.
//!
//! [`StepNavigator`] owns the current step index and the monotonically
//! growing set of visited steps. It knows nothing about the form record;
//! operations that gate on validation take a closure so the caller decides
//! what "valid" means — and so an ungated call provably never consults the
//! validator.
//!
//! Two forward primitives exist on purpose. [`go_to_step`] serves the
//! guided linear flow and only accepts targets that are already visited or
//! exactly one ahead. [`jump_to_step`] accepts any in-range target and
//! exists solely for the review screen, which must be able to send the user
//! back to an arbitrary earlier step to fix a reported problem.
//!
//! [`go_to_step`]: StepNavigator::go_to_step
//! [`jump_to_step`]: StepNavigator::jump_to_step

use std::collections::BTreeSet;

use log::debug;

/// A completed step transition, reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    /// Validation outcome of the departed step, when one was run.
    /// Informational only; a `Some(false)` did not block the move.
    pub valid: Option<bool>,
}

/// Explicit state machine over step indices `[0, total)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepNavigator {
    active: usize,
    visited: BTreeSet<usize>,
    total: usize,
}

impl StepNavigator {
    /// Creates a navigator at step 0 with `total` steps.
    pub fn new(total: usize) -> Self {
        Self {
            active: 0,
            visited: BTreeSet::from([0]),
            total,
        }
    }

    pub fn active_step(&self) -> usize {
        self.active
    }

    pub fn total_steps(&self) -> usize {
        self.total
    }

    pub fn visited_steps(&self) -> &BTreeSet<usize> {
        &self.visited
    }

    /// Advances one step, if not already on the last.
    ///
    /// `current_valid` is the informational validation outcome of the step
    /// being left; it never blocks the advance. Returns the transition, or
    /// `None` when already on the last step.
    pub fn next(&mut self, current_valid: Option<bool>) -> Option<Transition> {
        if self.active + 1 >= self.total {
            return None;
        }
        let from = self.active;
        self.active += 1;
        self.visited.insert(self.active);
        let transition = Transition {
            from,
            to: self.active,
            valid: current_valid,
        };
        debug!(
            "wizard step {} -> {} (valid: {:?})",
            transition.from, transition.to, transition.valid
        );
        Some(transition)
    }

    /// Steps back one, unconditionally; back-navigation is never gated on
    /// validation. Returns `None` when already on the first step.
    pub fn back(&mut self) -> Option<Transition> {
        if self.active == 0 {
            return None;
        }
        let from = self.active;
        self.active -= 1;
        debug!("wizard step {} -> {} (back)", from, self.active);
        Some(Transition {
            from,
            to: self.active,
            valid: None,
        })
    }

    /// Moves to `target` if it was already visited or is exactly the next
    /// step. With `must_validate` set, `validate` is consulted first and a
    /// failing current step refuses the move without mutating any state.
    /// Without it, `validate` is never called.
    ///
    /// Returns whether the move happened.
    pub fn go_to_step(
        &mut self,
        target: usize,
        must_validate: bool,
        validate: impl FnOnce() -> bool,
    ) -> bool {
        if !self.can_go_to_step(target) {
            return false;
        }
        if must_validate && !validate() {
            debug!("wizard go_to_step {} refused: current step invalid", target);
            return false;
        }
        self.move_to(target);
        true
    }

    /// Moves to any `target` in `[0, total)` regardless of the visited set.
    /// With `validate_current` set, the current step must validate first or
    /// the jump is refused without mutating state.
    ///
    /// Returns whether the move happened.
    pub fn jump_to_step(
        &mut self,
        target: usize,
        validate_current: bool,
        validate: impl FnOnce() -> bool,
    ) -> bool {
        if target >= self.total {
            return false;
        }
        if validate_current && !validate() {
            debug!("wizard jump_to_step {} refused: current step invalid", target);
            return false;
        }
        self.move_to(target);
        true
    }

    /// Returns to step 0 and forgets all visits except it.
    pub fn reset(&mut self) {
        self.active = 0;
        self.visited = BTreeSet::from([0]);
    }

    pub fn is_first_step(&self) -> bool {
        self.active == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.active + 1 == self.total
    }

    pub fn can_go_next(&self) -> bool {
        self.active + 1 < self.total
    }

    pub fn can_go_back(&self) -> bool {
        self.active > 0
    }

    pub fn is_step_visited(&self, step: usize) -> bool {
        self.visited.contains(&step)
    }

    /// True iff `step` is visited or immediately next.
    pub fn can_go_to_step(&self, step: usize) -> bool {
        step < self.total && (self.visited.contains(&step) || step == self.active + 1)
    }

    fn move_to(&mut self, target: usize) {
        let from = self.active;
        self.active = target;
        self.visited.insert(target);
        debug!("wizard step {} -> {} (direct)", from, target);
    }
}
