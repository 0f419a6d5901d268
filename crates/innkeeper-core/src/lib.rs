//! Core library for the Innkeeper listing wizard.
//!
//! This crate implements the entity-creation wizard engine behind the
//! Innkeeper marketplace's hotel-listing flow: the step-navigation state
//! machine, the form-state store, draft persistence with debounced
//! autosave, per-step and whole-form validation, and the bidirectional
//! adapter between the wizard's internal representation and the backend
//! API's shapes.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐    ┌──────────────────┐    ┌──────────────────┐
//! │  WizardSession   │───▶│    validate /    │    │  ListingBackend  │
//! │ (record + nav +  │    │     adapter      │───▶│  (REST client,   │
//! │  completed set)  │    │  (pure mapping)  │    │   injected)      │
//! └──────────────────┘    └──────────────────┘    └──────────────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │    DraftStore    │  debounced autosave, create mode only
//! │ (sqlite KV slot) │
//! └──────────────────┘
//! ```
//!
//! The engine is single-threaded and cooperative: every state transition
//! happens on the caller's thread in response to a discrete action. The
//! only background work is the autosave debounce timer, and the only
//! suspension points are draft I/O and the submission network call.
//!
//! # Quick Start
//!
//! ```rust
//! use innkeeper_core::{
//!     models::{ListingPatch, WizardMode},
//!     WizardSession,
//! };
//!
//! let mut session = WizardSession::new(WizardMode::Create);
//! session.update_form(ListingPatch {
//!     name: Some("Telaga Inn".to_string()),
//!     category: Some("hotel".to_string()),
//!     email: Some("host@telaga.example".to_string()),
//!     ..ListingPatch::default()
//! });
//!
//! // The basic step now validates, so the guided flow may advance.
//! assert_eq!(session.validate_current_step(true), None);
//! assert!(session.go_to_step(1, true));
//! ```

pub mod adapter;
pub mod backend;
pub mod coerce;
pub mod display;
pub mod draft;
pub mod error;
pub mod models;
pub mod nav;
pub mod session;
pub mod submit;
pub mod system;
pub mod validate;

// Re-export commonly used types
pub use backend::ListingBackend;
pub use display::{SubmissionResult, ValidationReport};
pub use draft::{DraftAutosaver, DraftStore, KeyValueStore, MemoryStore, SqliteStore};
pub use error::{Result, WizardError};
pub use models::{
    Attachment, ImageRef, ListingPatch, ListingRecord, RoomRecord, WizardMode, WizardStep,
    STEP_COUNT,
};
pub use nav::{StepNavigator, Transition};
pub use session::WizardSession;
pub use submit::{submit, Submission};
pub use validate::{validate_all, validate_step, StepFailure};
