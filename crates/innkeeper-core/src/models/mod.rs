//! Domain models for the listing wizard.
//!
//! The types here are the *wizard representation*: the flat, UI-oriented
//! shape of the listing being created or edited. The backend's request and
//! response shapes live in [`crate::system`], and [`crate::adapter`] maps
//! between the two.

pub mod image;
pub mod listing;
pub mod mode;
pub mod room;
pub mod step;

pub use image::{Attachment, ImageRef};
pub use listing::{Address, GeoPoint, ListingPatch, ListingRecord};
pub use mode::WizardMode;
pub use room::RoomRecord;
pub use step::{WizardStep, STEP_COUNT};
