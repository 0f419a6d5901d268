//! Wizard session mode.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether a session creates a new listing or edits an existing one.
///
/// The mode is fixed for the lifetime of a session. Draft persistence is
/// keyed by mode and is a no-op in edit mode: resuming a stale draft of a
/// live listing would silently diverge from the backend record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WizardMode {
    /// Creating a listing that does not exist on the backend yet
    #[default]
    Create,

    /// Editing a listing loaded from the backend
    Edit,
}

impl FromStr for WizardMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "create" => Ok(WizardMode::Create),
            "edit" => Ok(WizardMode::Edit),
            _ => Err(format!("Invalid wizard mode: {s}")),
        }
    }
}

impl WizardMode {
    /// Persistence key suffix for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardMode::Create => "create",
            WizardMode::Edit => "edit",
        }
    }
}
