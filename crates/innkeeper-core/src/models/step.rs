//! The fixed sequence of wizard steps.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of steps in the wizard, including the review step.
pub const STEP_COUNT: usize = 6;

/// One bounded, independently validated segment of the creation flow.
///
/// Steps are ordered; the navigation controller works on indices in
/// `[0, STEP_COUNT)` and this enum names them. `Review` owns no fields of
/// its own and always validates — it exists so the review screen can jump
/// back to any earlier step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    /// Name, category, and contact details
    Basic,

    /// Address block and geolocation
    Location,

    /// Amenity tag selection
    Amenities,

    /// Room type children
    Rooms,

    /// Image attachments and references
    Images,

    /// Final review before submission
    Review,
}

impl WizardStep {
    /// All steps in wizard order.
    pub fn all() -> [WizardStep; STEP_COUNT] {
        [
            WizardStep::Basic,
            WizardStep::Location,
            WizardStep::Amenities,
            WizardStep::Rooms,
            WizardStep::Images,
            WizardStep::Review,
        ]
    }

    /// Step at the given navigation index, if in range.
    pub fn from_index(index: usize) -> Option<WizardStep> {
        Self::all().get(index).copied()
    }

    /// Navigation index of this step.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Lowercase step name used in validation reasons and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::Basic => "basic",
            WizardStep::Location => "location",
            WizardStep::Amenities => "amenities",
            WizardStep::Rooms => "rooms",
            WizardStep::Images => "images",
            WizardStep::Review => "review",
        }
    }
}

impl FromStr for WizardStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(WizardStep::Basic),
            "location" => Ok(WizardStep::Location),
            "amenities" => Ok(WizardStep::Amenities),
            "rooms" => Ok(WizardStep::Rooms),
            "images" => Ok(WizardStep::Images),
            "review" => Ok(WizardStep::Review),
            _ => Err(format!("Invalid wizard step: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, step) in WizardStep::all().iter().enumerate() {
            assert_eq!(step.index(), i);
            assert_eq!(WizardStep::from_index(i), Some(*step));
        }
        assert_eq!(WizardStep::from_index(STEP_COUNT), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("rooms".parse::<WizardStep>(), Ok(WizardStep::Rooms));
        assert_eq!("Review".parse::<WizardStep>(), Ok(WizardStep::Review));
        assert!("pricing".parse::<WizardStep>().is_err());
    }
}
