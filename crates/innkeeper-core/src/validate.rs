//! Step and whole-form validation.
//!
//! Validation is pure and never fails as an operation: each check returns
//! the first violated rule as a human-readable reason, or `None` when the
//! step is valid. Callers decide whether a reason blocks a transition or is
//! only shown as a warning. Submission is gated on [`validate_all`]
//! returning no failures.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{ListingRecord, RoomRecord, WizardStep};

/// Minimum viable nightly price, in rupiah.
///
/// Policy constant, not a business rule: it exists to catch unit-confusion
/// entry errors (a price typed in thousands, or in the wrong currency), so
/// it is deliberately far below any plausible real rate.
pub const MIN_ROOM_PRICE: f64 = 10_000.0;

/// Soft ceiling on the total image count across a listing and its rooms,
/// bounding submission payload size.
pub const MAX_IMAGE_COUNT: usize = 12;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email pattern");
    // Indonesian mobile numbers: optional +62/62/0 country or trunk prefix,
    // then an 8-leading subscriber part of 9-12 digits.
    static ref PHONE_RE: Regex = Regex::new(r"^(\+?62|0)8\d{8,11}$").expect("phone pattern");
}

/// One violated rule, attributed to the step that owns the field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepFailure {
    pub step: WizardStep,
    pub reason: String,
}

impl fmt::Display for StepFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.step.as_str(), self.reason)
    }
}

/// Checks one step's fields against the rules it owns.
///
/// Returns the first violated rule as a reason, or `None` when valid.
pub fn validate_step(step: WizardStep, record: &ListingRecord) -> Option<String> {
    match step {
        WizardStep::Basic => validate_basic(record),
        WizardStep::Location => validate_location(record),
        WizardStep::Amenities => validate_amenities(record),
        WizardStep::Rooms => validate_rooms(record),
        WizardStep::Images => validate_images(record),
        WizardStep::Review => None,
    }
}

/// Runs every step validator and collects all failures.
pub fn validate_all(record: &ListingRecord) -> Vec<StepFailure> {
    WizardStep::all()
        .into_iter()
        .filter_map(|step| {
            validate_step(step, record).map(|reason| StepFailure { step, reason })
        })
        .collect()
}

fn validate_basic(record: &ListingRecord) -> Option<String> {
    if record.name.trim().is_empty() {
        return Some("property name is required".to_string());
    }
    if record.category.as_deref().map_or(true, |c| c.trim().is_empty()) {
        return Some("property category is required".to_string());
    }
    if !EMAIL_RE.is_match(record.email.trim()) {
        return Some("contact email is not a valid address".to_string());
    }
    if let Some(phone) = record.phone.as_deref() {
        let compact: String = phone.chars().filter(|c| !c.is_whitespace() && *c != '-').collect();
        if !compact.is_empty() && !PHONE_RE.is_match(&compact) {
            return Some("contact phone is not a valid mobile number".to_string());
        }
    }
    None
}

fn validate_location(record: &ListingRecord) -> Option<String> {
    let address = &record.address;
    if address.street.trim().is_empty() {
        return Some("street address is required".to_string());
    }
    if address.city.trim().is_empty() {
        return Some("city is required".to_string());
    }
    if address.province.trim().is_empty() {
        return Some("province is required".to_string());
    }
    if address.country.trim().is_empty() {
        return Some("country is required".to_string());
    }
    // Free text is not enough: the rendering layer must resolve an actual
    // coordinate pair before this step passes.
    match record.geo {
        Some(geo) if geo.latitude.is_finite() && geo.longitude.is_finite() => None,
        _ => Some("location must be pinned to map coordinates".to_string()),
    }
}

fn validate_amenities(record: &ListingRecord) -> Option<String> {
    if record.amenities.is_empty() {
        return Some("select at least one amenity".to_string());
    }
    None
}

fn validate_rooms(record: &ListingRecord) -> Option<String> {
    if record.rooms.is_empty() {
        return Some("add at least one room type".to_string());
    }
    for room in &record.rooms {
        if let Some(reason) = validate_room(room) {
            return Some(reason);
        }
    }
    None
}

fn validate_room(room: &RoomRecord) -> Option<String> {
    let label = if room.name.trim().is_empty() {
        "unnamed room".to_string()
    } else {
        format!("room '{}'", room.name)
    };
    if room.category.trim().is_empty() {
        return Some(format!("{label}: room category is required"));
    }
    if !room.price.is_finite() || room.price <= 0.0 {
        return Some(format!("{label}: nightly price must be greater than zero"));
    }
    if room.price < MIN_ROOM_PRICE {
        return Some(format!(
            "{label}: nightly price {} is below the minimum of {MIN_ROOM_PRICE}; check the amount was not entered in the wrong denomination",
            room.price
        ));
    }
    if room.base_occupancy < 1 {
        return Some(format!("{label}: base occupancy must be at least 1"));
    }
    if room.max_occupancy < room.base_occupancy {
        return Some(format!(
            "{label}: maximum occupancy cannot be below base occupancy"
        ));
    }
    if room.available_units > room.total_units {
        return Some(format!(
            "{label}: available units cannot exceed total units"
        ));
    }
    None
}

fn validate_images(record: &ListingRecord) -> Option<String> {
    let count = record.image_count();
    if count == 0 {
        return Some("add at least one photo".to_string());
    }
    if count > MAX_IMAGE_COUNT {
        return Some(format!(
            "too many photos ({count}); the maximum is {MAX_IMAGE_COUNT}"
        ));
    }
    None
}
