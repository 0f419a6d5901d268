//! Room type model definition.

use serde::{Deserialize, Serialize};

use super::ImageRef;
use crate::coerce;

/// A room type belonging to one listing.
///
/// Rooms have no independent persistence path: a room lives inside exactly
/// one [`ListingRecord`](super::ListingRecord) for the duration of a wizard
/// session and is addressed by `local_id` until the backend assigns an `id`
/// through the child-creation call. The rooms list is never implicitly
/// deduplicated.
///
/// Numeric fields deserialize leniently (see [`crate::coerce`]): a draft or
/// backend payload carrying a stringly-typed or garbage number yields the
/// documented fallback instead of a decode error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomRecord {
    /// Session-local identifier, generated on construction
    #[serde(default = "new_local_id")]
    pub local_id: String,

    /// Backend-assigned identifier, absent until the room is created
    pub id: Option<String>,

    /// Display name of the room type
    pub name: String,

    /// Room category tag (e.g. "deluxe", "suite")
    pub category: String,

    /// Nightly price in currency units; must be positive once finalized
    #[serde(default, deserialize_with = "coerce::f64_or_zero")]
    pub price: f64,

    /// Occupancy included in the nightly price
    #[serde(default = "default_base_occupancy", deserialize_with = "coerce::u32_or_one")]
    pub base_occupancy: u32,

    /// Maximum occupancy; at least `base_occupancy`
    #[serde(default = "default_max_occupancy", deserialize_with = "coerce::u32_or_two")]
    pub max_occupancy: u32,

    /// Units currently open for booking; at most `total_units`
    #[serde(default, deserialize_with = "coerce::u32_or_zero")]
    pub available_units: u32,

    /// Total physical units of this room type
    #[serde(default, deserialize_with = "coerce::u32_or_zero")]
    pub total_units: u32,

    /// Free-form room amenities
    #[serde(default)]
    pub amenities: Vec<String>,

    /// Room images, pending or resolved
    #[serde(default)]
    pub images: Vec<ImageRef>,
}

fn new_local_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn default_base_occupancy() -> u32 {
    1
}

fn default_max_occupancy() -> u32 {
    2
}

impl Default for RoomRecord {
    fn default() -> Self {
        Self {
            local_id: new_local_id(),
            id: None,
            name: String::new(),
            category: String::new(),
            price: 0.0,
            base_occupancy: default_base_occupancy(),
            max_occupancy: default_max_occupancy(),
            available_units: 0,
            total_units: 0,
            amenities: Vec::new(),
            images: Vec::new(),
        }
    }
}

impl RoomRecord {
    /// Resets any non-finite numeric field to its safe default.
    ///
    /// Lenient deserialization already turns garbage into fallbacks; this
    /// pass additionally guards values produced in memory.
    pub fn normalize_numbers(&mut self) {
        if !self.price.is_finite() {
            self.price = 0.0;
        }
        if self.base_occupancy == 0 {
            self.base_occupancy = default_base_occupancy();
        }
        if self.max_occupancy == 0 {
            self.max_occupancy = default_max_occupancy();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_ids_are_distinct() {
        let a = RoomRecord::default();
        let b = RoomRecord::default();
        assert_ne!(a.local_id, b.local_id);
    }

    #[test]
    fn test_lenient_numeric_deserialization() {
        let json = r#"{
            "id": null,
            "name": "Deluxe",
            "category": "deluxe",
            "price": "350000",
            "base_occupancy": "abc",
            "max_occupancy": 3,
            "available_units": "2",
            "total_units": null
        }"#;
        let room: RoomRecord = serde_json::from_str(json).unwrap();
        assert_eq!(room.price, 350000.0);
        assert_eq!(room.base_occupancy, 1);
        assert_eq!(room.max_occupancy, 3);
        assert_eq!(room.available_units, 2);
        assert_eq!(room.total_units, 0);
    }

    #[test]
    fn test_normalize_numbers_resets_non_finite_price() {
        let mut room = RoomRecord {
            price: f64::NAN,
            base_occupancy: 0,
            ..RoomRecord::default()
        };
        room.normalize_numbers();
        assert_eq!(room.price, 0.0);
        assert_eq!(room.base_occupancy, 1);
    }
}
