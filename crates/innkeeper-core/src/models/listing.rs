//! Listing model definition: the wizard representation of a hotel aggregate.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{ImageRef, RoomRecord};
use crate::coerce;

/// Default check-in time of day.
pub const DEFAULT_CHECK_IN: &str = "14:00";

/// Default check-out time of day.
pub const DEFAULT_CHECK_OUT: &str = "12:00";

/// A resolved geographic coordinate pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    #[serde(deserialize_with = "coerce::f64_or_zero")]
    pub latitude: f64,
    #[serde(deserialize_with = "coerce::f64_or_zero")]
    pub longitude: f64,
}

/// Structured address block. Geolocation lives separately on the listing
/// because it stays optional until the location step's validation forces a
/// resolved coordinate pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub province: String,
    pub country: String,
    #[serde(default)]
    pub postal_code: String,
}

/// The in-progress wizard representation of a listing.
///
/// This is the flat, UI-friendly shape: unsaved binary attachments live in
/// the same image list as persisted references ([`ImageRef`]), rooms carry
/// session-local ids, and `id` stays absent until the first successful
/// create call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingRecord {
    /// Backend-assigned identity, absent until first successful create
    pub id: Option<String>,

    /// Display name of the property
    pub name: String,

    /// Long-form description
    #[serde(default)]
    pub description: Option<String>,

    /// Property category (e.g. "hotel", "guesthouse")
    #[serde(default)]
    pub category: Option<String>,

    /// Contact email
    #[serde(default)]
    pub email: String,

    /// Contact phone, locale mobile format
    #[serde(default)]
    pub phone: Option<String>,

    /// Structured address block
    #[serde(default)]
    pub address: Address,

    /// Resolved geolocation; required by the location step before submission
    #[serde(default)]
    pub geo: Option<GeoPoint>,

    /// Unordered, unique amenity tags
    #[serde(default)]
    pub amenities: BTreeSet<String>,

    /// Ordered room type children
    #[serde(default)]
    pub rooms: Vec<RoomRecord>,

    /// Listing images, pending or resolved
    #[serde(default)]
    pub images: Vec<ImageRef>,

    /// Check-in time of day
    #[serde(default = "default_check_in")]
    pub check_in: String,

    /// Check-out time of day
    #[serde(default = "default_check_out")]
    pub check_out: String,
}

fn default_check_in() -> String {
    DEFAULT_CHECK_IN.to_string()
}

fn default_check_out() -> String {
    DEFAULT_CHECK_OUT.to_string()
}

impl Default for ListingRecord {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: None,
            category: None,
            email: String::new(),
            phone: None,
            address: Address::default(),
            geo: None,
            amenities: BTreeSet::new(),
            rooms: Vec::new(),
            images: Vec::new(),
            check_in: default_check_in(),
            check_out: default_check_out(),
        }
    }
}

impl ListingRecord {
    /// Resets every non-definite numeric field to a safe default, on the
    /// listing and on every room. Run after loading a draft so a corrupted
    /// or hand-edited payload never propagates a non-number.
    pub fn normalize_numbers(&mut self) {
        if let Some(geo) = &mut self.geo {
            if !geo.latitude.is_finite() || !geo.longitude.is_finite() {
                self.geo = None;
            }
        }
        for room in &mut self.rooms {
            room.normalize_numbers();
        }
    }

    /// Total image count across the listing and all rooms.
    pub fn image_count(&self) -> usize {
        self.images.len() + self.rooms.iter().map(|r| r.images.len()).sum::<usize>()
    }

    /// Pending attachments in the listing-level image list, in order.
    pub fn pending_attachments(&self) -> Vec<&super::Attachment> {
        self.images.iter().filter_map(ImageRef::as_pending).collect()
    }

    /// Resolved references in the listing-level image list, in order.
    pub fn resolved_image_urls(&self) -> Vec<String> {
        self.images
            .iter()
            .filter_map(|i| i.as_resolved_url().map(str::to_string))
            .collect()
    }
}

/// A partial update to a [`ListingRecord`].
///
/// Scalar fields merge shallowly; the `rooms`, `images`, and `amenities`
/// collections are replaced wholesale when present, since element-wise
/// merging of these lists has no well-defined semantics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<Address>,
    pub geo: Option<GeoPoint>,
    pub amenities: Option<BTreeSet<String>>,
    pub rooms: Option<Vec<RoomRecord>>,
    pub images: Option<Vec<ImageRef>>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
}

impl ListingPatch {
    /// Applies this patch to a record. Fields left `None` are untouched.
    pub fn apply(self, record: &mut ListingRecord) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(description) = self.description {
            record.description = Some(description);
        }
        if let Some(category) = self.category {
            record.category = Some(category);
        }
        if let Some(email) = self.email {
            record.email = email;
        }
        if let Some(phone) = self.phone {
            record.phone = Some(phone);
        }
        if let Some(address) = self.address {
            record.address = address;
        }
        if let Some(geo) = self.geo {
            record.geo = Some(geo);
        }
        if let Some(amenities) = self.amenities {
            record.amenities = amenities;
        }
        if let Some(rooms) = self.rooms {
            record.rooms = rooms;
        }
        if let Some(images) = self.images {
            record.images = images;
        }
        if let Some(check_in) = self.check_in {
            record.check_in = check_in;
        }
        if let Some(check_out) = self.check_out {
            record.check_out = check_out;
        }
    }

    /// True when the patch carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.geo.is_none()
            && self.amenities.is_none()
            && self.rooms.is_none()
            && self.images.is_none()
            && self.check_in.is_none()
            && self.check_out.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let record = ListingRecord::default();
        assert_eq!(record.check_in, DEFAULT_CHECK_IN);
        assert_eq!(record.check_out, DEFAULT_CHECK_OUT);
        assert!(record.id.is_none());
        assert!(record.geo.is_none());
    }

    #[test]
    fn test_patch_replaces_collections_wholesale() {
        let mut record = ListingRecord {
            rooms: vec![RoomRecord::default(), RoomRecord::default()],
            ..ListingRecord::default()
        };
        let patch = ListingPatch {
            rooms: Some(vec![RoomRecord {
                name: "Only".to_string(),
                ..RoomRecord::default()
            }]),
            ..ListingPatch::default()
        };
        patch.apply(&mut record);
        assert_eq!(record.rooms.len(), 1);
        assert_eq!(record.rooms[0].name, "Only");
    }

    #[test]
    fn test_patch_shallow_merge_leaves_other_fields() {
        let mut record = ListingRecord {
            name: "Old".to_string(),
            email: "host@example.com".to_string(),
            ..ListingRecord::default()
        };
        let patch = ListingPatch {
            name: Some("New".to_string()),
            ..ListingPatch::default()
        };
        patch.apply(&mut record);
        assert_eq!(record.name, "New");
        assert_eq!(record.email, "host@example.com");
    }

    #[test]
    fn test_normalize_drops_non_finite_geo() {
        let mut record = ListingRecord {
            geo: Some(GeoPoint {
                latitude: f64::INFINITY,
                longitude: 106.8,
            }),
            ..ListingRecord::default()
        };
        record.normalize_numbers();
        assert!(record.geo.is_none());
    }

    #[test]
    fn test_image_count_spans_rooms() {
        let record = ListingRecord {
            images: vec![ImageRef::resolved("a")],
            rooms: vec![RoomRecord {
                images: vec![ImageRef::resolved("b"), ImageRef::resolved("c")],
                ..RoomRecord::default()
            }],
            ..ListingRecord::default()
        };
        assert_eq!(record.image_count(), 3);
    }
}
