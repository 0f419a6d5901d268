//! Bidirectional mapping between the wizard and system representations.
//!
//! Both directions are pure. The system-to-wizard direction is defensive:
//! every known field-name variant is reconciled explicitly, every numeric
//! field is coerced to a definite value, and anything the backend omitted
//! gets a fixed fallback — adaptation never surfaces a missing-field error.

use crate::coerce;
use crate::models::{Address, GeoPoint, ImageRef, ListingRecord, RoomRecord};
use crate::system::{
    RoomTypeCreateRequest, SystemCreateRequest, SystemEntity, SystemRoomType, SystemUpdateRequest,
};

/// Fallback base occupancy when the backend omits it.
const FALLBACK_BASE_OCCUPANCY: u32 = 1;

/// Fallback maximum occupancy when the backend omits it.
const FALLBACK_MAX_OCCUPANCY: u32 = 2;

/// Builds a wizard record from a backend listing.
pub fn from_system(entity: &SystemEntity) -> ListingRecord {
    ListingRecord {
        id: entity.id.clone(),
        name: reconcile_name(entity),
        description: entity.description.clone(),
        category: entity.category.clone(),
        email: entity.email.clone().unwrap_or_default(),
        phone: entity.phone.clone(),
        address: Address {
            street: entity.address.clone().unwrap_or_default(),
            city: entity.city.clone().unwrap_or_default(),
            province: entity.province.clone().unwrap_or_default(),
            country: entity.country.clone().unwrap_or_default(),
            postal_code: entity.postal_code.clone().unwrap_or_default(),
        },
        geo: extract_geo(entity),
        amenities: entity.facilities.iter().cloned().collect(),
        rooms: entity.room_types.iter().map(room_from_system).collect(),
        images: entity.images.iter().map(ImageRef::resolved).collect(),
        check_in: entity
            .check_in_time
            .clone()
            .unwrap_or_else(|| crate::models::listing::DEFAULT_CHECK_IN.to_string()),
        check_out: entity
            .check_out_time
            .clone()
            .unwrap_or_else(|| crate::models::listing::DEFAULT_CHECK_OUT.to_string()),
    }
}

/// Builds a wizard room from a backend room type, substituting fixed
/// fallbacks for anything omitted so the wizard never observes an undefined
/// numeric field.
pub fn room_from_system(room: &SystemRoomType) -> RoomRecord {
    RoomRecord {
        id: room.id.clone(),
        name: room.name.clone().unwrap_or_default(),
        category: room.category.clone().unwrap_or_default(),
        price: reconcile_price(room),
        base_occupancy: coerce::opt_u32_or(room.base_occupancy.as_ref(), FALLBACK_BASE_OCCUPANCY),
        max_occupancy: coerce::opt_u32_or(room.max_occupancy.as_ref(), FALLBACK_MAX_OCCUPANCY),
        available_units: coerce::opt_u32_or(room.available_rooms.as_ref(), 0),
        total_units: coerce::opt_u32_or(room.total_rooms.as_ref(), 0),
        amenities: room.facilities.clone(),
        images: room.images.iter().map(ImageRef::resolved).collect(),
        ..RoomRecord::default()
    }
}

/// Maps a wizard record to the backend's create request.
///
/// Rooms and pending attachments are deliberately excluded: room types go
/// through the child endpoint after the parent resolves, and attachments go
/// through the multipart path.
pub fn to_system_create(record: &ListingRecord) -> SystemCreateRequest {
    let geo = record.geo.unwrap_or(GeoPoint {
        latitude: 0.0,
        longitude: 0.0,
    });
    SystemCreateRequest {
        name: record.name.clone(),
        description: record.description.clone(),
        category: record.category.clone(),
        email: record.email.clone(),
        phone: record.phone.clone(),
        address: record.address.street.clone(),
        city: record.address.city.clone(),
        province: record.address.province.clone(),
        country: record.address.country.clone(),
        postal_code: record.address.postal_code.clone(),
        latitude: geo.latitude,
        longitude: geo.longitude,
        facilities: record.amenities.iter().cloned().collect(),
        images: record.resolved_image_urls(),
        check_in_time: record.check_in.clone(),
        check_out_time: record.check_out.clone(),
    }
}

/// Maps a wizard record to the backend's update request. The backend
/// accepts the same body shape for update as for create.
pub fn to_system_update(record: &ListingRecord) -> SystemUpdateRequest {
    to_system_create(record)
}

/// Maps one wizard room to the backend's room-type create request.
pub fn to_room_create(room: &RoomRecord) -> RoomTypeCreateRequest {
    RoomTypeCreateRequest {
        name: room.name.clone(),
        category: room.category.clone(),
        price: room.price,
        base_occupancy: room.base_occupancy,
        max_occupancy: room.max_occupancy,
        available_rooms: room.available_units,
        total_rooms: room.total_units,
        facilities: room.amenities.clone(),
        images: room
            .images
            .iter()
            .filter_map(|i| i.as_resolved_url().map(str::to_string))
            .collect(),
    }
}

/// Collapses the backend's two name fields into one, preferring the display
/// name over the legacy business name.
fn reconcile_name(entity: &SystemEntity) -> String {
    entity
        .name
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .or_else(|| entity.hotel_name.as_deref().filter(|s| !s.trim().is_empty()))
        .unwrap_or_default()
        .to_string()
}

/// Collapses the price/base_price duplicate into the canonical price,
/// first parseable value wins, 0 when neither parses.
fn reconcile_price(room: &SystemRoomType) -> f64 {
    for candidate in [room.price.as_ref(), room.base_price.as_ref()].into_iter().flatten() {
        let value = coerce::f64_or(candidate, f64::NAN);
        if value.is_finite() {
            return value;
        }
    }
    0.0
}

/// Extracts geolocation from whichever representation the backend used.
///
/// The combined "lat,lng" string takes precedence when present and
/// parseable; otherwise the discrete fields are coerced. Returns `None`
/// when neither form yields a finite pair.
fn extract_geo(entity: &SystemEntity) -> Option<GeoPoint> {
    if let Some(combined) = entity.coordinates.as_deref() {
        if let Some(geo) = parse_combined_coordinates(combined) {
            return Some(geo);
        }
    }
    match (entity.latitude.as_ref(), entity.longitude.as_ref()) {
        (Some(lat), Some(lng)) => {
            let latitude = coerce::f64_or(lat, f64::NAN);
            let longitude = coerce::f64_or(lng, f64::NAN);
            if latitude.is_finite() && longitude.is_finite() {
                Some(GeoPoint {
                    latitude,
                    longitude,
                })
            } else {
                None
            }
        }
        _ => None,
    }
}

fn parse_combined_coordinates(combined: &str) -> Option<GeoPoint> {
    let (lat, lng) = combined.split_once(',')?;
    let latitude = lat.trim().parse::<f64>().ok()?;
    let longitude = lng.trim().parse::<f64>().ok()?;
    if latitude.is_finite() && longitude.is_finite() {
        Some(GeoPoint {
            latitude,
            longitude,
        })
    } else {
        None
    }
}
