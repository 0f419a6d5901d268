//! System representation: the backend API's request and response shapes.
//!
//! Response types are deliberately loose. The backend emits the same logical
//! field under more than one name, sometimes as a string where a number is
//! expected, and omits fields freely; everything here is optional and the
//! duck-typed numerics come through as raw [`serde_json::Value`] so that
//! [`crate::adapter`] can reconcile and coerce them in one place.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A listing as the backend returns it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SystemEntity {
    pub id: Option<String>,

    /// Display name
    pub name: Option<String>,

    /// Legacy business name, still populated by older records
    pub hotel_name: Option<String>,

    pub description: Option<String>,
    pub category: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,

    pub address: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,

    /// Combined "lat,lng" form; wins over the discrete fields when parseable
    pub coordinates: Option<String>,
    pub latitude: Option<Value>,
    pub longitude: Option<Value>,

    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,

    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,

    #[serde(default)]
    pub room_types: Vec<SystemRoomType>,
}

/// A room type as the backend returns it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SystemRoomType {
    pub id: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,

    /// Canonical price field
    pub price: Option<Value>,
    /// Legacy duplicate populated by some call paths
    pub base_price: Option<Value>,

    pub base_occupancy: Option<Value>,
    pub max_occupancy: Option<Value>,
    pub available_rooms: Option<Value>,
    pub total_rooms: Option<Value>,

    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Create request body for a listing.
///
/// Emits only the field names the backend expects. Rooms are absent by
/// design: room types are created through the child endpoint once the
/// parent listing exists. Image entries are durable references only;
/// pending attachments travel through the multipart path instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SystemCreateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    pub address: String,
    pub city: String,
    pub province: String,
    pub country: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub postal_code: String,

    pub latitude: f64,
    pub longitude: f64,

    pub facilities: Vec<String>,
    pub images: Vec<String>,

    pub check_in_time: String,
    pub check_out_time: String,
}

/// Update request body; the backend accepts the same shape as create.
pub type SystemUpdateRequest = SystemCreateRequest;

/// Create request body for one room type under an existing listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RoomTypeCreateRequest {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub base_occupancy: u32,
    pub max_occupancy: u32,
    pub available_rooms: u32,
    pub total_rooms: u32,
    pub facilities: Vec<String>,
    pub images: Vec<String>,
}

/// Identifier envelope returned by the create endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatedEntity {
    pub id: String,
}
