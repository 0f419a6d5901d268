use innkeeper_core::models::{
    Address, Attachment, GeoPoint, ImageRef, ListingPatch, RoomRecord,
};
use innkeeper_core::{DraftStore, SqliteStore, WizardMode, WizardSession};
use jiff::Timestamp;
use tempfile::TempDir;

/// Helper to create a sqlite-backed draft store in a temp directory.
pub fn create_test_store() -> (TempDir, DraftStore<SqliteStore>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let store = SqliteStore::new(&db_path).expect("Failed to create sqlite store");
    (temp_dir, DraftStore::new(store))
}

/// A patch that fills every step so the whole form validates.
pub fn complete_patch() -> ListingPatch {
    ListingPatch {
        name: Some("Telaga Inn".to_string()),
        description: Some("Lakeside property in Bandung".to_string()),
        category: Some("hotel".to_string()),
        email: Some("host@telaga.example".to_string()),
        phone: Some("081234567890".to_string()),
        address: Some(Address {
            street: "Jl. Merdeka 1".to_string(),
            city: "Bandung".to_string(),
            province: "Jawa Barat".to_string(),
            country: "Indonesia".to_string(),
            postal_code: "40111".to_string(),
        }),
        geo: Some(GeoPoint {
            latitude: -6.9175,
            longitude: 107.6191,
        }),
        amenities: Some(["wifi".to_string(), "parking".to_string()].into_iter().collect()),
        rooms: Some(vec![RoomRecord {
            name: "Deluxe".to_string(),
            category: "deluxe".to_string(),
            price: 350_000.0,
            base_occupancy: 2,
            max_occupancy: 3,
            available_units: 4,
            total_units: 5,
            ..RoomRecord::default()
        }]),
        images: Some(vec![ImageRef::resolved("https://cdn.example.com/front.jpg")]),
        ..ListingPatch::default()
    }
}

/// A create-mode session whose record passes every step validator.
pub fn complete_session() -> WizardSession {
    let mut session = WizardSession::new(WizardMode::Create);
    session.update_form(complete_patch());
    session
}

/// A pending attachment carrying real bytes.
pub fn test_attachment(name: &str) -> Attachment {
    Attachment::new(name, "image/jpeg", Timestamp::UNIX_EPOCH, vec![0xff, 0xd8, 0xff, 0xe0])
}
