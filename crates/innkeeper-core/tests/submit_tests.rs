mod common;

use std::sync::Mutex;

use async_trait::async_trait;
use common::{complete_session, test_attachment};
use innkeeper_core::models::{ImageRef, ListingPatch, RoomRecord, WizardMode};
use innkeeper_core::system::{
    CreatedEntity, RoomTypeCreateRequest, SystemCreateRequest, SystemEntity, SystemUpdateRequest,
};
use innkeeper_core::{
    submit, Attachment, DraftStore, ListingBackend, MemoryStore, Result, WizardError,
    WizardSession,
};

/// What the fake backend was asked to do, in call order.
#[derive(Debug, Clone, PartialEq)]
enum Call {
    Create { attachments: usize },
    Update { id: String, attachments: usize },
    CreateRoom { parent_id: String, name: String },
}

/// In-process stand-in for the REST client. Records every call and can be
/// told to fail a specific operation.
#[derive(Default)]
struct FakeBackend {
    calls: Mutex<Vec<Call>>,
    fail_parent: bool,
    fail_rooms: bool,
}

impl FakeBackend {
    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn parent_result(&self) -> Result<CreatedEntity> {
        if self.fail_parent {
            Err(WizardError::submission(Some("upstream rejected the listing".to_string())))
        } else {
            Ok(CreatedEntity { id: "listing-42".to_string() })
        }
    }
}

#[async_trait]
impl ListingBackend for FakeBackend {
    async fn get_listing(&self, _id: &str) -> Result<SystemEntity> {
        Ok(SystemEntity::default())
    }

    async fn create_listing(&self, _request: &SystemCreateRequest) -> Result<CreatedEntity> {
        self.record(Call::Create { attachments: 0 });
        self.parent_result()
    }

    async fn create_listing_multipart(
        &self,
        _request: &SystemCreateRequest,
        attachments: &[Attachment],
    ) -> Result<CreatedEntity> {
        self.record(Call::Create { attachments: attachments.len() });
        self.parent_result()
    }

    async fn update_listing(&self, id: &str, _request: &SystemUpdateRequest) -> Result<()> {
        self.record(Call::Update { id: id.to_string(), attachments: 0 });
        self.parent_result().map(|_| ())
    }

    async fn update_listing_multipart(
        &self,
        id: &str,
        _request: &SystemUpdateRequest,
        attachments: &[Attachment],
    ) -> Result<()> {
        self.record(Call::Update { id: id.to_string(), attachments: attachments.len() });
        self.parent_result().map(|_| ())
    }

    async fn create_room_type(
        &self,
        parent_id: &str,
        request: &RoomTypeCreateRequest,
    ) -> Result<CreatedEntity> {
        self.record(Call::CreateRoom {
            parent_id: parent_id.to_string(),
            name: request.name.clone(),
        });
        if self.fail_rooms {
            Err(WizardError::submission(None))
        } else {
            Ok(CreatedEntity { id: format!("room-{}", request.name) })
        }
    }
}

#[tokio::test]
async fn test_create_flow_submits_parent_then_rooms_and_clears_draft() {
    let backend = FakeBackend::default();
    let drafts = DraftStore::new(MemoryStore::default());
    let mut session = complete_session();
    drafts.save(&session).unwrap();

    let outcome = submit(&mut session, &backend, &drafts).await.unwrap();

    assert_eq!(outcome.id, "listing-42");
    assert_eq!(outcome.rooms_created, 1);
    assert_eq!(
        backend.calls(),
        vec![
            Call::Create { attachments: 0 },
            Call::CreateRoom { parent_id: "listing-42".to_string(), name: "Deluxe".to_string() },
        ]
    );

    // Success finalizes the session and retires the draft.
    assert_eq!(session.record().id.as_deref(), Some("listing-42"));
    assert!(!session.is_dirty());
    assert!(drafts.load(WizardMode::Create).unwrap().is_none());
}

#[tokio::test]
async fn test_pending_attachments_use_the_multipart_path() {
    let backend = FakeBackend::default();
    let drafts = DraftStore::new(MemoryStore::default());
    let mut session = complete_session();
    session.update_form(ListingPatch {
        images: Some(vec![
            ImageRef::resolved("https://cdn.example.com/front.jpg"),
            ImageRef::Pending(test_attachment("pool.jpg")),
            // A restored placeholder has no bytes left to upload.
            ImageRef::Pending(test_attachment("stale.jpg").as_placeholder()),
        ]),
        ..ListingPatch::default()
    });

    submit(&mut session, &backend, &drafts).await.unwrap();

    assert_eq!(backend.calls()[0], Call::Create { attachments: 1 });
}

#[tokio::test]
async fn test_invalid_form_is_rejected_before_any_backend_call() {
    let backend = FakeBackend::default();
    let drafts = DraftStore::new(MemoryStore::default());
    let mut session = complete_session();

    // Zero out the room price; the rooms step must reject it.
    let mut rooms = session.record().rooms.clone();
    rooms[0].price = 0.0;
    session.update_form(ListingPatch { rooms: Some(rooms), ..ListingPatch::default() });

    let err = submit(&mut session, &backend, &drafts).await.unwrap_err();
    match err {
        WizardError::Validation(failures) => {
            assert!(failures.iter().any(|f| f.reason.contains("price")));
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
    assert!(backend.calls().is_empty());
    assert!(session.record().id.is_none());
}

#[tokio::test]
async fn test_parent_failure_leaves_session_and_draft_intact() {
    let backend = FakeBackend { fail_parent: true, ..FakeBackend::default() };
    let drafts = DraftStore::new(MemoryStore::default());
    let mut session = complete_session();
    drafts.save(&session).unwrap();

    let err = submit(&mut session, &backend, &drafts).await.unwrap_err();
    assert!(err.to_string().contains("upstream rejected the listing"));

    // No room calls after a failed parent, and nothing finalized.
    assert_eq!(backend.calls(), vec![Call::Create { attachments: 0 }]);
    assert!(session.record().id.is_none());
    assert!(session.is_dirty());
    assert!(drafts.load(WizardMode::Create).unwrap().is_some());
}

#[tokio::test]
async fn test_room_failure_keeps_the_draft() {
    let backend = FakeBackend { fail_rooms: true, ..FakeBackend::default() };
    let drafts = DraftStore::new(MemoryStore::default());
    let mut session = complete_session();
    drafts.save(&session).unwrap();

    let err = submit(&mut session, &backend, &drafts).await.unwrap_err();
    assert!(matches!(err, WizardError::Submission { .. }));

    // The parent was created but the session never learned the id, so a
    // retry is the caller's decision; the draft survives for recovery.
    assert!(session.record().id.is_none());
    assert!(drafts.load(WizardMode::Create).unwrap().is_some());
}

#[tokio::test]
async fn test_edit_mode_updates_and_skips_existing_rooms() {
    let backend = FakeBackend::default();
    let drafts = DraftStore::new(MemoryStore::default());

    let mut session = complete_session_in_edit_mode("listing-7");
    let mut rooms = session.record().rooms.clone();
    rooms[0].id = Some("room-existing".to_string());
    rooms.push(RoomRecord {
        name: "Suite".to_string(),
        category: "suite".to_string(),
        price: 900_000.0,
        base_occupancy: 2,
        max_occupancy: 4,
        available_units: 1,
        total_units: 2,
        ..RoomRecord::default()
    });
    session.update_form(ListingPatch { rooms: Some(rooms), ..ListingPatch::default() });

    let outcome = submit(&mut session, &backend, &drafts).await.unwrap();

    assert_eq!(outcome.id, "listing-7");
    assert_eq!(outcome.rooms_created, 1);
    assert_eq!(
        backend.calls(),
        vec![
            Call::Update { id: "listing-7".to_string(), attachments: 0 },
            Call::CreateRoom { parent_id: "listing-7".to_string(), name: "Suite".to_string() },
        ]
    );
}

#[tokio::test]
async fn test_edit_mode_without_an_id_is_a_configuration_error() {
    let backend = FakeBackend::default();
    let drafts = DraftStore::new(MemoryStore::default());
    // A backend entity with no id, as a malformed fetch would produce.
    let mut session = WizardSession::from_system(&SystemEntity::default());
    session.update_form(common::complete_patch());

    let err = submit(&mut session, &backend, &drafts).await.unwrap_err();
    assert!(matches!(err, WizardError::Configuration { .. }));
    assert!(backend.calls().is_empty());
}

/// Builds an edit-mode session over a backend entity carrying `id`, then
/// fills the form so every step validates.
fn complete_session_in_edit_mode(id: &str) -> WizardSession {
    let entity = SystemEntity { id: Some(id.to_string()), ..SystemEntity::default() };
    let mut session = WizardSession::from_system(&entity);
    session.update_form(common::complete_patch());
    session
}
