//! Backend collaborator contract.
//!
//! The engine never talks to a transport directly; it drives this trait.
//! `innkeeper-api` provides the REST implementation, and tests substitute
//! an in-process fake. A cancelled or timed-out call must surface as an
//! ordinary error — the orchestrator treats it exactly like a failure.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Attachment;
use crate::system::{
    CreatedEntity, RoomTypeCreateRequest, SystemCreateRequest, SystemEntity, SystemUpdateRequest,
};

/// Remote operations on listings and their room-type children.
#[async_trait]
pub trait ListingBackend: Send + Sync {
    /// Loads a listing for edit mode.
    async fn get_listing(&self, id: &str) -> Result<SystemEntity>;

    /// Creates a listing with no pending attachments.
    async fn create_listing(&self, request: &SystemCreateRequest) -> Result<CreatedEntity>;

    /// Creates a listing, uploading pending attachments alongside the body.
    async fn create_listing_multipart(
        &self,
        request: &SystemCreateRequest,
        attachments: &[Attachment],
    ) -> Result<CreatedEntity>;

    /// Updates a listing with no pending attachments.
    async fn update_listing(&self, id: &str, request: &SystemUpdateRequest) -> Result<()>;

    /// Updates a listing, uploading pending attachments alongside the body.
    async fn update_listing_multipart(
        &self,
        id: &str,
        request: &SystemUpdateRequest,
        attachments: &[Attachment],
    ) -> Result<()>;

    /// Creates one room type under an existing listing. Callers must not
    /// invoke this before the parent create call has resolved.
    async fn create_room_type(
        &self,
        parent_id: &str,
        request: &RoomTypeCreateRequest,
    ) -> Result<CreatedEntity>;
}
