//! REST client for the Innkeeper listing backend.
//!
//! [`ListingApi`] implements [`ListingBackend`] over HTTP. The backend
//! wraps every response in a JSON envelope (`success`, `data`, `error`,
//! `message`); this crate unwraps the envelope and turns every failure —
//! transport, non-2xx status, or `success: false` — into a
//! [`WizardError`] carrying the most specific human-readable message the
//! response offered.
//!
//! Pending image attachments travel as `multipart/form-data`: the request
//! body goes in a `data` text part and each attachment in an `images` file
//! part. Attachments whose bytes are gone (draft placeholders) are the
//! caller's problem; the engine filters them before calling this crate.

use async_trait::async_trait;
use log::debug;
use reqwest::multipart;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use innkeeper_core::models::Attachment;
use innkeeper_core::system::{
    CreatedEntity, RoomTypeCreateRequest, SystemCreateRequest, SystemEntity, SystemUpdateRequest,
};
use innkeeper_core::{ListingBackend, Result, WizardError};

/// HTTP client for the listing backend.
pub struct ListingApi {
    client: reqwest::Client,
    base_url: String,
}

/// The backend's uniform response envelope.
///
/// `error.message` is the most specific failure description the backend
/// produces; the top-level `message` is a coarser summary some endpoints
/// populate instead. Either or both may be absent.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    success: bool,
    data: Option<T>,
    error: Option<EnvelopeError>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeError {
    message: Option<String>,
}

impl<T> Envelope<T> {
    /// The failure message this envelope carries, most specific first.
    fn error_message(&self) -> Option<String> {
        self.error
            .as_ref()
            .and_then(|e| e.message.clone())
            .or_else(|| self.message.clone())
    }

    /// Unwraps the payload, or fails with the envelope's own message.
    fn into_data(self) -> Result<T> {
        if !self.success {
            return Err(WizardError::submission(self.error_message()));
        }
        self.data
            .ok_or_else(|| WizardError::submission(Some("response envelope has no data".to_string())))
    }
}

impl ListingApi {
    /// Creates a client for a backend at `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Creates a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Builds the multipart form: the JSON body in a `data` part, each
    /// attachment in an `images` file part. Attachments without bytes are
    /// skipped rather than uploaded empty.
    fn multipart_form<B: serde::Serialize>(
        body: &B,
        attachments: &[Attachment],
    ) -> Result<multipart::Form> {
        let mut form =
            multipart::Form::new().text("data", serde_json::to_string(body)?);
        for attachment in attachments {
            let Some(bytes) = attachment.bytes.clone() else {
                continue;
            };
            let part = multipart::Part::bytes(bytes)
                .file_name(attachment.name.clone())
                .mime_str(&attachment.content_type)
                .map_err(|e| {
                    WizardError::submission(Some(format!(
                        "invalid attachment content type {:?}: {e}",
                        attachment.content_type
                    )))
                })?;
            form = form.part("images", part);
        }
        Ok(form)
    }

    /// Sends a request and unwraps the envelope into `T`.
    async fn dispatch<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|e| WizardError::submission(Some(format!("request failed: {e}"))))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| WizardError::submission(Some(format!("unreadable response body: {e}"))))?;

        let envelope: Envelope<T> = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            // A non-JSON body (proxy error page, empty 502) still needs a
            // readable message.
            Err(_) if !status.is_success() => {
                return Err(WizardError::submission(Some(format!(
                    "backend returned {status}"
                ))));
            }
            Err(e) => {
                return Err(WizardError::submission(Some(format!(
                    "malformed response envelope: {e}"
                ))));
            }
        };

        if !status.is_success() {
            debug!("backend returned {status}: {:?}", envelope.error_message());
            return Err(WizardError::submission(
                envelope
                    .error_message()
                    .or_else(|| Some(format!("backend returned {status}"))),
            ));
        }
        envelope.into_data()
    }

    /// Like [`dispatch`](Self::dispatch) but discards the payload.
    async fn dispatch_unit(request: reqwest::RequestBuilder) -> Result<()> {
        Self::dispatch::<serde_json::Value>(request).await.map(|_| ())
    }
}

#[async_trait]
impl ListingBackend for ListingApi {
    async fn get_listing(&self, id: &str) -> Result<SystemEntity> {
        let request = self.client.get(self.url(&format!("/hotels/{id}")));
        let response = request
            .send()
            .await
            .map_err(|e| WizardError::submission(Some(format!("request failed: {e}"))))?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(WizardError::ListingNotFound { id: id.to_string() });
        }
        let body = response
            .text()
            .await
            .map_err(|e| WizardError::submission(Some(format!("unreadable response body: {e}"))))?;
        let envelope: Envelope<SystemEntity> = serde_json::from_str(&body)?;
        envelope.into_data()
    }

    async fn create_listing(&self, request: &SystemCreateRequest) -> Result<CreatedEntity> {
        debug!("POST /hotels ({})", request.name);
        Self::dispatch(self.client.post(self.url("/hotels")).json(request)).await
    }

    async fn create_listing_multipart(
        &self,
        request: &SystemCreateRequest,
        attachments: &[Attachment],
    ) -> Result<CreatedEntity> {
        debug!("POST /hotels multipart ({} attachments)", attachments.len());
        let form = Self::multipart_form(request, attachments)?;
        Self::dispatch(self.client.post(self.url("/hotels")).multipart(form)).await
    }

    async fn update_listing(&self, id: &str, request: &SystemUpdateRequest) -> Result<()> {
        debug!("PUT /hotels/{id}");
        Self::dispatch_unit(self.client.put(self.url(&format!("/hotels/{id}"))).json(request))
            .await
    }

    async fn update_listing_multipart(
        &self,
        id: &str,
        request: &SystemUpdateRequest,
        attachments: &[Attachment],
    ) -> Result<()> {
        debug!("PUT /hotels/{id} multipart ({} attachments)", attachments.len());
        let form = Self::multipart_form(request, attachments)?;
        Self::dispatch_unit(self.client.put(self.url(&format!("/hotels/{id}"))).multipart(form))
            .await
    }

    async fn create_room_type(
        &self,
        parent_id: &str,
        request: &RoomTypeCreateRequest,
    ) -> Result<CreatedEntity> {
        debug!("POST /hotels/{parent_id}/room-types ({})", request.name);
        Self::dispatch(
            self.client
                .post(self.url(&format!("/hotels/{parent_id}/room-types")))
                .json(request),
        )
        .await
    }
}
