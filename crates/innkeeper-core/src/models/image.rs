//! Image references: pending local attachments and resolved remote URLs.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// One entry in a listing's or room's image list.
///
/// An image is either a file selected locally that has not been uploaded
/// yet, or a durable reference string the backend already knows about. The
/// two cases are a tagged union so consumers never have to probe the shape
/// of an entry at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ImageRef {
    /// Selected locally, not yet uploaded
    Pending(Attachment),

    /// Persisted on the backend
    Resolved {
        /// Durable reference (URL or backend path)
        url: String,
    },
}

impl ImageRef {
    /// Shorthand for a resolved reference.
    pub fn resolved(url: impl Into<String>) -> Self {
        ImageRef::Resolved { url: url.into() }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ImageRef::Pending(_))
    }

    /// The durable reference, if this image has one.
    pub fn as_resolved_url(&self) -> Option<&str> {
        match self {
            ImageRef::Resolved { url } => Some(url),
            ImageRef::Pending(_) => None,
        }
    }

    /// The pending attachment, if this image is one.
    pub fn as_pending(&self) -> Option<&Attachment> {
        match self {
            ImageRef::Pending(attachment) => Some(attachment),
            ImageRef::Resolved { .. } => None,
        }
    }
}

/// A locally-selected file awaiting upload.
///
/// The raw bytes never cross a serialization boundary: `bytes` is skipped
/// by serde, so a persisted draft carries only this metadata. A deserialized
/// attachment is therefore always a placeholder that the rendering layer
/// must re-resolve to a real file before submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attachment {
    /// Original file name
    pub name: String,

    /// File size in bytes
    pub size: u64,

    /// MIME type reported by the file picker
    pub content_type: String,

    /// Last-modified timestamp of the source file (UTC)
    pub modified_at: Timestamp,

    /// True once the binary content has been dropped (draft round-trip)
    #[serde(default)]
    pub placeholder: bool,

    /// Raw file content; never serialized
    #[serde(skip)]
    pub bytes: Option<Vec<u8>>,
}

impl Attachment {
    /// Creates an attachment holding real file content.
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        modified_at: Timestamp,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            size: bytes.len() as u64,
            content_type: content_type.into(),
            modified_at,
            placeholder: false,
            bytes: Some(bytes),
        }
    }

    /// True when the binary content is gone and only metadata remains.
    pub fn is_placeholder(&self) -> bool {
        self.placeholder || self.bytes.is_none()
    }

    /// Metadata-only copy of this attachment, used when a draft is written.
    pub fn as_placeholder(&self) -> Self {
        Self {
            name: self.name.clone(),
            size: self.size,
            content_type: self.content_type.clone(),
            modified_at: self.modified_at,
            placeholder: true,
            bytes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attachment() -> Attachment {
        Attachment::new(
            "lobby.jpg",
            "image/jpeg",
            Timestamp::UNIX_EPOCH,
            vec![0xff, 0xd8, 0xff],
        )
    }

    #[test]
    fn test_new_attachment_holds_bytes() {
        let a = attachment();
        assert_eq!(a.size, 3);
        assert!(!a.is_placeholder());
    }

    #[test]
    fn test_placeholder_drops_bytes_keeps_metadata() {
        let p = attachment().as_placeholder();
        assert!(p.is_placeholder());
        assert!(p.bytes.is_none());
        assert_eq!(p.name, "lobby.jpg");
        assert_eq!(p.size, 3);
    }

    #[test]
    fn test_bytes_never_serialize() {
        let json = serde_json::to_string(&ImageRef::Pending(attachment())).unwrap();
        assert!(!json.contains("bytes"));

        let back: ImageRef = serde_json::from_str(&json).unwrap();
        let pending = back.as_pending().unwrap();
        assert!(pending.is_placeholder());
    }

    #[test]
    fn test_resolved_url_accessor() {
        let img = ImageRef::resolved("https://cdn.example.com/a.jpg");
        assert_eq!(img.as_resolved_url(), Some("https://cdn.example.com/a.jpg"));
        assert!(!img.is_pending());
    }
}
