//! Attachment records.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{AttachmentId, PostId};

/// Thumbnail marker the host stores when an image is too small to thumbnail.
pub const SMALL_THUMBNAIL_MARKER: &str = "SMALL";

/// A file attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentRecord {
    /// Attachment id.
    pub id: AttachmentId,
    /// Owning post.
    pub post_id: PostId,
    /// Original filename.
    pub filename: String,
    /// Whether the attachment is approved and visible.
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Thumbnail descriptor; absent or empty when none was generated.
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl AttachmentRecord {
    /// Whether a usable thumbnail exists.
    pub fn has_thumbnail(&self) -> bool {
        match self.thumbnail.as_deref().map(str::trim) {
            None | Some("") => false,
            Some(t) => t != SMALL_THUMBNAIL_MARKER,
        }
    }

    /// Lowercase file extension, if any.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
    }
}

/// Attachment rows grouped by owning post, in post-id order.
///
/// Within a group rows keep the order in which the host delivered them.
pub type AttachmentCache = BTreeMap<PostId, Vec<AttachmentRecord>>;

fn default_true() -> bool {
    true
}
