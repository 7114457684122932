//! Host service traits.
//!
//! The forum host owns content formatting, permissions, avatars,
//! attachment storage and localisation. ogmeta only reads through these
//! ports; all calls are synchronous and confined to one request.

use std::fmt::Debug;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::{AttachmentRecord, ForumInfo};
use crate::result::AppResult;
use crate::types::{Dimensions, ForumId, PostId};

/// Flags for the host's message formatting pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserOptions {
    /// Render raw HTML.
    pub allow_html: bool,
    /// Render MyCode markup.
    pub allow_mycode: bool,
    /// Render smilies.
    pub allow_smilies: bool,
    /// Render `[img]` code.
    pub allow_imgcode: bool,
    /// Render `[video]` code.
    pub allow_videocode: bool,
    /// Replace filtered words.
    pub filter_badwords: bool,
}

impl ParserOptions {
    /// Options taken from a forum's settings, with word filtering forced on.
    pub fn for_forum(forum: &ForumInfo) -> Self {
        Self {
            allow_html: forum.allow_html,
            allow_mycode: forum.allow_mycode,
            allow_smilies: forum.allow_smilies,
            allow_imgcode: forum.allow_imgcode,
            allow_videocode: forum.allow_videocode,
            filter_badwords: true,
        }
    }
}

/// Formats a post message for display.
pub trait ContentParser: Send + Sync + Debug {
    /// Render `message` with the given options.
    fn render(&self, message: &str, options: &ParserOptions) -> String;
}

/// The viewer's permissions in one forum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumPermissions {
    /// May see the forum.
    #[serde(default)]
    pub can_view: bool,
    /// May open threads.
    #[serde(default)]
    pub can_view_threads: bool,
    /// May download attachments.
    #[serde(default)]
    pub can_download_attachments: bool,
}

/// Resolves the current viewer's forum permissions.
pub trait PermissionService: Send + Sync + Debug {
    /// Permissions in `forum`.
    fn forum_permissions(&self, forum: ForumId) -> ForumPermissions;
}

/// An avatar ready for output.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormattedAvatar {
    /// Fully-qualified image URL.
    pub image: String,
    /// Display dimensions after scaling, when known.
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
}

/// Turns a stored avatar reference into an output URL.
pub trait AvatarFormatter: Send + Sync + Debug {
    /// Format `avatar` (with stored `dimensions`, `"W|H"`) scaled to fit `max`.
    fn format_avatar(&self, avatar: &str, dimensions: &str, max: Dimensions) -> FormattedAvatar;
}

/// Queries attachment rows.
pub trait AttachmentSource: Send + Sync + Debug {
    /// Every attachment owned by any of `posts`, in storage order.
    fn attachments_for_posts(&self, posts: &[PostId]) -> AppResult<Vec<AttachmentRecord>>;
}

/// Localised labels.
pub trait LanguagePack: Send + Sync + Debug {
    /// The label for `key`, if the active language defines it.
    fn label(&self, key: &str) -> Option<String>;
}

/// Bundle of every host port.
#[derive(Debug, Clone)]
pub struct HostServices {
    /// Message formatting.
    pub parser: Arc<dyn ContentParser>,
    /// Permission lookups.
    pub permissions: Arc<dyn PermissionService>,
    /// Avatar formatting.
    pub avatars: Arc<dyn AvatarFormatter>,
    /// Attachment queries.
    pub attachments: Arc<dyn AttachmentSource>,
    /// Localisation.
    pub language: Arc<dyn LanguagePack>,
}
