//! In-memory host used by the unit tests.

use std::collections::HashMap;
use std::sync::Arc;

use ogmeta_core::error::AppError;
use ogmeta_core::models::{AttachmentRecord, BoardSettings};
use ogmeta_core::result::AppResult;
use ogmeta_core::traits::{
    AttachmentSource, AvatarFormatter, ContentParser, ForumPermissions, FormattedAvatar,
    HostServices, LanguagePack, ParserOptions, PermissionService,
};
use ogmeta_core::types::{AttachmentId, Dimensions, ForumId, PostId};

/// Base URL of [`board`].
pub const BOARD_URL: &str = "https://forum.example.com";

/// Plain-URL board with a theme logo and attachments enabled.
pub fn board() -> BoardSettings {
    BoardSettings {
        url: BOARD_URL.to_string(),
        name: "Acme Forum".to_string(),
        use_app_id: true,
        comment_markers: false,
        attachments_enabled: true,
        avatar_max_dims: None,
        theme_logo: "images/logo.png".to_string(),
        seo_urls: false,
    }
}

/// A visible attachment row.
pub fn attachment(
    id: u32,
    post: u32,
    filename: &str,
    thumbnail: Option<&str>,
) -> AttachmentRecord {
    AttachmentRecord {
        id: AttachmentId(id),
        post_id: PostId(post),
        filename: filename.to_string(),
        visible: true,
        thumbnail: thumbnail.map(str::to_string),
    }
}

/// `record` marked as not visible.
pub fn hidden(mut record: AttachmentRecord) -> AttachmentRecord {
    record.visible = false;
    record
}

/// Host with full permissions, no stored attachments and no labels
/// unless configured otherwise.
#[derive(Debug, Clone)]
pub struct FakeHost {
    permissions: ForumPermissions,
    stored: Vec<AttachmentRecord>,
    fail_attachments: bool,
    labels: HashMap<String, String>,
    default_avatar: String,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            permissions: ForumPermissions {
                can_view: true,
                can_view_threads: true,
                can_download_attachments: true,
            },
            stored: Vec::new(),
            fail_attachments: false,
            labels: HashMap::new(),
            default_avatar: String::new(),
        }
    }

    pub fn with_permissions(mut self, permissions: ForumPermissions) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn with_stored_attachments(mut self, rows: Vec<AttachmentRecord>) -> Self {
        self.stored = rows;
        self
    }

    /// Makes every attachment query fail.
    pub fn with_failing_attachments(mut self) -> Self {
        self.fail_attachments = true;
        self
    }

    /// Adds a language label.
    pub fn with_label(mut self, key: &str, value: &str) -> Self {
        self.labels.insert(key.to_string(), value.to_string());
        self
    }

    /// Avatar the formatter substitutes for members without one.
    pub fn with_default_avatar(mut self, avatar: &str) -> Self {
        self.default_avatar = avatar.to_string();
        self
    }

    /// Wraps the host as every service port.
    pub fn services(self) -> HostServices {
        let host = Arc::new(self);
        HostServices {
            parser: host.clone(),
            permissions: host.clone(),
            avatars: host.clone(),
            attachments: host.clone(),
            language: host,
        }
    }
}

impl ContentParser for FakeHost {
    fn render(&self, message: &str, options: &ParserOptions) -> String {
        let mut out = message.replace("darn", "****");
        if options.allow_mycode {
            out = out.replace("[b]", "<strong>").replace("[/b]", "</strong>");
        }
        out
    }
}

impl PermissionService for FakeHost {
    fn forum_permissions(&self, _forum: ForumId) -> ForumPermissions {
        self.permissions
    }
}

impl AvatarFormatter for FakeHost {
    fn format_avatar(&self, avatar: &str, dimensions: &str, max: Dimensions) -> FormattedAvatar {
        let image = if avatar.trim().is_empty() {
            self.default_avatar.clone()
        } else {
            avatar.to_string()
        };
        FormattedAvatar {
            dimensions: if image.is_empty() {
                None
            } else {
                dimensions.parse::<Dimensions>().ok().map(|d| d.fit_within(max))
            },
            image,
        }
    }
}

impl AttachmentSource for FakeHost {
    fn attachments_for_posts(&self, posts: &[PostId]) -> AppResult<Vec<AttachmentRecord>> {
        if self.fail_attachments {
            return Err(AppError::database("attachment table unavailable"));
        }
        Ok(self
            .stored
            .iter()
            .filter(|row| posts.contains(&row.post_id))
            .cloned()
            .collect())
    }
}

impl LanguagePack for FakeHost {
    fn label(&self, key: &str) -> Option<String> {
        self.labels.get(key).cloned()
    }
}
