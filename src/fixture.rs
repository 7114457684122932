//! Fixture host backed by a JSON render request.
//!
//! A render request is the [`PageRequest`] a host would build for one page,
//! plus the host-side data the plugin reads through its ports: forum
//! permissions, the attachment table, language strings, the bad-word list
//! and the default avatar.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use ogmeta_core::error::AppError;
use ogmeta_core::models::{AttachmentRecord, BoardSettings, PageContext, PageRequest};
use ogmeta_core::result::AppResult;
use ogmeta_core::traits::{
    AttachmentSource, AvatarFormatter, ContentParser, ForumPermissions, FormattedAvatar,
    HostServices, LanguagePack, ParserOptions, PermissionService,
};
use ogmeta_core::types::{Dimensions, ForumId, PostId};

/// One page render as read from disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderRequest {
    /// Board settings.
    pub board: BoardSettings,
    /// Page context.
    pub page: PageContext,
    /// Host data behind the ports.
    #[serde(default)]
    pub host: FixtureHost,
}

impl RenderRequest {
    /// Reads a render request from a JSON file.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::with_source(
                ogmeta_core::error::ErrorKind::Storage,
                format!("Cannot read render request '{}'", path.display()),
                e,
            )
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// The page request handed to the hooks.
    pub fn page_request(&self) -> PageRequest {
        PageRequest {
            board: self.board.clone(),
            page: self.page.clone(),
        }
    }
}

/// Host data served through the plugin ports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureHost {
    /// Permissions for forums without an entry in `forum_overrides`.
    pub permissions: ForumPermissions,
    /// Per-forum permission overrides.
    pub forum_overrides: BTreeMap<ForumId, ForumPermissions>,
    /// The attachment table.
    pub attachments: Vec<AttachmentRecord>,
    /// Language strings by key.
    pub language: HashMap<String, String>,
    /// Words masked by the content filter.
    pub badwords: Vec<String>,
    /// Image used for members without an avatar.
    pub default_avatar: String,
}

impl Default for FixtureHost {
    fn default() -> Self {
        Self {
            permissions: ForumPermissions {
                can_view: true,
                can_view_threads: true,
                can_download_attachments: true,
            },
            forum_overrides: BTreeMap::new(),
            attachments: Vec::new(),
            language: HashMap::new(),
            badwords: Vec::new(),
            default_avatar: String::new(),
        }
    }
}

impl FixtureHost {
    /// Wraps the fixture as the full set of host services.
    pub fn into_services(self) -> HostServices {
        let host = Arc::new(self);
        HostServices {
            parser: host.clone(),
            permissions: host.clone(),
            avatars: host.clone(),
            attachments: host.clone(),
            language: host,
        }
    }

    fn mask_badwords(&self, text: &str) -> String {
        let mut out = text.to_string();
        for word in self.badwords.iter().filter(|w| !w.is_empty()) {
            out = replace_ignore_ascii_case(&out, word, &"*".repeat(word.chars().count()));
        }
        out
    }
}

impl ContentParser for FixtureHost {
    fn render(&self, message: &str, options: &ParserOptions) -> String {
        let mut out = if options.allow_html {
            message.to_string()
        } else {
            html_escape::encode_text(message).into_owned()
        };

        if options.filter_badwords {
            out = self.mask_badwords(&out);
        }
        if options.allow_mycode {
            for (tag, html) in [("b", "strong"), ("i", "em"), ("u", "u")] {
                out = out
                    .replace(&format!("[{tag}]"), &format!("<{html}>"))
                    .replace(&format!("[/{tag}]"), &format!("</{html}>"));
            }
        }
        if options.allow_imgcode {
            out = out
                .replace("[img]", "<img src=\"")
                .replace("[/img]", "\" alt=\"\" />");
        }
        out
    }
}

impl PermissionService for FixtureHost {
    fn forum_permissions(&self, forum: ForumId) -> ForumPermissions {
        self.forum_overrides
            .get(&forum)
            .copied()
            .unwrap_or(self.permissions)
    }
}

impl AvatarFormatter for FixtureHost {
    fn format_avatar(&self, avatar: &str, dimensions: &str, max: Dimensions) -> FormattedAvatar {
        let image = if avatar.trim().is_empty() {
            self.default_avatar.clone()
        } else {
            avatar.trim().to_string()
        };
        if image.is_empty() {
            return FormattedAvatar::default();
        }
        FormattedAvatar {
            image,
            dimensions: dimensions
                .parse::<Dimensions>()
                .ok()
                .map(|size| size.fit_within(max)),
        }
    }
}

impl AttachmentSource for FixtureHost {
    fn attachments_for_posts(&self, posts: &[PostId]) -> AppResult<Vec<AttachmentRecord>> {
        Ok(self
            .attachments
            .iter()
            .filter(|row| posts.contains(&row.post_id))
            .cloned()
            .collect())
    }
}

impl LanguagePack for FixtureHost {
    fn label(&self, key: &str) -> Option<String> {
        self.language.get(key).cloned()
    }
}

fn replace_ignore_ascii_case(haystack: &str, needle: &str, replacement: &str) -> String {
    let lower_hay = haystack.to_ascii_lowercase();
    let lower_needle = needle.to_ascii_lowercase();
    let mut out = String::with_capacity(haystack.len());
    let mut last = 0;
    for (start, _) in lower_hay.match_indices(&lower_needle) {
        out.push_str(&haystack[last..start]);
        out.push_str(replacement);
        last = start + needle.len();
    }
    out.push_str(&haystack[last..]);
    out
}
