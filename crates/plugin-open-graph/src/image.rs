//! Page image resolution.
//!
//! Order of preference: an attachment of the page's posts (when the
//! surface policy asks for one), then the author's avatar (when the
//! fallback mode is `avatar`), then the site logo.

use tracing::debug;

use ogmeta_core::config::{AttachmentMode, FallbackMode, OpenGraphConfig, SurfaceImagePolicy};
use ogmeta_core::models::{AttachmentCache, BoardSettings, PageKind, PostRecord};
use ogmeta_core::traits::HostServices;
use ogmeta_core::types::{Dimensions, ForumId, PostId};

use crate::attachment::AttachmentPicker;
use crate::url::{UrlBuilder, qualify};

/// An absolute image URL and its size, when known.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedImage {
    /// Absolute image URL. Empty only when no logo is configured anywhere.
    pub url: String,
    /// Pixel size reported by the host.
    pub dimensions: Option<Dimensions>,
}

/// What an image is being resolved for.
#[derive(Debug, Clone, Copy)]
pub struct ImageSubject<'a> {
    /// Forum the posts belong to.
    pub forum: ForumId,
    /// Posts whose attachments may be used.
    pub post_ids: &'a [PostId],
    /// Post whose author supplies the avatar fallback.
    pub author: Option<&'a PostRecord>,
    /// Attachment rows already loaded by the host.
    pub attachments: &'a AttachmentCache,
}

/// Picks the `og:image` for a page against one board and host.
#[derive(Debug)]
pub struct ImageResolver<'a> {
    config: &'a OpenGraphConfig,
    board: &'a BoardSettings,
    host: &'a HostServices,
}

impl<'a> ImageResolver<'a> {
    /// Creates a resolver for one request.
    pub fn new(
        config: &'a OpenGraphConfig,
        board: &'a BoardSettings,
        host: &'a HostServices,
    ) -> Self {
        Self {
            config,
            board,
            host,
        }
    }

    /// Resolves the image for a thread page under `policy`.
    pub fn resolve(
        &self,
        kind: PageKind,
        policy: SurfaceImagePolicy,
        subject: &ImageSubject<'_>,
    ) -> ResolvedImage {
        if policy.attachment != AttachmentMode::None {
            let thumbnail = policy.attachment.wants_thumbnail();
            let picker = AttachmentPicker::new(
                self.host,
                self.config.image_extensions(),
                self.board.attachments_enabled,
            );
            if let Some(aid) =
                picker.pick(subject.forum, subject.post_ids, thumbnail, subject.attachments)
            {
                debug!(page = %kind, attachment_id = %aid, thumbnail, "Using attachment image");
                return ResolvedImage {
                    url: UrlBuilder::for_board(self.board).attachment(aid, thumbnail),
                    dimensions: None,
                };
            }
        }

        if policy.fallback == FallbackMode::Avatar {
            match subject.author.filter(|post| post.has_author()) {
                Some(post) => {
                    if let Some(avatar) = self.avatar(&post.avatar, &post.avatar_dimensions) {
                        debug!(page = %kind, post_id = %post.id, "Using author avatar");
                        return avatar;
                    }
                }
                None => debug!(page = %kind, "No identifiable author for avatar fallback"),
            }
        }

        debug!(page = %kind, "Using site logo");
        self.logo()
    }

    /// Formats an avatar within the configured and board bounds.
    ///
    /// Returns `None` when the host yields no image, or one smaller than
    /// the configured minimum.
    pub fn avatar(&self, avatar: &str, dimensions: &str) -> Option<ResolvedImage> {
        let bounds = self.avatar_bounds();
        let formatted = self.host.avatars.format_avatar(avatar, dimensions, bounds);
        if formatted.image.trim().is_empty() {
            return None;
        }
        if let Some(size) = formatted.dimensions {
            if size.is_below(&self.config.image_min_dims) {
                debug!(
                    size = %size,
                    min = %self.config.image_min_dims,
                    "Avatar below minimum size"
                );
                return None;
            }
        }
        Some(ResolvedImage {
            url: qualify(&self.board.url, &formatted.image),
            dimensions: formatted.dimensions,
        })
    }

    /// The configured default logo, else the theme logo.
    pub fn logo(&self) -> ResolvedImage {
        let logo = if self.config.default_logo.trim().is_empty() {
            &self.board.theme_logo
        } else {
            &self.config.default_logo
        };
        ResolvedImage {
            url: qualify(&self.board.url, logo),
            dimensions: None,
        }
    }

    fn avatar_bounds(&self) -> Dimensions {
        match self.board.avatar_max_dims {
            Some(limit) => self.config.image_max_dims.min(limit),
            None => self.config.image_max_dims,
        }
    }
}
