//! Attachment picker.
//!
//! Finds the first attachment of a set of posts that can stand in as the
//! page image. Scan order is deterministic: posts in ascending id order,
//! then attachments in the order the host returned them.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use ogmeta_core::models::{AttachmentCache, AttachmentRecord};
use ogmeta_core::traits::HostServices;
use ogmeta_core::types::{AttachmentId, ForumId, PostId};

/// Groups attachment rows by owning post.
pub fn group_by_post(rows: impl IntoIterator<Item = AttachmentRecord>) -> AttachmentCache {
    let mut cache = AttachmentCache::new();
    for row in rows {
        cache.entry(row.post_id).or_default().push(row);
    }
    cache
}

/// Picks an eligible image attachment for a set of posts.
#[derive(Debug)]
pub struct AttachmentPicker<'a> {
    host: &'a HostServices,
    extensions: Vec<String>,
    enabled: bool,
}

impl<'a> AttachmentPicker<'a> {
    /// Creates a picker.
    ///
    /// `extensions` is the lowercase allow-list of image file extensions;
    /// `enabled` is the board-wide attachments switch.
    pub fn new(host: &'a HostServices, extensions: Vec<String>, enabled: bool) -> Self {
        Self {
            host,
            extensions,
            enabled,
        }
    }

    /// Returns the first eligible attachment of `post_ids`, if any.
    ///
    /// `cache` holds rows the host already loaded for this page; posts it
    /// has no entry for are fetched through the attachment port.
    pub fn pick(
        &self,
        forum: ForumId,
        post_ids: &[PostId],
        want_thumbnail: bool,
        cache: &AttachmentCache,
    ) -> Option<AttachmentId> {
        if !self.enabled || forum.get() == 0 || post_ids.is_empty() {
            debug!(forum_id = %forum, posts = post_ids.len(), "Attachment lookup skipped");
            return None;
        }

        let perms = self.host.permissions.forum_permissions(forum);
        if !perms.can_view
            || !perms.can_view_threads
            || (!perms.can_download_attachments && !want_thumbnail)
        {
            debug!(forum_id = %forum, ?perms, "Attachment lookup denied by forum permissions");
            return None;
        }

        let wanted: BTreeSet<PostId> = post_ids.iter().copied().collect();
        let mut working: AttachmentCache = cache
            .iter()
            .filter(|(pid, _)| wanted.contains(pid))
            .map(|(pid, rows)| (*pid, rows.clone()))
            .collect();

        let missing: Vec<PostId> = wanted
            .iter()
            .filter(|pid| !working.contains_key(pid))
            .copied()
            .collect();
        if !missing.is_empty() {
            match self.host.attachments.attachments_for_posts(&missing) {
                Ok(rows) => {
                    for row in rows.into_iter().filter(|r| wanted.contains(&r.post_id)) {
                        working.entry(row.post_id).or_default().push(row);
                    }
                }
                Err(e) => {
                    warn!(
                        forum_id = %forum,
                        error = %e,
                        "Attachment query failed, continuing without fetched rows"
                    );
                }
            }
        }

        let picked = working
            .values()
            .flatten()
            .find(|row| self.is_eligible(row, want_thumbnail))
            .map(|row| row.id);

        debug!(forum_id = %forum, want_thumbnail, picked = ?picked, "Attachment scan finished");
        picked
    }

    fn is_eligible(&self, row: &AttachmentRecord, want_thumbnail: bool) -> bool {
        if !row.visible {
            return false;
        }
        if want_thumbnail && !row.has_thumbnail() {
            return false;
        }
        row.extension()
            .is_some_and(|ext| self.extensions.iter().any(|allowed| *allowed == ext))
    }
}
