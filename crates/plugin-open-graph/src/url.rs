//! Canonical URL construction.

use ogmeta_core::models::{BoardSettings, ThreadLocation};
use ogmeta_core::types::{AttachmentId, ForumId, PostId, ThreadId, UserId};

/// Path templates for each linkable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathTemplate {
    /// First page of a forum listing.
    Forum,
    /// Later page of a forum listing.
    ForumPaged,
    /// First page of a thread.
    Thread,
    /// Later page of a thread.
    ThreadPaged,
    /// Thread positioned on one post.
    ThreadPost,
    /// Member profile.
    Profile,
    /// Full attachment download.
    Attachment,
    /// Attachment thumbnail.
    AttachmentThumbnail,
}

impl PathTemplate {
    /// Template text, in search-engine-friendly form when `seo` is set.
    pub fn pattern(self, seo: bool) -> &'static str {
        match (self, seo) {
            (Self::Forum, false) => "forumdisplay.php?fid={fid}",
            (Self::Forum, true) => "forum-{fid}.html",
            (Self::ForumPaged, false) => "forumdisplay.php?fid={fid}&page={page}",
            (Self::ForumPaged, true) => "forum-{fid}-page-{page}.html",
            (Self::Thread, false) => "showthread.php?tid={tid}",
            (Self::Thread, true) => "thread-{tid}.html",
            (Self::ThreadPaged, false) => "showthread.php?tid={tid}&page={page}",
            (Self::ThreadPaged, true) => "thread-{tid}-page-{page}.html",
            (Self::ThreadPost, false) => "showthread.php?tid={tid}&pid={pid}",
            (Self::ThreadPost, true) => "thread-{tid}-post-{pid}.html",
            (Self::Profile, false) => "member.php?action=profile&uid={uid}",
            (Self::Profile, true) => "user-{uid}.html",
            (Self::Attachment, _) => "attachment.php?aid={aid}",
            (Self::AttachmentThumbnail, _) => "attachment.php?thumbnail={aid}",
        }
    }
}

/// Substitutes `{name}` placeholders in `template` and joins it to `base`.
///
/// Placeholders without a substitution are left as written.
pub fn build_url(base: &str, template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut path = String::with_capacity(template.len() + 16);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        path.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            substitutions
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                path.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                path.push('{');
                rest = after;
            }
        }
    }
    path.push_str(rest);

    join(base, &path)
}

/// Joins a site base URL and a relative path with a single `/`.
pub fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches("./").trim_start_matches('/')
    )
}

/// Makes an image reference absolute against the board URL.
pub fn qualify(base: &str, reference: &str) -> String {
    let reference = reference.trim();
    if reference.is_empty() {
        return String::new();
    }
    let lower = reference.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") || reference.starts_with("//")
    {
        reference.to_string()
    } else {
        join(base, reference)
    }
}

/// Appends a query parameter, choosing `?` or `&` as needed.
pub fn append_query(url: &mut String, pair: &str) {
    url.push(if url.contains('?') { '&' } else { '?' });
    url.push_str(pair);
}

/// Builds the canonical URLs of one board.
#[derive(Debug, Clone, Copy)]
pub struct UrlBuilder<'a> {
    base: &'a str,
    seo: bool,
}

impl<'a> UrlBuilder<'a> {
    /// Creates a builder for the board's base URL and URL style.
    pub fn for_board(board: &'a BoardSettings) -> Self {
        Self {
            base: &board.url,
            seo: board.seo_urls,
        }
    }

    /// URL of a path on the board, such as the executing script.
    pub fn page(&self, path: &str) -> String {
        join(self.base, path)
    }

    /// Forum listing URL, paged when `page > 1`.
    pub fn forum(&self, forum: ForumId, page: u32) -> String {
        let fid = forum.to_string();
        if page > 1 {
            let page = page.to_string();
            build_url(
                self.base,
                PathTemplate::ForumPaged.pattern(self.seo),
                &[("fid", &fid), ("page", &page)],
            )
        } else {
            build_url(self.base, PathTemplate::Forum.pattern(self.seo), &[("fid", &fid)])
        }
    }

    /// Thread URL for the requested location.
    ///
    /// A requested post wins over a page number. The highlight term and the
    /// threaded-mode marker follow as query parameters, and a requested post
    /// adds its `#pid` anchor last.
    pub fn thread(&self, thread: ThreadId, location: &ThreadLocation, threaded: bool) -> String {
        let tid = thread.to_string();
        let mut url = match location.requested_post {
            Some(post) => {
                let pid = post.to_string();
                build_url(
                    self.base,
                    PathTemplate::ThreadPost.pattern(self.seo),
                    &[("tid", &tid), ("pid", &pid)],
                )
            }
            None if location.page > 1 => {
                let page = location.page.to_string();
                build_url(
                    self.base,
                    PathTemplate::ThreadPaged.pattern(self.seo),
                    &[("tid", &tid), ("page", &page)],
                )
            }
            None => build_url(self.base, PathTemplate::Thread.pattern(self.seo), &[("tid", &tid)]),
        };

        if let Some(term) = location.highlight.as_deref().map(str::trim) {
            if !term.is_empty() {
                append_query(&mut url, &format!("highlight={}", urlencoding::encode(term)));
            }
        }
        if threaded {
            append_query(&mut url, "mode=threaded");
        }
        if let Some(post) = location.requested_post {
            url.push_str(&post_anchor(post));
        }

        url
    }

    /// Member profile URL.
    pub fn profile(&self, user: UserId) -> String {
        let uid = user.to_string();
        build_url(self.base, PathTemplate::Profile.pattern(self.seo), &[("uid", &uid)])
    }

    /// Attachment link, or its thumbnail link.
    pub fn attachment(&self, attachment: AttachmentId, thumbnail: bool) -> String {
        let template = if thumbnail {
            PathTemplate::AttachmentThumbnail
        } else {
            PathTemplate::Attachment
        };
        let aid = attachment.to_string();
        build_url(self.base, template.pattern(self.seo), &[("aid", &aid)])
    }
}

fn post_anchor(post: PostId) -> String {
    format!("#pid{post}")
}
