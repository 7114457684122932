//! Per-request page context.
//!
//! The host builds one [`PageRequest`] per page render and hands it to the
//! hook for that page. Each [`PageContext`] variant carries only the fields
//! its page kind needs.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::attachment::AttachmentRecord;
use super::board::BoardSettings;
use super::forum::{ForumInfo, PostRecord, ThreadInfo};
use super::member::MemberProfile;
use crate::types::PostId;

/// The five page kinds that receive meta tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    /// Any page without a dedicated handler.
    SiteWide,
    /// A sub-forum thread listing.
    ForumListing,
    /// A thread in linear (flat) view.
    ThreadLinear,
    /// A thread in threaded (tree) view.
    ThreadThreaded,
    /// A member profile.
    Profile,
}

impl PageKind {
    /// Returns the string name of this page kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SiteWide => "site_wide",
            Self::ForumListing => "forum_listing",
            Self::ThreadLinear => "thread_linear",
            Self::ThreadThreaded => "thread_threaded",
            Self::Profile => "profile",
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The host script currently executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageScript {
    /// Board index.
    Index,
    /// Help documents.
    Help,
    /// Search.
    Search,
    /// Member list.
    MemberList,
    /// Portal.
    Portal,
    /// Calendar.
    Calendar,
    /// Forum display (has a dedicated handler).
    ForumDisplay,
    /// Show thread (has a dedicated handler).
    ShowThread,
    /// Member profile (has a dedicated handler).
    MemberProfile,
    /// Any other script.
    Other,
}

impl PageScript {
    /// Whether a page-specific handler emits the tags for this script.
    ///
    /// The site-wide handler must stay silent for these scripts.
    pub fn has_dedicated_handler(&self) -> bool {
        matches!(
            self,
            Self::ForumDisplay | Self::ShowThread | Self::MemberProfile
        )
    }

    /// Language key of the page title label.
    pub fn title_key(&self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Help => "help",
            Self::Search => "search",
            Self::MemberList => "memberlist",
            Self::Portal => "portal",
            Self::Calendar => "calendar",
            Self::ForumDisplay => "forumdisplay",
            Self::ShowThread => "showthread",
            Self::MemberProfile => "profile",
            Self::Other => "site_wide",
        }
    }
}

/// Context of a page without a dedicated handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContext {
    /// The executing script.
    pub script: PageScript,
    /// Path and query of the current page, relative to the board URL.
    #[serde(default)]
    pub current_path: String,
}

/// Context of a forum listing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumListingContext {
    /// The forum being listed.
    pub forum: ForumInfo,
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: u32,
}

/// Where in a thread the request points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadLocation {
    /// Post explicitly requested (`pid`), if any.
    #[serde(default)]
    pub requested_post: Option<PostId>,
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Search term to highlight, if any.
    #[serde(default)]
    pub highlight: Option<String>,
}

impl Default for ThreadLocation {
    fn default() -> Self {
        Self {
            requested_post: None,
            page: default_page(),
            highlight: None,
        }
    }
}

/// Context of a thread in threaded view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadedThreadContext {
    /// Forum containing the thread.
    pub forum: ForumInfo,
    /// The thread.
    pub thread: ThreadInfo,
    /// The post currently displayed, representative for the page.
    pub post: PostRecord,
    /// Request location.
    #[serde(default)]
    pub location: ThreadLocation,
    /// Attachment rows the host already loaded for this page.
    #[serde(default)]
    pub attachments: Vec<AttachmentRecord>,
}

/// Context of a thread in linear view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearThreadContext {
    /// Forum containing the thread.
    pub forum: ForumInfo,
    /// The thread.
    pub thread: ThreadInfo,
    /// All post rows of the current page, in display order.
    #[serde(default)]
    pub posts: Vec<PostRecord>,
    /// Request location.
    #[serde(default)]
    pub location: ThreadLocation,
    /// Attachment rows the host already loaded for this page.
    #[serde(default)]
    pub attachments: Vec<AttachmentRecord>,
}

impl LinearThreadContext {
    /// The first row of the page, representative for the thread.
    pub fn representative_post(&self) -> Option<&PostRecord> {
        self.posts.first()
    }

    /// Ids of every post on the page, in display order.
    pub fn post_ids(&self) -> Vec<PostId> {
        self.posts.iter().map(|p| p.id).collect()
    }
}

/// Context of a member profile page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileContext {
    /// The member whose profile is shown.
    pub member: MemberProfile,
}

/// Page-kind specific context.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageContext {
    /// Any page without a dedicated handler.
    SiteWide(SiteContext),
    /// Forum listing.
    ForumListing(ForumListingContext),
    /// Linear thread view.
    ThreadLinear(LinearThreadContext),
    /// Threaded thread view.
    ThreadThreaded(ThreadedThreadContext),
    /// Member profile.
    Profile(ProfileContext),
}

impl PageContext {
    /// The page kind of this context.
    pub fn kind(&self) -> PageKind {
        match self {
            Self::SiteWide(_) => PageKind::SiteWide,
            Self::ForumListing(_) => PageKind::ForumListing,
            Self::ThreadLinear(_) => PageKind::ThreadLinear,
            Self::ThreadThreaded(_) => PageKind::ThreadThreaded,
            Self::Profile(_) => PageKind::Profile,
        }
    }

    /// The host script that renders this context.
    pub fn script(&self) -> PageScript {
        match self {
            Self::SiteWide(ctx) => ctx.script,
            Self::ForumListing(_) => PageScript::ForumDisplay,
            Self::ThreadLinear(_) | Self::ThreadThreaded(_) => PageScript::ShowThread,
            Self::Profile(_) => PageScript::MemberProfile,
        }
    }
}

/// Everything the host supplies for one page render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRequest {
    /// Board settings.
    pub board: BoardSettings,
    /// Page context.
    pub page: PageContext,
}

fn default_page() -> u32 {
    1
}
