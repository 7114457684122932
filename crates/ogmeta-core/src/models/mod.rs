//! Records the forum host supplies for one page render.
//!
//! Everything here is read-only input. Nothing is persisted by ogmeta.

pub mod attachment;
pub mod board;
pub mod forum;
pub mod member;
pub mod page;

pub use attachment::{AttachmentCache, AttachmentRecord};
pub use board::BoardSettings;
pub use forum::{ForumInfo, PostRecord, ThreadInfo};
pub use member::MemberProfile;
pub use page::{
    ForumListingContext, LinearThreadContext, PageContext, PageKind, PageRequest, PageScript,
    ProfileContext, SiteContext, ThreadedThreadContext, ThreadLocation,
};
