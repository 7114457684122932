//! Forum, thread and post records.

use serde::{Deserialize, Serialize};

use crate::types::{ForumId, PostId, ThreadId, UserId};

/// A forum as seen by the page being rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumInfo {
    /// Forum id.
    pub id: ForumId,
    /// Forum name.
    pub name: String,
    /// Forum description, may be empty.
    #[serde(default)]
    pub description: String,
    /// Whether raw HTML is allowed in posts.
    #[serde(default)]
    pub allow_html: bool,
    /// Whether MyCode markup is allowed in posts.
    #[serde(default = "default_true")]
    pub allow_mycode: bool,
    /// Whether smilies are rendered.
    #[serde(default = "default_true")]
    pub allow_smilies: bool,
    /// Whether `[img]` code is rendered.
    #[serde(default = "default_true")]
    pub allow_imgcode: bool,
    /// Whether `[video]` code is rendered.
    #[serde(default = "default_true")]
    pub allow_videocode: bool,
}

/// A thread as seen by the page being rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadInfo {
    /// Thread id.
    pub id: ThreadId,
    /// Thread subject.
    pub subject: String,
}

/// One post row of a thread page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRecord {
    /// Post id.
    pub id: PostId,
    /// Author's user id, absent for guests.
    #[serde(default)]
    pub author_id: Option<UserId>,
    /// Author's registered username; empty for guest posts.
    #[serde(default)]
    pub author_username: String,
    /// Raw post message.
    #[serde(default)]
    pub message: String,
    /// Author's raw avatar reference.
    #[serde(default)]
    pub avatar: String,
    /// Author's avatar dimensions as stored by the host (`"W|H"`).
    #[serde(default)]
    pub avatar_dimensions: String,
}

impl PostRecord {
    /// Whether the post has an identifiable registered author.
    pub fn has_author(&self) -> bool {
        !self.author_username.trim().is_empty()
    }
}

fn default_true() -> bool {
    true
}
