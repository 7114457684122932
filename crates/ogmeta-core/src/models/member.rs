//! Member profile record.

use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// A member profile being displayed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberProfile {
    /// User id.
    pub id: UserId,
    /// Username.
    pub username: String,
    /// Signature text, may be empty.
    #[serde(default)]
    pub signature: String,
    /// Raw avatar reference.
    #[serde(default)]
    pub avatar: String,
    /// Avatar dimensions as stored by the host (`"W|H"`).
    #[serde(default)]
    pub avatar_dimensions: String,
}
