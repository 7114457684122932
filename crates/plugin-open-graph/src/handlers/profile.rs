//! Member profile metas.

use tracing::debug;

use ogmeta_core::models::{BoardSettings, PageScript, ProfileContext};

use super::MetaResolver;
use crate::emitter::ResolvedMeta;
use crate::url::UrlBuilder;

/// `og:type` for member profiles.
pub const PROFILE_TYPE: &str = "profile";

impl MetaResolver {
    /// Metas for a member profile.
    ///
    /// The image is the member's avatar; profiles never fall back to the
    /// site logo.
    pub fn profile(&self, board: &BoardSettings, ctx: &ProfileContext) -> ResolvedMeta {
        let member = &ctx.member;

        let label = match self.host.language.label(PageScript::MemberProfile.title_key()) {
            Some(label) if !label.trim().is_empty() => {
                label.trim().replace("{1}", &member.username)
            }
            _ => member.username.clone(),
        };
        let title = Self::title(&label, board);

        let mut description = member.username.clone();
        if !member.signature.trim().is_empty() {
            description.push('\n');
            description.push_str(&member.signature);
        }
        let description = self.describe(board, &description);

        let url = UrlBuilder::for_board(board).profile(member.id);

        let mut meta = ResolvedMeta::new(title, url, description).with_type(PROFILE_TYPE);
        match self
            .images(board)
            .avatar(&member.avatar, &member.avatar_dimensions)
        {
            Some(avatar) => meta = meta.with_image(avatar),
            None => debug!(user_id = %member.id, "Profile has no usable avatar"),
        }

        meta.with_extra("profile:username", member.username.as_str())
    }
}
