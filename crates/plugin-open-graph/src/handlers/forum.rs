//! Forum listing metas.

use ogmeta_core::models::{BoardSettings, ForumListingContext};

use super::MetaResolver;
use crate::emitter::ResolvedMeta;
use crate::url::UrlBuilder;

impl MetaResolver {
    /// Metas for a forum listing page.
    pub fn forum_listing(&self, board: &BoardSettings, ctx: &ForumListingContext) -> ResolvedMeta {
        let forum = &ctx.forum;
        let title = Self::title(&forum.name, board);
        let url = UrlBuilder::for_board(board).forum(forum.id, ctx.page);
        let description = self.describe(board, &forum.description);
        let image = self.images(board).logo();

        ResolvedMeta::new(title, url, description).with_image(image)
    }
}
