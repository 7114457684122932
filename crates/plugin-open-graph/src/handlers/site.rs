//! Site-wide metas for pages without a dedicated handler.

use tracing::debug;

use ogmeta_core::models::{BoardSettings, SiteContext};

use super::MetaResolver;
use crate::emitter::ResolvedMeta;
use crate::url::UrlBuilder;

impl MetaResolver {
    /// Site-wide metas for pages without a dedicated handler.
    ///
    /// Forum listings, threads and profiles get nothing here; their own
    /// handlers emit the block for those pages.
    /// Metas for a site-wide page.
    ///
    /// `None` when the executing script has its own handler.
    pub fn site_wide(&self, board: &BoardSettings, ctx: &SiteContext) -> Option<ResolvedMeta> {
        if ctx.script.has_dedicated_handler() {
            debug!(script = ?ctx.script, "Page has a dedicated handler, skipping site-wide metas");
            return None;
        }

        let title = match self.host.language.label(ctx.script.title_key()) {
            Some(label) if !label.trim().is_empty() => Self::title(label.trim(), board),
            _ => board.name.clone(),
        };
        let url = UrlBuilder::for_board(board).page(&ctx.current_path);
        let description = self.describe(board, "");
        let image = self.images(board).logo();

        Some(ResolvedMeta::new(title, url, description).with_image(image))
    }
}
