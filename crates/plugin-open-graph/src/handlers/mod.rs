//! Page handlers.
//!
//! One handler per page kind, all hanging off [`MetaResolver`]. Each
//! gathers what it needs from its context record and runs it through the
//! text, URL and image helpers. None of them fail: missing input falls
//! back to configured defaults or the board name.

mod forum;
mod profile;
mod site;
mod thread;

use std::sync::Arc;

use ogmeta_core::config::OpenGraphConfig;
use ogmeta_core::models::{BoardSettings, PageContext, PageRequest};
use ogmeta_core::traits::HostServices;

use crate::emitter::{MetaEmitter, ResolvedMeta};
use crate::image::ImageResolver;
use crate::text::DescriptionFormatter;

/// Resolves and renders Open Graph metas for page requests.
#[derive(Debug, Clone)]
pub struct MetaResolver {
    config: Arc<OpenGraphConfig>,
    host: HostServices,
    formatter: DescriptionFormatter,
}

impl MetaResolver {
    /// Creates a resolver over `config` and the host's services.
    pub fn new(config: Arc<OpenGraphConfig>, host: HostServices) -> Self {
        let formatter = DescriptionFormatter::new(config.description_max_length);
        Self {
            config,
            host,
            formatter,
        }
    }

    /// Resolves the meta values for a request.
    ///
    /// Returns `None` only for a site-wide request on a page that has its
    /// own dedicated handler.
    pub fn resolve(&self, request: &PageRequest) -> Option<ResolvedMeta> {
        let board = &request.board;
        match &request.page {
            PageContext::SiteWide(ctx) => self.site_wide(board, ctx),
            PageContext::ForumListing(ctx) => Some(self.forum_listing(board, ctx)),
            PageContext::ThreadThreaded(ctx) => Some(self.thread_threaded(board, ctx)),
            PageContext::ThreadLinear(ctx) => Some(self.thread_linear(board, ctx)),
            PageContext::Profile(ctx) => Some(self.profile(board, ctx)),
        }
    }

    /// Resolves and renders the header block for a request.
    pub fn render(&self, request: &PageRequest) -> Option<String> {
        self.resolve(request)
            .map(|meta| MetaEmitter::new(&request.board, &self.config).emit(&meta))
    }

    fn images<'a>(&'a self, board: &'a BoardSettings) -> ImageResolver<'a> {
        ImageResolver::new(&self.config, board, &self.host)
    }

    /// Formats `primary`, falling back to the default description and
    /// then the board name when it is blank.
    fn describe(&self, board: &BoardSettings, primary: &str) -> String {
        let source = [primary, self.config.default_description.as_str()]
            .into_iter()
            .find(|text| !text.trim().is_empty())
            .unwrap_or(&board.name);
        self.formatter.format(source)
    }

    fn title(label: &str, board: &BoardSettings) -> String {
        format!("{label} - {}", board.name)
    }
}
