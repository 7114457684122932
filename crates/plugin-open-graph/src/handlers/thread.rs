//! Thread metas for the threaded and linear views.
//!
//! Both views share one builder; they differ in which posts feed the
//! description and the attachment scan.

use tracing::debug;

use ogmeta_core::config::SurfaceImagePolicy;
use ogmeta_core::models::{
    AttachmentRecord, BoardSettings, ForumInfo, LinearThreadContext, PageKind, PostRecord,
    ThreadInfo, ThreadLocation, ThreadedThreadContext,
};
use ogmeta_core::traits::ParserOptions;
use ogmeta_core::types::PostId;

use super::MetaResolver;
use crate::attachment::group_by_post;
use crate::emitter::ResolvedMeta;
use crate::image::ImageSubject;
use crate::url::UrlBuilder;

/// Inputs shared by both thread views.
struct ThreadPage<'a> {
    kind: PageKind,
    forum: &'a ForumInfo,
    thread: &'a ThreadInfo,
    post: Option<&'a PostRecord>,
    post_ids: Vec<PostId>,
    location: &'a ThreadLocation,
    attachments: &'a [AttachmentRecord],
    policy: SurfaceImagePolicy,
}

impl MetaResolver {
    /// Metas for a thread in threaded view, built from the post on display.
    pub fn thread_threaded(
        &self,
        board: &BoardSettings,
        ctx: &ThreadedThreadContext,
    ) -> ResolvedMeta {
        self.thread_page(
            board,
            ThreadPage {
                kind: PageKind::ThreadThreaded,
                forum: &ctx.forum,
                thread: &ctx.thread,
                post: Some(&ctx.post),
                post_ids: vec![ctx.post.id],
                location: &ctx.location,
                attachments: &ctx.attachments,
                policy: self.config.thread_threaded,
            },
        )
    }

    /// Metas for a thread in linear view.
    ///
    /// The first post of the page is the representative post; attachments
    /// are looked up across every post on the page.
    pub fn thread_linear(&self, board: &BoardSettings, ctx: &LinearThreadContext) -> ResolvedMeta {
        self.thread_page(
            board,
            ThreadPage {
                kind: PageKind::ThreadLinear,
                forum: &ctx.forum,
                thread: &ctx.thread,
                post: ctx.representative_post(),
                post_ids: ctx.post_ids(),
                location: &ctx.location,
                attachments: &ctx.attachments,
                policy: self.config.thread_linear,
            },
        )
    }

    fn thread_page(&self, board: &BoardSettings, page: ThreadPage<'_>) -> ResolvedMeta {
        let title = Self::title(&page.thread.subject, board);

        let threaded = page.kind == PageKind::ThreadThreaded;
        let url = UrlBuilder::for_board(board).thread(page.thread.id, page.location, threaded);

        let rendered = match page.post {
            Some(post) => self
                .host
                .parser
                .render(&post.message, &ParserOptions::for_forum(page.forum)),
            None => {
                debug!(thread_id = %page.thread.id, "Thread page has no posts");
                String::new()
            }
        };
        let description = self.describe(board, &rendered);

        let cache = group_by_post(page.attachments.iter().cloned());
        let image = self.images(board).resolve(
            page.kind,
            page.policy,
            &ImageSubject {
                forum: page.forum.id,
                post_ids: &page.post_ids,
                author: page.post,
                attachments: &cache,
            },
        );

        ResolvedMeta::new(title, url, description).with_image(image)
    }
}
