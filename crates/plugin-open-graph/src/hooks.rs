//! Hook adapters.
//!
//! One [`PageMetaHook`] is registered per hook point. The host puts the
//! [`PageRequest`] for the page being rendered into the payload under
//! [`REQUEST_KEY`]; the hook answers with the header block.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use ogmeta_core::error::AppError;
use ogmeta_core::models::{PageKind, PageRequest};
use ogmeta_plugin::hooks::definitions::{HookPayload, HookPoint, HookResult};
use ogmeta_plugin::hooks::registry::HookHandler;

use crate::error::OpenGraphError;
use crate::handlers::MetaResolver;

/// Plugin identifier used for hook ownership.
pub const PLUGIN_ID: &str = "open_graph_metas";

/// Payload key carrying the serialized [`PageRequest`].
pub const REQUEST_KEY: &str = "request";

/// The dedicated hook for a page kind, if it has one.
pub fn dedicated_hook(kind: PageKind) -> Option<HookPoint> {
    match kind {
        PageKind::SiteWide => None,
        PageKind::ForumListing => Some(HookPoint::ForumDisplayEnd),
        PageKind::ThreadThreaded => Some(HookPoint::ShowThreadThreaded),
        PageKind::ThreadLinear => Some(HookPoint::ShowThreadLinear),
        PageKind::Profile => Some(HookPoint::MemberProfileEnd),
    }
}

/// Hooks a host fires while rendering a page, in firing order.
pub fn hooks_for(kind: PageKind) -> Vec<HookPoint> {
    let mut hooks = vec![HookPoint::GlobalEnd];
    hooks.extend(dedicated_hook(kind));
    hooks
}

/// Builds the payload a host passes to `point` for `request`.
pub fn page_payload(point: HookPoint, request: &PageRequest) -> Result<HookPayload, AppError> {
    HookPayload::new(point).with_typed(REQUEST_KEY, request)
}

/// Renders Open Graph metas at one hook point.
#[derive(Debug)]
pub struct PageMetaHook {
    point: HookPoint,
    resolver: Arc<MetaResolver>,
}

impl PageMetaHook {
    /// Creates the handler for `point`.
    pub fn new(point: HookPoint, resolver: Arc<MetaResolver>) -> Self {
        Self { point, resolver }
    }

    /// Renders the header block for the payload's request.
    ///
    /// `global_end` only serves site-wide pages; every other hook only
    /// serves its own page kind.
    fn render(&self, payload: &HookPayload) -> Result<Option<String>, OpenGraphError> {
        let hook = self.point.as_str();
        let request: PageRequest = payload
            .get_typed::<PageRequest>(REQUEST_KEY)
            .map_err(|e| OpenGraphError::Decode {
                hook: hook.to_string(),
                reason: e.message,
            })?
            .ok_or_else(|| OpenGraphError::MissingRequest {
                hook: hook.to_string(),
            })?;

        let kind = request.page.kind();
        match (&self.point, dedicated_hook(kind)) {
            (HookPoint::GlobalEnd, None) => Ok(self.resolver.render(&request)),
            (HookPoint::GlobalEnd, Some(_)) => {
                debug!(hook, page = %kind, "Dedicated page, leaving it to its own hook");
                Ok(None)
            }
            (point, Some(expected)) if *point == expected => Ok(self.resolver.render(&request)),
            _ => Err(OpenGraphError::PageMismatch {
                hook: hook.to_string(),
                kind,
            }),
        }
    }
}

#[async_trait]
impl HookHandler for PageMetaHook {
    async fn handle(&self, payload: &HookPayload) -> HookResult {
        match self.render(payload) {
            Ok(Some(block)) => {
                debug!(hook = %self.point, bytes = block.len(), "Open Graph metas rendered");
                HookResult::with_header(PLUGIN_ID, block)
            }
            Ok(None) => HookResult::continue_execution(PLUGIN_ID),
            Err(e) => {
                warn!(hook = %self.point, error = %e, "Open Graph metas skipped");
                HookResult::continue_execution(PLUGIN_ID)
            }
        }
    }

    fn plugin_id(&self) -> &str {
        PLUGIN_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeHost, board};
    use ogmeta_core::config::OpenGraphConfig;
    use ogmeta_core::models::{PageContext, PageScript, SiteContext};

    fn resolver() -> Arc<MetaResolver> {
        Arc::new(MetaResolver::new(
            Arc::new(OpenGraphConfig::default()),
            FakeHost::new().services(),
        ))
    }

    fn site_request(script: PageScript) -> PageRequest {
        PageRequest {
            board: board(),
            page: PageContext::SiteWide(SiteContext {
                script,
                current_path: "index.php".to_string(),
            }),
        }
    }

    #[test]
    fn test_hooks_for_pages() {
        assert_eq!(hooks_for(PageKind::SiteWide), vec![HookPoint::GlobalEnd]);
        assert_eq!(
            hooks_for(PageKind::ThreadLinear),
            vec![HookPoint::GlobalEnd, HookPoint::ShowThreadLinear]
        );
    }

    #[tokio::test]
    async fn test_global_end_renders_site_pages() {
        let hook = PageMetaHook::new(HookPoint::GlobalEnd, resolver());
        let payload = page_payload(HookPoint::GlobalEnd, &site_request(PageScript::Index))
            .expect("payload");
        let result = hook.handle(&payload).await;
        let block = result.header_fragment().expect("header");
        assert!(block.contains("og:site_name"));
        assert!(block.contains("https://forum.example.com/index.php"));
    }

    #[tokio::test]
    async fn test_global_end_skips_dedicated_script() {
        let hook = PageMetaHook::new(HookPoint::GlobalEnd, resolver());
        let payload = page_payload(HookPoint::GlobalEnd, &site_request(PageScript::ShowThread))
            .expect("payload");
        assert!(hook.handle(&payload).await.header_fragment().is_none());
    }

    #[tokio::test]
    async fn test_mismatched_page_yields_nothing() {
        let hook = PageMetaHook::new(HookPoint::ForumDisplayEnd, resolver());
        let payload = page_payload(HookPoint::ForumDisplayEnd, &site_request(PageScript::Index))
            .expect("payload");
        assert!(matches!(
            hook.render(&payload),
            Err(OpenGraphError::PageMismatch { .. })
        ));
        assert!(hook.handle(&payload).await.header_fragment().is_none());
    }

    #[tokio::test]
    async fn test_missing_or_bad_request() {
        let hook = PageMetaHook::new(HookPoint::GlobalEnd, resolver());
        let empty = HookPayload::new(HookPoint::GlobalEnd);
        assert!(matches!(
            hook.render(&empty),
            Err(OpenGraphError::MissingRequest { .. })
        ));

        let bad = HookPayload::new(HookPoint::GlobalEnd).with_string(REQUEST_KEY, "nope");
        assert!(matches!(hook.render(&bad), Err(OpenGraphError::Decode { .. })));
        assert!(hook.handle(&bad).await.header_fragment().is_none());
    }
}
