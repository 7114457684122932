//! Integration tests for the one-block-per-page contract.

mod helpers;

use ogmeta_core::config::OpenGraphConfig;
use ogmeta_core::models::{PageContext, PageScript, SiteContext};
use ogmeta_plugin::hooks::definitions::HookPoint;

use helpers::block_count;

const PAGES: [&str; 5] = [
    "site_index",
    "forum_listing",
    "thread_linear",
    "thread_threaded",
    "profile",
];

#[tokio::test]
async fn test_each_page_gets_exactly_one_block() {
    for name in PAGES {
        let render = helpers::render(OpenGraphConfig::default(), name).await;
        assert_eq!(block_count(&render.header_include), 1, "page {name}");
    }
}

#[tokio::test]
async fn test_firing_every_hook_still_yields_one_block() {
    for name in PAGES {
        let request = helpers::fixture(name);
        let harness = helpers::harness(OpenGraphConfig::default(), &request).await;
        let render = harness
            .fire_all(&HookPoint::ALL, &request.page_request())
            .await
            .expect("render");
        assert_eq!(block_count(&render.header_include), 1, "page {name}");
    }
}

#[tokio::test]
async fn test_site_context_on_dedicated_script_emits_nothing() {
    let mut request = helpers::fixture("site_index");
    for script in [
        PageScript::ForumDisplay,
        PageScript::ShowThread,
        PageScript::MemberProfile,
    ] {
        request.page = PageContext::SiteWide(SiteContext {
            script,
            current_path: "x.php".to_string(),
        });
        let harness = helpers::harness(OpenGraphConfig::default(), &request).await;
        let render = harness
            .render(&request.page_request())
            .await
            .expect("render");
        assert_eq!(block_count(&render.header_include), 0, "script {script:?}");
    }
}

#[tokio::test]
async fn test_disabled_plugin_emits_nothing() {
    let config = OpenGraphConfig {
        enabled: false,
        ..Default::default()
    };
    let request = helpers::fixture("forum_listing");
    let harness = helpers::harness(config, &request).await;

    assert_eq!(harness.plugins().await.len(), 1);
    let render = harness
        .render(&request.page_request())
        .await
        .expect("render");
    assert!(render.header_include.is_empty());
    assert!(render.hooks.iter().all(|h| h.handlers == 0));
}

#[tokio::test]
async fn test_shutdown_removes_handlers() {
    let request = helpers::fixture("profile");
    let harness = helpers::harness(OpenGraphConfig::default(), &request).await;
    harness.shutdown().await;

    assert!(harness.plugins().await.is_empty());
    let render = harness
        .render(&request.page_request())
        .await
        .expect("render");
    assert_eq!(block_count(&render.header_include), 0);
}
