//! Integration tests for page rendering through the plugin manager.

mod helpers;

use std::io::Write;

use ogmeta_core::config::{
    AppConfig, AttachmentMode, FallbackMode, OpenGraphConfig, SurfaceImagePolicy,
};
use ogmeta_plugin::hooks::definitions::HookPoint;

use helpers::meta_content;

#[tokio::test]
async fn test_forum_listing_block() {
    let config = OpenGraphConfig {
        default_description: "Welcome".to_string(),
        ..Default::default()
    };
    let render = helpers::render(config, "forum_listing").await;

    assert_eq!(
        render.header_include,
        concat!(
            "\n<meta property=\"og:site_name\" content=\"Acme Forum\" />",
            "\n<meta property=\"og:title\" content=\"News - Acme Forum\" />",
            "\n<meta property=\"og:url\" content=\"https://forum.example.com/forumdisplay.php?fid=2\" />",
            "\n<meta property=\"og:description\" content=\"Welcome\" />",
            "\n<meta property=\"og:image\" content=\"https://forum.example.com/images/logo.png\" />",
            "\n<meta property=\"og:type\" content=\"website\" />",
        )
    );

    let hooks: Vec<HookPoint> = render.hooks.iter().map(|h| h.hook.clone()).collect();
    assert_eq!(hooks, vec![HookPoint::GlobalEnd, HookPoint::ForumDisplayEnd]);
    assert!(render.hooks[0].header_include.is_empty());
}

#[tokio::test]
async fn test_linear_thread_uses_thumbnail_across_page_posts() {
    let config = OpenGraphConfig {
        thread_linear: SurfaceImagePolicy {
            attachment: AttachmentMode::Thumbnail,
            fallback: FallbackMode::Logo,
        },
        ..Default::default()
    };
    let render = helpers::render(config, "thread_linear").await;
    let header = &render.header_include;

    assert_eq!(
        meta_content(header, "og:image"),
        Some("https://forum.example.com/attachment.php?thumbnail=51")
    );
    assert_eq!(meta_content(header, "og:title"), Some("Show us your desk - Acme Forum"));
    assert_eq!(
        meta_content(header, "og:description"),
        Some("&lt;strong&gt;My desk&lt;/strong&gt; after the **** of a move")
    );
    assert_eq!(
        meta_content(header, "og:url"),
        Some("https://forum.example.com/showthread.php?tid=9")
    );
}

#[tokio::test]
async fn test_linear_thread_defaults_to_author_avatar() {
    let render = helpers::render(OpenGraphConfig::default(), "thread_linear").await;
    let header = &render.header_include;

    assert_eq!(meta_content(header, "og:image"), Some("https://cdn.example.com/alice.png"));
    assert_eq!(meta_content(header, "og:image:width"), Some("100"));
    assert_eq!(meta_content(header, "og:image:height"), Some("100"));
}

#[tokio::test]
async fn test_threaded_thread_with_seo_urls() {
    let render = helpers::render(OpenGraphConfig::default(), "thread_threaded").await;
    let header = &render.header_include;

    assert_eq!(
        meta_content(header, "og:url"),
        Some("https://forum.example.com/thread-9-post-31.html?highlight=desk&amp;mode=threaded#pid31")
    );
    assert_eq!(meta_content(header, "og:description"), Some("Nice &amp; tidy"));
    assert_eq!(
        meta_content(header, "og:image"),
        Some("https://forum.example.com/uploads/avatars/avatar_4.png")
    );
    assert_eq!(meta_content(header, "og:image:width"), Some("300"));
    assert_eq!(meta_content(header, "og:image:height"), Some("200"));
}

#[tokio::test]
async fn test_profile_block() {
    let render = helpers::render(OpenGraphConfig::default(), "profile").await;
    let header = &render.header_include;

    assert_eq!(meta_content(header, "og:title"), Some("Profile of alice - Acme Forum"));
    assert_eq!(meta_content(header, "og:description"), Some("alice\nRust &amp; coffee"));
    assert_eq!(
        meta_content(header, "og:url"),
        Some("https://forum.example.com/member.php?action=profile&amp;uid=12")
    );
    assert_eq!(meta_content(header, "og:type"), Some("profile"));
    assert_eq!(meta_content(header, "profile:username"), Some("alice"));
}

#[tokio::test]
async fn test_site_index_with_markers_and_app_id() {
    let config = OpenGraphConfig {
        app_id: "987654".to_string(),
        ..Default::default()
    };
    let render = helpers::render(config, "site_index").await;
    let header = &render.header_include;

    assert!(header.starts_with("\n<!-- Open Graph metas -->"));
    assert!(header.ends_with("\n<!-- /Open Graph metas -->"));
    assert_eq!(meta_content(header, "fb:app_id"), Some("987654"));
    assert_eq!(meta_content(header, "og:title"), Some("Home - Acme Forum"));
    assert_eq!(
        meta_content(header, "og:url"),
        Some("https://forum.example.com/index.php")
    );
    assert_eq!(meta_content(header, "og:description"), Some("Acme Forum"));
}

#[tokio::test]
async fn test_long_description_is_cut() {
    let mut request = helpers::fixture("forum_listing");
    if let ogmeta_core::models::PageContext::ForumListing(ctx) = &mut request.page {
        ctx.forum.description = "x".repeat(300);
    }
    let harness = helpers::harness(OpenGraphConfig::default(), &request).await;
    let render = harness
        .render(&request.page_request())
        .await
        .expect("render");

    let description = meta_content(&render.header_include, "og:description").expect("description");
    assert_eq!(description, format!("{}...", "x".repeat(250)));
}

#[tokio::test]
async fn test_config_file_drives_render() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("tempfile");
    writeln!(
        file,
        r#"
[open_graph]
default_logo = "https://cdn.example.com/og.png"

[open_graph.thread_linear]
attachment = 1
fallback = 0
"#
    )
    .expect("write");

    let config = AppConfig::load(Some(file.path())).expect("config");
    let render = helpers::render(config.open_graph, "thread_linear").await;

    // Full-size mode needs download permission, which the fixture grants.
    assert_eq!(
        meta_content(&render.header_include, "og:image"),
        Some("https://forum.example.com/attachment.php?aid=51")
    );
}

#[tokio::test]
async fn test_render_serializes_for_json_output() {
    let render = helpers::render(OpenGraphConfig::default(), "profile").await;
    let json = serde_json::to_value(&render).expect("serialize");
    assert_eq!(json["hooks"][0]["hook"], "global_end");
    assert_eq!(json["hooks"][1]["hook"], "member_profile_end");
    assert_eq!(json["hooks"][1]["handlers"], 1);
}
