//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use ogmeta::fixture::RenderRequest;
use ogmeta::harness::{Harness, PageRender};
use ogmeta_core::config::OpenGraphConfig;

/// Path of a JSON fixture under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{name}.json"))
}

/// Load a render request fixture.
pub fn fixture(name: &str) -> RenderRequest {
    RenderRequest::from_file(&fixture_path(name)).expect("Failed to load fixture")
}

/// Start a harness for a fixture's host data.
pub async fn harness(config: OpenGraphConfig, request: &RenderRequest) -> Harness {
    Harness::start(config, request.host.clone().into_services())
        .await
        .expect("Failed to start harness")
}

/// Render a fixture page the way a host would.
pub async fn render(config: OpenGraphConfig, name: &str) -> PageRender {
    let request = fixture(name);
    let harness = harness(config, &request).await;
    harness
        .render(&request.page_request())
        .await
        .expect("Failed to render page")
}

/// Number of meta blocks in a header buffer.
pub fn block_count(header: &str) -> usize {
    header.matches("property=\"og:site_name\"").count()
}

/// Content of the first meta line for `property`.
pub fn meta_content<'a>(header: &'a str, property: &str) -> Option<&'a str> {
    let marker = format!("<meta property=\"{property}\" content=\"");
    let start = header.find(&marker)? + marker.len();
    let end = header[start..].find('"')?;
    Some(&header[start..start + end])
}
