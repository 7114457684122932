//! Meta tag block assembly.

use std::fmt::Write;

use serde::Serialize;

use ogmeta_core::config::OpenGraphConfig;
use ogmeta_core::models::BoardSettings;

use crate::image::ResolvedImage;
use crate::text::escape_preserving_references;

/// `og:type` used when a page does not name one.
pub const DEFAULT_TYPE: &str = "website";

const MARKER_START: &str = "<!-- Open Graph metas -->";
const MARKER_END: &str = "<!-- /Open Graph metas -->";

/// The resolved meta values for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedMeta {
    /// `og:title`.
    pub title: String,
    /// Canonical page URL.
    pub url: String,
    /// Already escaped and bounded.
    pub description: String,
    /// Absolute image URL.
    pub image: Option<String>,
    /// Explicit `og:type`; see [`ResolvedMeta::og_type`].
    pub og_type: Option<String>,
    /// Additional `(property, content)` pairs, emitted in order.
    pub extra: Vec<(String, String)>,
}

impl ResolvedMeta {
    /// Creates metas with no image, default type and no extras.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: description.into(),
            image: None,
            og_type: None,
            extra: Vec::new(),
        }
    }

    /// Sets the image, adding its size as `og:image:*` properties when known.
    pub fn with_image(mut self, image: ResolvedImage) -> Self {
        if image.url.is_empty() {
            return self;
        }
        if let Some(size) = image.dimensions {
            self = self
                .with_extra("og:image:width", size.width.to_string())
                .with_extra("og:image:height", size.height.to_string());
        }
        self.image = Some(image.url);
        self
    }

    /// Overrides the `og:type`.
    pub fn with_type(mut self, og_type: impl Into<String>) -> Self {
        self.og_type = Some(og_type.into());
        self
    }

    /// Appends an extra property after the standard ones.
    pub fn with_extra(mut self, property: impl Into<String>, content: impl Into<String>) -> Self {
        self.extra.push((property.into(), content.into()));
        self
    }

    /// The `og:type` value, defaulting to [`DEFAULT_TYPE`].
    pub fn og_type(&self) -> &str {
        self.og_type.as_deref().unwrap_or(DEFAULT_TYPE)
    }
}

/// Turns a [`ResolvedMeta`] into `<meta>` lines for the page header.
#[derive(Debug, Clone)]
pub struct MetaEmitter {
    site_name: String,
    app_id: Option<String>,
    markers: bool,
}

impl MetaEmitter {
    /// The app id is only kept when the board allows it and one is set.
    pub fn new(board: &BoardSettings, config: &OpenGraphConfig) -> Self {
        let app_id = config.app_id.trim();
        Self {
            site_name: board.name.clone(),
            app_id: (board.use_app_id && !app_id.is_empty()).then(|| app_id.to_string()),
            markers: board.comment_markers,
        }
    }

    /// Renders the block. Each line starts with a newline so the block
    /// can be appended to an existing header buffer as is.
    pub fn emit(&self, meta: &ResolvedMeta) -> String {
        let mut out = String::new();
        if self.markers {
            out.push('\n');
            out.push_str(MARKER_START);
        }

        push_meta(&mut out, "og:site_name", &self.site_name);
        if let Some(app_id) = &self.app_id {
            push_meta(&mut out, "fb:app_id", app_id);
        }

        let fields = [
            ("og:title", meta.title.as_str()),
            ("og:url", meta.url.as_str()),
            ("og:description", meta.description.as_str()),
            ("og:image", meta.image.as_deref().unwrap_or_default()),
            ("og:type", meta.og_type()),
        ];
        for (property, content) in fields {
            if !content.is_empty() {
                push_meta(&mut out, property, content);
            }
        }
        for (property, content) in &meta.extra {
            if !content.is_empty() {
                push_meta(&mut out, property, content);
            }
        }

        if self.markers {
            out.push('\n');
            out.push_str(MARKER_END);
        }
        out
    }
}

fn push_meta(out: &mut String, property: &str, content: &str) {
    // Writing to a String cannot fail.
    let _ = write!(
        out,
        "\n<meta property=\"{}\" content=\"{}\" />",
        escape_preserving_references(property),
        escape_preserving_references(content)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::board;
    use ogmeta_core::types::Dimensions;

    fn meta() -> ResolvedMeta {
        ResolvedMeta::new(
            "News - Acme Forum",
            "https://forum.example.com/forumdisplay.php?fid=2&page=2",
            "Latest &amp; greatest",
        )
    }

    #[test]
    fn test_line_order_and_default_type() {
        let config = OpenGraphConfig {
            app_id: "12345".to_string(),
            ..Default::default()
        };
        let emitter = MetaEmitter::new(&board(), &config);
        let block = emitter.emit(&meta().with_image(ResolvedImage {
            url: "https://cdn.example.com/logo.png".to_string(),
            dimensions: None,
        }));
        assert_eq!(
            block,
            concat!(
                "\n<meta property=\"og:site_name\" content=\"Acme Forum\" />",
                "\n<meta property=\"fb:app_id\" content=\"12345\" />",
                "\n<meta property=\"og:title\" content=\"News - Acme Forum\" />",
                "\n<meta property=\"og:url\" content=\"https://forum.example.com/forumdisplay.php?fid=2&amp;page=2\" />",
                "\n<meta property=\"og:description\" content=\"Latest &amp; greatest\" />",
                "\n<meta property=\"og:image\" content=\"https://cdn.example.com/logo.png\" />",
                "\n<meta property=\"og:type\" content=\"website\" />",
            )
        );
    }

    #[test]
    fn test_app_id_requires_board_flag() {
        let config = OpenGraphConfig {
            app_id: "12345".to_string(),
            ..Default::default()
        };
        let mut board = board();
        board.use_app_id = false;
        let block = MetaEmitter::new(&board, &config).emit(&meta());
        assert!(!block.contains("fb:app_id"));
    }

    #[test]
    fn test_empty_fields_are_omitted() {
        let emitter = MetaEmitter::new(&board(), &OpenGraphConfig::default());
        let block = emitter.emit(&ResolvedMeta::new("T", "", ""));
        assert!(!block.contains("og:url"));
        assert!(!block.contains("og:description"));
        assert!(!block.contains("og:image"));
        assert!(!block.contains("fb:app_id"));
        assert!(block.contains("og:site_name"));
    }

    #[test]
    fn test_extras_follow_type_in_order() {
        let emitter = MetaEmitter::new(&board(), &OpenGraphConfig::default());
        let meta = meta()
            .with_type("profile")
            .with_image(ResolvedImage {
                url: "https://cdn.example.com/a.png".to_string(),
                dimensions: Some(Dimensions::new(120, 90)),
            })
            .with_extra("profile:username", "alice");
        let block = emitter.emit(&meta);
        let type_at = block.find("og:type\" content=\"profile").expect("type");
        let width_at = block.find("og:image:width\" content=\"120").expect("width");
        let height_at = block.find("og:image:height\" content=\"90").expect("height");
        let user_at = block.find("profile:username\" content=\"alice").expect("user");
        assert!(type_at < width_at && width_at < height_at && height_at < user_at);
    }

    #[test]
    fn test_comment_markers_wrap_block() {
        let mut board = board();
        board.comment_markers = true;
        let block = MetaEmitter::new(&board, &OpenGraphConfig::default()).emit(&meta());
        assert!(block.starts_with("\n<!-- Open Graph metas -->\n<meta"));
        assert!(block.ends_with("/>\n<!-- /Open Graph metas -->"));
    }

    #[test]
    fn test_empty_image_is_ignored() {
        let meta = meta().with_image(ResolvedImage::default());
        assert_eq!(meta.image, None);
        assert!(meta.extra.is_empty());
    }
}
