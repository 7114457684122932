//! Board-wide settings owned by the host.

use serde::{Deserialize, Serialize};

use crate::types::Dimensions;

/// Host settings that apply to every page of the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSettings {
    /// Base URL of the board, without trailing slash.
    pub url: String,
    /// Board name (`og:site_name`).
    pub name: String,
    /// Whether the configured social app id may be emitted.
    #[serde(default = "default_true")]
    pub use_app_id: bool,
    /// Whether header additions are wrapped in marker comments.
    #[serde(default)]
    pub comment_markers: bool,
    /// Whether attachments are enabled site-wide.
    #[serde(default = "default_true")]
    pub attachments_enabled: bool,
    /// Largest avatar the board allows, if limited.
    #[serde(default)]
    pub avatar_max_dims: Option<Dimensions>,
    /// Logo of the active theme.
    #[serde(default)]
    pub theme_logo: String,
    /// Whether search-engine-friendly URLs are enabled.
    #[serde(default)]
    pub seo_urls: bool,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_limit_accepts_host_string() {
        let json = r#"{
            "url": "https://forum.example.com",
            "name": "Acme Forum",
            "avatar_max_dims": "100x100"
        }"#;
        let board: BoardSettings = serde_json::from_str(json).expect("deserialize");
        assert_eq!(board.avatar_max_dims, Some(Dimensions::new(100, 100)));
        assert!(board.use_app_id);
        assert!(!board.seo_urls);
    }
}
