//! Open Graph meta configuration.
//!
//! These values are fixed at deployment time and never change during a
//! request. The resolver components receive them at construction.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::Dimensions;

/// File extensions always recognised as images.
pub const DEFAULT_IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "gif", "bmp", "png"];

/// Which attachment variant a page surface prefers for `og:image`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "ModeRepr")]
pub enum AttachmentMode {
    /// Never look at attachments.
    #[default]
    None,
    /// Link the full-size attachment.
    Full,
    /// Link the attachment thumbnail.
    Thumbnail,
}

impl AttachmentMode {
    /// Whether the thumbnail variant is requested.
    pub fn wants_thumbnail(self) -> bool {
        self == Self::Thumbnail
    }
}

impl TryFrom<ModeRepr> for AttachmentMode {
    type Error = String;

    fn try_from(raw: ModeRepr) -> Result<Self, Self::Error> {
        match raw {
            ModeRepr::Number(0) => Ok(Self::None),
            ModeRepr::Number(1) => Ok(Self::Full),
            ModeRepr::Number(2) => Ok(Self::Thumbnail),
            ModeRepr::Name(name) => match name.to_ascii_lowercase().as_str() {
                "none" => Ok(Self::None),
                "full" => Ok(Self::Full),
                "thumbnail" => Ok(Self::Thumbnail),
                other => Err(format!("unknown attachment mode '{other}'")),
            },
            ModeRepr::Number(n) => Err(format!("unknown attachment mode {n}")),
        }
    }
}

/// Secondary image source used when no attachment qualifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "ModeRepr")]
pub enum FallbackMode {
    /// The site logo.
    Logo,
    /// The post author's avatar, then the site logo.
    #[default]
    Avatar,
}

impl TryFrom<ModeRepr> for FallbackMode {
    type Error = String;

    fn try_from(raw: ModeRepr) -> Result<Self, Self::Error> {
        match raw {
            ModeRepr::Number(0) => Ok(Self::Logo),
            ModeRepr::Number(1) => Ok(Self::Avatar),
            ModeRepr::Name(name) => match name.to_ascii_lowercase().as_str() {
                "logo" => Ok(Self::Logo),
                "avatar" => Ok(Self::Avatar),
                other => Err(format!("unknown fallback mode '{other}'")),
            },
            ModeRepr::Number(n) => Err(format!("unknown fallback mode {n}")),
        }
    }
}

/// Accepts the numeric (`0/1/2`) and named forms of the image modes.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ModeRepr {
    /// Numeric form.
    Number(u8),
    /// Named form.
    Name(String),
}

/// Image selection policy for one page surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceImagePolicy {
    /// Attachment preference.
    pub attachment: AttachmentMode,
    /// Fallback when no attachment qualifies.
    pub fallback: FallbackMode,
}

/// Configuration of the Open Graph meta plugin.
#[derive(Debug, Clone, Validate, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenGraphConfig {
    /// Whether the plugin registers its hooks at all.
    pub enabled: bool,

    /// Cut-off length for description text, in characters, before the
    /// ellipsis marker.
    #[validate(range(min = 1, max = 10000))]
    pub description_max_length: usize,

    /// Custom logo URL. Empty means the host theme's logo.
    pub default_logo: String,

    /// Custom description. Empty means the board name.
    pub default_description: String,

    /// Social platform application id (`fb:app_id`). Empty disables it.
    pub app_id: String,

    /// Additional image file extensions accepted for attachments.
    pub extra_image_extensions: Vec<String>,

    /// Upper bound used when formatting avatars.
    pub image_max_dims: Dimensions,

    /// Avatars reported smaller than this are not used.
    pub image_min_dims: Dimensions,

    /// Image policy for the threaded thread view.
    pub thread_threaded: SurfaceImagePolicy,

    /// Image policy for the linear thread view.
    pub thread_linear: SurfaceImagePolicy,
}

impl Default for OpenGraphConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            description_max_length: 250,
            default_logo: String::new(),
            default_description: String::new(),
            app_id: String::new(),
            extra_image_extensions: Vec::new(),
            image_max_dims: Dimensions::new(500, 500),
            image_min_dims: Dimensions::new(0, 0),
            thread_threaded: SurfaceImagePolicy::default(),
            thread_linear: SurfaceImagePolicy::default(),
        }
    }
}

impl OpenGraphConfig {
    /// All accepted image extensions, lowercase, without leading dots.
    ///
    /// The built-in set comes first, followed by the configured extras in
    /// order with duplicates and blanks removed.
    pub fn image_extensions(&self) -> Vec<String> {
        let mut extensions: Vec<String> = DEFAULT_IMAGE_EXTENSIONS
            .iter()
            .map(|e| e.to_string())
            .collect();

        for extra in &self.extra_image_extensions {
            let normalized = extra.trim().trim_start_matches('.').to_ascii_lowercase();
            if !normalized.is_empty() && !extensions.contains(&normalized) {
                extensions.push(normalized);
            }
        }

        extensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OpenGraphConfig::default();
        assert!(config.enabled);
        assert_eq!(config.description_max_length, 250);
        assert_eq!(config.image_max_dims, Dimensions::new(500, 500));
        assert_eq!(config.thread_linear.attachment, AttachmentMode::None);
        assert_eq!(config.thread_linear.fallback, FallbackMode::Avatar);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_image_extensions_normalized() {
        let config = OpenGraphConfig {
            extra_image_extensions: vec![
                ".WebP".to_string(),
                "png".to_string(),
                "  ".to_string(),
                "svg".to_string(),
            ],
            ..Default::default()
        };
        assert_eq!(
            config.image_extensions(),
            vec!["jpg", "jpeg", "gif", "bmp", "png", "webp", "svg"]
        );
    }

    #[test]
    fn test_modes_accept_numbers_and_names() {
        let policy: SurfaceImagePolicy =
            serde_json::from_str(r#"{"attachment": 1, "fallback": 0}"#).expect("numeric");
        assert_eq!(policy.attachment, AttachmentMode::Full);
        assert_eq!(policy.fallback, FallbackMode::Logo);

        let policy: SurfaceImagePolicy =
            serde_json::from_str(r#"{"attachment": "thumbnail"}"#).expect("named");
        assert_eq!(policy.attachment, AttachmentMode::Thumbnail);
        assert_eq!(policy.fallback, FallbackMode::Avatar);

        assert!(serde_json::from_str::<SurfaceImagePolicy>(r#"{"attachment": 3}"#).is_err());
        assert!(serde_json::from_str::<SurfaceImagePolicy>(r#"{"fallback": "gravatar"}"#).is_err());
    }

    #[test]
    fn test_modes_serialize_as_names() {
        let json = serde_json::to_string(&AttachmentMode::Thumbnail).expect("serialize");
        assert_eq!(json, r#""thumbnail""#);
    }
}
