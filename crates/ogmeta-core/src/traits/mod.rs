//! Ports implemented by the forum host and consumed by ogmeta.

pub mod host;

pub use host::{
    AttachmentSource, AvatarFormatter, ContentParser, ForumPermissions, FormattedAvatar,
    HostServices, LanguagePack, ParserOptions, PermissionService,
};
