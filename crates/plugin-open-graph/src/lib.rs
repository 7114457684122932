//! # Plugin Open Graph
//!
//! Adds Open Graph (`og:*`) meta tags to forum page headers so that
//! social networks and chat apps can build link previews.
//!
//! The [`MetaResolver`] works out title, URL, description and image for
//! five page kinds (site-wide, forum listing, threaded and linear thread
//! views, member profile) and [`emitter::MetaEmitter`] turns the result
//! into `<meta>` lines. [`OpenGraphPlugin`] wires the resolver to the
//! host's hook points.

pub mod attachment;
pub mod emitter;
pub mod error;
pub mod handlers;
pub mod hooks;
pub mod image;
pub mod plugin;
pub mod text;
pub mod url;

#[cfg(test)]
mod testing;

pub use emitter::{MetaEmitter, ResolvedMeta};
pub use error::OpenGraphError;
pub use handlers::MetaResolver;
pub use hooks::{PLUGIN_ID, PageMetaHook, REQUEST_KEY, dedicated_hook, hooks_for, page_payload};
pub use image::{ImageResolver, ResolvedImage};
pub use plugin::OpenGraphPlugin;
pub use text::{DescriptionFormatter, format_description};
pub use url::{UrlBuilder, build_url};
