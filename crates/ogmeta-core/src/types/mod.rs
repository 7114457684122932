//! Core type definitions used across the ogmeta workspace.

pub mod dimensions;
pub mod id;

pub use dimensions::Dimensions;
pub use id::*;
