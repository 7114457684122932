//! # ogmeta-core
//!
//! Core crate for Open Graph metas. Contains configuration schemas,
//! typed identifiers, the records a forum host supplies per page render,
//! the host service ports, and the unified error system.
//!
//! This crate has **no** internal dependencies on other ogmeta crates.

pub mod config;
pub mod error;
pub mod models;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
