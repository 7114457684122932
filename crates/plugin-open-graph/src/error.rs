//! Error type for the Open Graph plugin.
//!
//! Meta resolution itself never fails. These errors only arise at the
//! plugin edges (configuration and hook payloads) and map onto
//! `ogmeta_core::error::AppError`.

use ogmeta_core::error::AppError;
use ogmeta_core::models::PageKind;
use thiserror::Error;

/// Errors raised at the Open Graph plugin boundary.
#[derive(Debug, Error)]
pub enum OpenGraphError {
    /// The plugin configuration failed validation.
    #[error("Invalid Open Graph configuration: {0}")]
    InvalidConfig(#[from] validator::ValidationErrors),

    /// A hook fired without the page request in its payload.
    #[error("Hook '{hook}' fired without a page request")]
    MissingRequest {
        /// Hook point name.
        hook: String,
    },

    /// The page request in the payload could not be decoded.
    #[error("Hook '{hook}' carried an undecodable page request: {reason}")]
    Decode {
        /// Hook point name.
        hook: String,
        /// Decoder message.
        reason: String,
    },

    /// A dedicated hook fired with a context for another page kind.
    #[error("Hook '{hook}' cannot render a {kind} page")]
    PageMismatch {
        /// Hook point name.
        hook: String,
        /// Page kind found in the request.
        kind: PageKind,
    },
}

impl From<OpenGraphError> for AppError {
    fn from(err: OpenGraphError) -> Self {
        match &err {
            OpenGraphError::InvalidConfig(_) => AppError::configuration(err.to_string()),
            OpenGraphError::MissingRequest { .. }
            | OpenGraphError::Decode { .. }
            | OpenGraphError::PageMismatch { .. } => AppError::plugin(err.to_string()),
        }
    }
}
