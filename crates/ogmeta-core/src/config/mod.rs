//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Every field carries a default, so an empty file is valid.

pub mod logging;
pub mod open_graph;

use std::path::Path;

use serde::{Deserialize, Serialize};
use validator::Validate;

pub use self::logging::LoggingConfig;
pub use self::open_graph::{AttachmentMode, FallbackMode, OpenGraphConfig, SurfaceImagePolicy};

use crate::error::AppError;

/// Root application configuration.
///
/// Top-level deserialization target for the merged configuration sources
/// (`config/default.toml`, an explicit file, then `OGMETA__*` variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Open Graph meta settings.
    pub open_graph: OpenGraphConfig,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// Merges the optional `config/default` file, the explicit file at
    /// `path` (required when given) and environment variables prefixed
    /// with `OGMETA`, then validates the result.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        Self::load_with_env(path, Self::environment())
    }

    /// `OGMETA__`-prefixed variables with `__` separating nested keys
    /// (`OGMETA__OPEN_GRAPH__DESCRIPTION_MAX_LENGTH`).
    fn environment() -> config::Environment {
        config::Environment::with_prefix("OGMETA")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with_env(path: Option<&Path>, env: config::Environment) -> Result<Self, AppError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(env)
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let app: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        app.validate()?;

        tracing::debug!(
            path = ?path,
            description_max_length = app.open_graph.description_max_length,
            "Configuration loaded"
        );
        Ok(app)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), AppError> {
        self.open_graph.validate()?;
        Ok(())
    }
}
