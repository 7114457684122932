//! CLI command definitions and dispatch.

pub mod config;
pub mod render;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use ogmeta_core::config::AppConfig;
use ogmeta_core::error::AppError;

/// ogmeta: Open Graph meta tags for forum pages
#[derive(Debug, Parser)]
#[command(name = "ogmeta", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the metas for a page described by a JSON request
    Render(render::RenderArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config_path = self.config.as_deref();
        match &self.command {
            Commands::Render(args) => render::execute(args, config_path, self.format).await,
            Commands::Config(args) => config::execute(args, config_path, self.format),
        }
    }
}

/// Helper: load configuration from the optional explicit file
pub fn load_config(config_path: Option<&Path>) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}
