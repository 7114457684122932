//! Configuration management CLI commands.

use std::path::Path;

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use ogmeta_core::config::SurfaceImagePolicy;
use ogmeta_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config_path: Option<&Path>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let source = config_path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());

    match &args.command {
        ConfigCommand::Show => {
            let config = super::load_config(config_path)?;
            output::print_item(&config, format);
        }
        ConfigCommand::Validate => match super::load_config(config_path) {
            Ok(config) => {
                let og = &config.open_graph;
                output::print_success(&format!("Configuration '{}' is valid", source));
                output::print_kv("Enabled", &og.enabled.to_string());
                output::print_kv("Description length", &og.description_max_length.to_string());
                output::print_kv("Image extensions", &og.image_extensions().join(", "));
                let bounds = format!("{} .. {}", og.image_min_dims, og.image_max_dims);
                output::print_kv("Image bounds", &bounds);
                output::print_kv("Threaded view", &describe_policy(&og.thread_threaded));
                output::print_kv("Linear view", &describe_policy(&og.thread_linear));
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {}", e));
                return Err(e);
            }
        },
    }

    Ok(())
}

fn describe_policy(policy: &SurfaceImagePolicy) -> String {
    format!("{:?} / {:?}", policy.attachment, policy.fallback)
}
