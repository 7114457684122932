//! Page render command.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::fixture::RenderRequest;
use crate::harness::Harness;
use crate::logging::init_logging;
use crate::output::{self, OutputFormat};
use ogmeta_core::error::AppError;

/// Arguments for the render command
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// JSON render request: board settings, page context and host data
    #[arg(short, long)]
    pub request: PathBuf,
}

/// Execute the render command
pub async fn execute(
    args: &RenderArgs,
    config_path: Option<&Path>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    init_logging(&config.logging);

    let request = RenderRequest::from_file(&args.request)?;
    let page = request.page_request();

    let harness = Harness::start(config.open_graph, request.host.into_services()).await?;
    let render = harness.render(&page).await;
    harness.shutdown().await;
    let render = render?;

    match format {
        OutputFormat::Text => println!("{}", render.header_include.trim_start_matches('\n')),
        OutputFormat::Json => output::print_item(&render, format),
    }
    Ok(())
}
