//! ogmeta: render Open Graph metas for a forum page from the command line.

use clap::Parser;

use ogmeta::commands::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.execute().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
