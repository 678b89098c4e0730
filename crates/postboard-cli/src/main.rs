//! postboard - browse blog posts from a JSON API in the terminal

use anyhow::Result;
use clap::Parser as _;
use postboard_cli::cli::Cli;
use postboard_cli::handlers;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    handlers::handle_interactive(cli).await?;

    Ok(())
}
