use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the post board client
#[derive(Debug, Parser)]
#[command(name = "postboard")]
#[command(about = "Browse, search and filter blog posts in the terminal")]
#[command(version)]
pub struct Cli {
    /// Config file to read instead of ~/.postboard/config.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// API base URL, overriding the config file
    #[arg(long)]
    pub base_url: Option<String>,

    /// Debug log location, instead of ~/.postboard/debug.log
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
