use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use url::Url;

/// CLI for loading and rendering the dashboard panels
#[derive(Parser)]
#[command(name = "statsboard")]
#[command(about = "Load keyword and network statistics panels from static assets", long_about = None)]
pub struct Cli {
    /// Optional TOML config with resource paths and display limits
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the static assets are served from.
#[derive(Args)]
pub struct SourceArgs {
    /// Fetch assets over HTTP relative to this base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<Url>,

    /// Read assets from this local directory (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load both panels and emit the assembled dashboard page
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Write the page here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Load and print the keyword panel
    Keywords {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Load and print the network statistics panel
    Stats {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Build keyword_stats.json from a concept export (one comma-separated
    /// concept list per line)
    Generate {
        /// Concept export to read
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output path for the generated JSON
        #[arg(short, long, value_name = "FILE", default_value = "assets/keyword_stats.json")]
        output: PathBuf,

        /// How many keywords to keep
        #[arg(long, value_name = "N", default_value_t = statsboard::generate::DEFAULT_TOP)]
        top: usize,
    },
}
