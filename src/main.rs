mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use cli::{Cli, Commands, SourceArgs};
use statsboard::config;
use statsboard::fetch::{Fetcher, FileFetcher, HttpFetcher};
use statsboard::generate::generate_keyword_stats;
use statsboard::page::DashboardPage;
use statsboard::Dashboard;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Render { source, output } => {
            let dash = Dashboard::new(make_fetcher(&source)?, config);
            let (keywords, stats) = dash.load_all().await;
            let mut page = DashboardPage::new();
            page.apply(keywords, stats);
            match output {
                Some(path) => {
                    tokio::fs::write(&path, page.to_html())
                        .await
                        .with_context(|| format!("failed to write page: {}", path.display()))?;
                    info!(path = %path.display(), "dashboard page written");
                }
                None => print!("{}", page.to_html()),
            }
        }
        Commands::Keywords { source } => {
            let dash = Dashboard::new(make_fetcher(&source)?, config);
            println!("{}", dash.load_keyword_panel().await.as_str());
        }
        Commands::Stats { source } => {
            let dash = Dashboard::new(make_fetcher(&source)?, config);
            println!("{}", dash.load_stats_panel().await.as_str());
        }
        Commands::Generate { input, output, top } => {
            generate_keyword_stats(&input, &output, top)?;
            println!("keyword stats written to {}", output.display());
        }
    }
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("statsboard=warn")),
        )
        .init();
}

fn make_fetcher(source: &SourceArgs) -> Result<Box<dyn Fetcher>> {
    if let Some(base) = &source.base_url {
        Ok(Box::new(HttpFetcher::new(base.clone())?))
    } else {
        let root = source.root.clone().unwrap_or_else(|| PathBuf::from("."));
        Ok(Box::new(FileFetcher::new(root)))
    }
}
