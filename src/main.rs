//! Name-Crawler main entry point
//!
//! This is the command-line interface for the name crawler.

use anyhow::Context;
use clap::Parser;
use name_crawler::config::{load_config_with_hash, Config};
use name_crawler::crawler::{crawl, CrawlMode};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Name-Crawler: harvests name facts from behindthename.com
///
/// Facts are written to standard output as two lines each: the name, then the
/// fact (Male, Female, Surname, or a usage tag). Progress goes to standard error.
#[derive(Parser, Debug)]
#[command(name = "name-crawler")]
#[command(version)]
#[command(about = "Harvests name gender and usage facts", long_about = None)]
struct Cli {
    /// Fetch only these absolute URLs and follow no links (debugging)
    #[arg(value_name = "URL")]
    urls: Vec<String>,

    /// Path to TOML configuration file (built-in site rules if omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Abort on the first fetch or page error instead of skipping the page
    #[arg(long)]
    fail_fast: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if cli.fail_fast {
        config.crawler.fail_fast = true;
    }

    let mode = CrawlMode::from_args(&cli.urls).context("invalid URL argument")?;
    if let CrawlMode::Debug(urls) = &mode {
        tracing::info!("Debug mode: fetching {} URLs, not following links", urls.len());
    }

    crawl(&config, mode).await.context("crawl failed")?;

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout carries fact records only.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("name_crawler=info,warn"),
            1 => EnvFilter::new("name_crawler=debug,info"),
            2 => EnvFilter::new("name_crawler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
