//! Crawler module for fetching name pages and extracting facts
//!
//! This module contains the core crawling logic, including:
//! - The URL frontier (backlog, visited set, link admission)
//! - HTTP fetching
//! - HTML parsing and fact extraction
//! - Overall crawl coordination

mod coordinator;
mod extractor;
mod fetcher;
mod frontier;
mod parser;

pub use coordinator::{CrawlMode, Coordinator};
pub use extractor::{gender_values, split_usage, Extractor, Fact};
pub use fetcher::{build_http_client, fetch_url, HttpFetcher, PageFetcher};
pub use frontier::{Frontier, Progress};
pub use parser::{parse_html, InfoBlock, ParsedPage};

use crate::config::Config;
use crate::output::{log_statistics, CrawlStatistics, LineSink};
use crate::CrawlError;

/// Runs a complete crawl, writing facts to standard output
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client
/// 2. Seed the frontier from `mode`
/// 3. Fetch pages until the backlog is empty, writing facts as they are found
/// 4. Log the crawl statistics
///
/// # Example
///
/// ```no_run
/// use name_crawler::config::Config;
/// use name_crawler::crawler::{crawl, CrawlMode};
///
/// # async fn example() -> Result<(), name_crawler::CrawlError> {
/// let stats = crawl(&Config::default(), CrawlMode::Crawl).await?;
/// println!("{} facts", stats.facts_emitted);
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: &Config, mode: CrawlMode) -> Result<CrawlStatistics, CrawlError> {
    let fetcher = HttpFetcher::from_config(config)?;
    let mut coordinator = Coordinator::new(config, mode, fetcher, LineSink::stdout())?;

    let result = coordinator.run().await;
    log_statistics(coordinator.stats());

    result.map(|()| coordinator.stats().clone())
}
