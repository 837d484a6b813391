//! Statistics gathered during a crawl
//!
//! Standard output carries fact records only, so the summary is reported
//! through the log instead of being printed.

use chrono::{DateTime, Utc};

/// Crawl statistics summary
#[derive(Debug, Clone)]
pub struct CrawlStatistics {
    /// When the crawl loop started
    pub started_at: DateTime<Utc>,

    /// When the crawl loop ended
    pub finished_at: Option<DateTime<Utc>>,

    /// Pages fetched successfully
    pub pages_crawled: u64,

    /// Pages whose fetch failed
    pub pages_failed: u64,

    /// Pages recognised as name detail pages
    pub detail_pages: u64,

    /// Detail pages whose title did not name the subject
    pub malformed_pages: u64,

    /// Facts written to the sink
    pub facts_emitted: u64,

    /// Links admitted to the backlog
    pub links_admitted: u64,
}

impl CrawlStatistics {
    pub fn start() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            pages_crawled: 0,
            pages_failed: 0,
            detail_pages: 0,
            malformed_pages: 0,
            facts_emitted: 0,
            links_admitted: 0,
        }
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Whole seconds between start and finish, if finished
    pub fn duration_seconds(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_seconds())
    }
}

impl Default for CrawlStatistics {
    fn default() -> Self {
        Self::start()
    }
}

/// Logs the statistics summary at info level
pub fn log_statistics(stats: &CrawlStatistics) {
    tracing::info!("=== Crawl Statistics ===");
    tracing::info!("Started: {}", stats.started_at.to_rfc3339());
    if let Some(finished) = stats.finished_at {
        tracing::info!("Finished: {}", finished.to_rfc3339());
    }
    if let Some(seconds) = stats.duration_seconds() {
        tracing::info!("Duration: {}s", seconds);
    }
    tracing::info!("Pages crawled: {}", stats.pages_crawled);
    tracing::info!("Pages failed: {}", stats.pages_failed);
    tracing::info!(
        "Detail pages: {} ({} malformed)",
        stats.detail_pages,
        stats.malformed_pages
    );
    tracing::info!("Facts emitted: {}", stats.facts_emitted);
    tracing::info!("Links admitted: {}", stats.links_admitted);
}
