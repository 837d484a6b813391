//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the main crawl loop that coordinates:
//! - Seeding the frontier from start URLs or explicit debug URLs
//! - Fetching, parsing and fact extraction, one page at a time
//! - Offering discovered links back to the frontier
//! - Deciding whether a page-level failure skips the page or aborts the crawl

use crate::config::Config;
use crate::crawler::extractor::Extractor;
use crate::crawler::fetcher::PageFetcher;
use crate::crawler::frontier::Frontier;
use crate::crawler::parser::parse_html;
use crate::output::{CrawlStatistics, FactSink};
use crate::url::{normalize_url, AdmissionRules};
use crate::{CrawlError, UrlError};
use url::Url;

/// What the crawl starts from and whether it follows links
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrawlMode {
    /// Start from the configured start URLs and follow admitted links
    Crawl,

    /// Fetch exactly these URLs and follow nothing
    Debug(Vec<Url>),
}

impl CrawlMode {
    /// Chooses the mode from command-line URLs: none means a full crawl
    ///
    /// # Example
    ///
    /// ```
    /// use name_crawler::crawler::CrawlMode;
    ///
    /// assert_eq!(CrawlMode::from_args(&[]).unwrap(), CrawlMode::Crawl);
    ///
    /// let mode = CrawlMode::from_args(&["http://www.behindthename.com/name/john".to_string()]).unwrap();
    /// assert!(!mode.follows_links());
    /// ```
    pub fn from_args(urls: &[String]) -> Result<Self, UrlError> {
        if urls.is_empty() {
            return Ok(Self::Crawl);
        }

        let urls = urls
            .iter()
            .map(|u| normalize_url(u))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::Debug(urls))
    }

    pub fn follows_links(&self) -> bool {
        matches!(self, Self::Crawl)
    }
}

/// Main crawler coordinator structure
pub struct Coordinator<F, S> {
    frontier: Frontier,
    extractor: Extractor,
    fetcher: F,
    sink: S,
    follow_links: bool,
    fail_fast: bool,
    stats: CrawlStatistics,
}

impl<F: PageFetcher, S: FactSink> Coordinator<F, S> {
    /// Creates a new coordinator with a seeded frontier
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    /// * `mode` - Full crawl or explicit debug URLs
    /// * `fetcher` - Where page bodies come from
    /// * `sink` - Where facts go
    pub fn new(config: &Config, mode: CrawlMode, fetcher: F, sink: S) -> Result<Self, CrawlError> {
        let rules = AdmissionRules::from_config(&config.crawler)?;
        let extractor = Extractor::new(&config.extract)?;
        let follow_links = mode.follows_links();

        let seeds = match mode {
            CrawlMode::Crawl => config
                .crawler
                .start_urls
                .iter()
                .map(|u| normalize_url(u))
                .collect::<Result<Vec<_>, _>>()?,
            CrawlMode::Debug(urls) => urls,
        };

        let mut frontier = Frontier::new(rules);
        frontier.seed(seeds);
        tracing::debug!("Seeded frontier with {} URLs", frontier.backlog_len());

        Ok(Self {
            frontier,
            extractor,
            fetcher,
            sink,
            follow_links,
            fail_fast: config.crawler.fail_fast,
            stats: CrawlStatistics::start(),
        })
    }

    /// Runs the main crawl loop until the backlog is empty
    ///
    /// Returns an error only for sink failures, or for the first page-level
    /// failure when running fail-fast.
    pub async fn run(&mut self) -> Result<(), CrawlError> {
        tracing::info!(
            "Starting crawl with {} URLs in backlog (following links: {})",
            self.frontier.backlog_len(),
            self.follow_links
        );

        while let Some(url) = self.frontier.take_next() {
            let progress = self.frontier.progress();
            tracing::info!(
                "CRAWLING ({}/{}) {}",
                progress.crawled,
                progress.discovered,
                url
            );

            self.frontier.mark_visited(&url);

            if let Err(e) = self.crawl_page(&url).await {
                self.stats.finish();
                if let Err(flush_err) = self.sink.flush() {
                    tracing::warn!("Failed to flush output: {}", flush_err);
                }
                return Err(e);
            }
        }

        self.stats.finish();
        self.sink.flush()?;

        tracing::info!(
            "Backlog empty, crawl complete: {} pages crawled, {} failed",
            self.frontier.visited_len(),
            self.frontier.failed_len()
        );

        Ok(())
    }

    /// Fetches one page, emits its facts, and offers its links
    async fn crawl_page(&mut self, url: &Url) -> Result<(), CrawlError> {
        let body = match self.fetcher.fetch(url).await {
            Ok(body) => body,
            Err(e) => {
                self.frontier.mark_failed(url);
                self.stats.pages_failed += 1;
                return self.page_failure(e);
            }
        };
        self.stats.pages_crawled += 1;

        let page = parse_html(&body);

        if self.extractor.is_detail_page(url) {
            self.stats.detail_pages += 1;
        }

        match self.extractor.extract(url, &page) {
            Ok(facts) => {
                for fact in &facts {
                    self.sink.emit(fact)?;
                }
                self.stats.facts_emitted += facts.len() as u64;
            }
            Err(e) => {
                self.stats.malformed_pages += 1;
                self.page_failure(e)?;
            }
        }

        if !self.follow_links {
            return Ok(());
        }

        for href in &page.links {
            if self.frontier.offer(url, href) {
                self.stats.links_admitted += 1;
            }
        }

        Ok(())
    }

    /// Skips the page, or aborts when running fail-fast
    ///
    /// Errors that are not about a single page always abort.
    fn page_failure(&self, error: CrawlError) -> Result<(), CrawlError> {
        if self.fail_fast || !error.is_page_level() {
            tracing::error!("Aborting crawl: {}", error);
            return Err(error);
        }

        tracing::warn!("Skipping page: {}", error);
        Ok(())
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn stats(&self) -> &CrawlStatistics {
        &self.stats
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
