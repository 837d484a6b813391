//! URL handling module
//!
//! This module provides URL normalization, link resolution, and the
//! follow/stop pattern rules that decide which links the crawler admits.

mod matcher;
mod normalize;

use crate::config::CrawlerConfig;
use crate::ConfigError;

// Re-export main functions
pub use matcher::PatternSet;
pub use normalize::{normalize_url, resolve_link};

/// Link admission rules: an allow-list of follow patterns and a deny-list of stop patterns
///
/// A URL is admitted iff it matches at least one follow pattern and no stop
/// pattern. Stop patterns only veto; they never admit a URL on their own.
#[derive(Debug, Clone, Default)]
pub struct AdmissionRules {
    follow: PatternSet,
    stop: PatternSet,
}

impl AdmissionRules {
    pub fn new(follow: PatternSet, stop: PatternSet) -> Self {
        Self { follow, stop }
    }

    /// Compiles the follow and stop patterns of the crawler configuration
    pub fn from_config(config: &CrawlerConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            follow: PatternSet::compile(&config.follow_patterns)?,
            stop: PatternSet::compile(&config.stop_patterns)?,
        })
    }

    /// Returns true if `url` passes the pattern rules
    ///
    /// # Examples
    ///
    /// ```
    /// use name_crawler::url::{AdmissionRules, PatternSet};
    ///
    /// let rules = AdmissionRules::new(
    ///     PatternSet::compile(&[r"^http://www.behindthename.com/name/"]).unwrap(),
    ///     PatternSet::compile(&[r"/name/.*?/rating"]).unwrap(),
    /// );
    /// assert!(rules.admits("http://www.behindthename.com/name/john"));
    /// assert!(!rules.admits("http://www.behindthename.com/name/john/rating"));
    /// assert!(!rules.admits("http://www.example.com/name/john"));
    /// ```
    pub fn admits(&self, url: &str) -> bool {
        // Follow first: a URL that no follow pattern wants never reaches the stop list.
        if !self.follow.matches_any(url) {
            return false;
        }

        !self.stop.matches_any(url)
    }
}
