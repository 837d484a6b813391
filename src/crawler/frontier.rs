//! Crawl frontier: the backlog of admitted URLs and the record of visited ones
//!
//! This module handles:
//! - Seeding the backlog with start URLs
//! - Handing out the next URL to fetch (oldest first)
//! - Admitting discovered links through the follow/stop rules
//! - Guaranteeing every URL is queued and fetched at most once

use crate::state::PageState;
use crate::url::{resolve_link, AdmissionRules};
use std::collections::{HashSet, VecDeque};
use url::Url;

/// Progress counters reported with every fetched page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// URLs already taken from the backlog (visited or failed)
    pub crawled: usize,

    /// Every URL the frontier has ever accepted
    pub discovered: usize,
}

/// Frontier owns the backlog and the visited/failed sets
///
/// The backlog, visited and failed sets are pairwise disjoint, and once a URL
/// has been taken from the backlog it is never admitted again.
#[derive(Debug)]
pub struct Frontier {
    /// Link admission rules
    rules: AdmissionRules,

    /// Admitted URLs in insertion order
    backlog: VecDeque<Url>,

    /// Membership index for `backlog`
    queued: HashSet<String>,

    /// URLs fetched successfully
    visited: HashSet<String>,

    /// URLs taken from the backlog whose fetch failed
    failed: HashSet<String>,
}

impl Frontier {
    /// Creates an empty frontier governed by `rules`
    pub fn new(rules: AdmissionRules) -> Self {
        Self {
            rules,
            backlog: VecDeque::new(),
            queued: HashSet::new(),
            visited: HashSet::new(),
            failed: HashSet::new(),
        }
    }

    /// Initializes the backlog with the given URLs
    ///
    /// Seeds bypass the admission rules. Fragments are stripped and duplicates
    /// collapsed; seeds already visited are skipped.
    pub fn seed<I>(&mut self, urls: I)
    where
        I: IntoIterator<Item = Url>,
    {
        for mut url in urls {
            url.set_fragment(None);
            if self.is_known(url.as_str()) {
                continue;
            }
            self.enqueue(url);
        }
    }

    /// Removes and returns the oldest URL in the backlog
    ///
    /// Returns None once the backlog is exhausted, which ends the crawl.
    pub fn take_next(&mut self) -> Option<Url> {
        let url = self.backlog.pop_front()?;
        self.queued.remove(url.as_str());
        Some(url)
    }

    /// Records `url` as visited
    ///
    /// Must be called right after `take_next` returns the URL, before any links
    /// from its page are offered.
    pub fn mark_visited(&mut self, url: &Url) {
        self.queued.remove(url.as_str());
        self.failed.remove(url.as_str());
        self.visited.insert(url.as_str().to_string());
    }

    /// Records that fetching `url` failed
    ///
    /// The URL leaves the visited set but is still never admitted again.
    pub fn mark_failed(&mut self, url: &Url) {
        self.queued.remove(url.as_str());
        self.visited.remove(url.as_str());
        self.failed.insert(url.as_str().to_string());
    }

    /// Offers a link found on `base`, returning whether it was newly admitted
    ///
    /// The href is resolved against `base` and its fragment stripped; links that
    /// do not resolve are dropped without error.
    pub fn offer(&mut self, base: &Url, href: &str) -> bool {
        match resolve_link(base, href) {
            Some(url) => self.offer_url(url),
            None => {
                tracing::trace!("Dropping unresolvable link {:?} on {}", href, base);
                false
            }
        }
    }

    /// Offers an absolute URL, returning whether it was newly admitted
    ///
    /// Admitted iff it matches a follow pattern, matches no stop pattern, and is
    /// neither queued nor already taken.
    pub fn offer_url(&mut self, mut url: Url) -> bool {
        url.set_fragment(None);

        if !self.rules.admits(url.as_str()) {
            return false;
        }

        if self.is_known(url.as_str()) {
            return false;
        }

        tracing::info!("BACKLOG << {}", url);
        self.enqueue(url);
        true
    }

    /// Returns what the frontier knows about `url`, if anything
    pub fn state(&self, url: &str) -> Option<PageState> {
        if self.queued.contains(url) {
            Some(PageState::Queued)
        } else if self.visited.contains(url) {
            Some(PageState::Visited)
        } else if self.failed.contains(url) {
            Some(PageState::Failed)
        } else {
            None
        }
    }

    /// Counters for the `CRAWLING (n/m)` progress line
    ///
    /// Call between `take_next` and `mark_visited`: the URL in flight counts
    /// towards `discovered` but not yet towards `crawled`.
    pub fn progress(&self) -> Progress {
        let crawled = self.visited.len() + self.failed.len();
        Progress {
            crawled,
            discovered: crawled + self.backlog.len() + 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.backlog.is_empty()
    }

    pub fn backlog_len(&self) -> usize {
        self.backlog.len()
    }

    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }

    pub fn failed_len(&self) -> usize {
        self.failed.len()
    }

    /// Iterates over the backlog in the order it will be crawled
    pub fn backlog(&self) -> impl Iterator<Item = &Url> {
        self.backlog.iter()
    }

    pub fn visited(&self) -> &HashSet<String> {
        &self.visited
    }

    pub fn failed(&self) -> &HashSet<String> {
        &self.failed
    }

    fn is_known(&self, url: &str) -> bool {
        self.queued.contains(url) || self.visited.contains(url) || self.failed.contains(url)
    }

    fn enqueue(&mut self, url: Url) {
        self.queued.insert(url.as_str().to_string());
        self.backlog.push_back(url);
    }
}
