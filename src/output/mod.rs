//! Output module for fact records and crawl statistics
//!
//! This module handles:
//! - Writing fact records in the two-line `name\nvalue` format
//! - Recording and reporting crawl statistics

pub mod stats;
mod traits;

pub use stats::{log_statistics, CrawlStatistics};
pub use traits::{FactSink, LineSink, MemorySink};
