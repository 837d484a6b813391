//! Configuration module
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Running without a configuration file uses `Config::default()`, which carries
//! the built-in behindthename.com crawl rules.
//!
//! # Example
//!
//! ```no_run
//! use name_crawler::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawler.toml")).unwrap();
//! println!("Starting from {} URLs", config.crawler.start_urls.len());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, ExtractConfig, UserAgentConfig, DEFAULT_DETAIL_PATTERN,
    DEFAULT_FOLLOW_PATTERNS, DEFAULT_START_URLS, DEFAULT_STOP_PATTERNS, DEFAULT_SURNAME_PATTERN,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
