use serde::Deserialize;

/// Listing pages the crawl starts from when no URLs are given on the command line
pub const DEFAULT_START_URLS: &[&str] = &[
    "http://www.behindthename.com/names/list.php",
    "http://surnames.behindthename.com/names/list",
];

/// Links matching any of these patterns are followed
pub const DEFAULT_FOLLOW_PATTERNS: &[&str] = &[
    r"^http://(www|surnames).behindthename.com/names/",
    r"^http://(www|surnames).behindthename.com/name/",
];

/// Links matching any of these patterns are never followed (overrides the follow list)
pub const DEFAULT_STOP_PATTERNS: &[&str] = &[
    r"/name/.*?/comments",
    r"/name/.*?/images",
    r"/name/.*?/namedays",
    r"/name/.*?/namesakes",
    r"/name/.*?/notes",
    r"/name/.*?/rating",
    r"/name/.*?/references",
    r"/name/.*?/related",
    r"/name/.*?/submitted",
    r"/name/.*?/top",
    r"/name/.*?/top/.*",
    r"/name/.*?/tree",
    r"/name/.*?/websites",
    r"/contribute.php",
];

/// A detail page describes exactly one name: `.../name/<segment>`
///
/// Matched against the URL path only.
pub const DEFAULT_DETAIL_PATTERN: &str = r"/name/[^/]*$";

/// Pages on the surname site get an extra `Surname` fact
pub const DEFAULT_SURNAME_PATTERN: &str = r"surnames";

/// Main configuration structure
///
/// Every section is optional in the TOML file; missing sections and fields
/// fall back to the built-in behindthename.com rules.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,

    #[serde(default, rename = "user-agent")]
    pub user_agent: UserAgentConfig,

    #[serde(default)]
    pub extract: ExtractConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// URLs seeded into the backlog when no URLs are given on the command line
    #[serde(rename = "start-urls")]
    pub start_urls: Vec<String>,

    /// Regex allow-list for discovered links
    #[serde(rename = "follow-patterns")]
    pub follow_patterns: Vec<String>,

    /// Regex deny-list for discovered links
    #[serde(rename = "stop-patterns")]
    pub stop_patterns: Vec<String>,

    /// Abort the whole crawl on the first fetch or page error
    #[serde(rename = "fail-fast")]
    pub fail_fast: bool,

    /// Total time allowed for one page fetch (seconds)
    #[serde(rename = "request-timeout")]
    pub request_timeout: u64,

    /// Time allowed to establish a connection (seconds)
    #[serde(rename = "connect-timeout")]
    pub connect_timeout: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            start_urls: to_strings(DEFAULT_START_URLS),
            follow_patterns: to_strings(DEFAULT_FOLLOW_PATTERNS),
            stop_patterns: to_strings(DEFAULT_STOP_PATTERNS),
            fail_fast: false,
            request_timeout: 30,
            connect_timeout: 10,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: Option<String>,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "NameCrawler".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: None,
        }
    }
}

impl UserAgentConfig {
    /// Formats the header value: `CrawlerName/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        match &self.contact_url {
            Some(url) => format!("{}/{} (+{})", self.crawler_name, self.crawler_version, url),
            None => format!("{}/{}", self.crawler_name, self.crawler_version),
        }
    }
}

/// Page extraction configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Regex a URL path must match to be treated as a name detail page
    #[serde(rename = "detail-pattern")]
    pub detail_pattern: String,

    /// Regex marking detail pages that describe a surname
    #[serde(rename = "surname-pattern")]
    pub surname_pattern: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            detail_pattern: DEFAULT_DETAIL_PATTERN.to_string(),
            surname_pattern: DEFAULT_SURNAME_PATTERN.to_string(),
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
