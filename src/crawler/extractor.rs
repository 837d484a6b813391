//! Fact extraction from name detail pages
//!
//! A detail page describes exactly one name. Its title carries the name and
//! its info box carries gender and usage, which become `(name, value)` facts.

use crate::config::ExtractConfig;
use crate::crawler::parser::ParsedPage;
use crate::{ConfigError, CrawlError};
use regex::Regex;
use url::Url;

const GENDER_LABEL: &str = "GENDER:";
const USAGE_LABEL: &str = "USAGE:";

/// Title shape of a detail page: "... of the name X" or "... of the surname X"
const TITLE_PATTERN: &str = r"(?i)of the (?:sur)?name (.*)";

/// One output record: a name and one thing known about it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fact {
    /// The name the fact is about
    pub subject: String,

    /// `Male`, `Female`, `Surname`, or a usage tag such as `Greek Mythology`
    pub value: String,
}

impl Fact {
    pub fn new(subject: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            value: value.into(),
        }
    }
}

/// Classifies pages and extracts facts from detail pages
#[derive(Debug, Clone)]
pub struct Extractor {
    detail: Regex,
    surname: Regex,
    title: Regex,
}

impl Extractor {
    /// Compiles the page classification patterns
    pub fn new(config: &ExtractConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            detail: compile(&config.detail_pattern)?,
            surname: compile(&config.surname_pattern)?,
            title: compile(TITLE_PATTERN)?,
        })
    }

    /// Returns true if `url` is a single name's detail page (`.../name/<segment>`)
    ///
    /// Only the path is matched; the query string never makes or breaks a
    /// detail page.
    pub fn is_detail_page(&self, url: &Url) -> bool {
        self.detail.is_match(url.path())
    }

    /// Returns true if `url` belongs to the surname section of the site
    pub fn is_surname_page(&self, url: &Url) -> bool {
        self.surname.is_match(url.as_str())
    }

    /// Extracts every fact from one fetched page
    ///
    /// Pages that are not detail pages yield no facts. A detail page whose
    /// title does not name its subject is malformed and yields an error.
    ///
    /// # Fact order
    ///
    /// 1. `Surname`, for detail pages in the surname section
    /// 2. One fact per info block, in document order:
    ///    - `GENDER:` gives `Male` and/or `Female`
    ///    - `USAGE:` gives one fact per usage tag
    pub fn extract(&self, url: &Url, page: &ParsedPage) -> Result<Vec<Fact>, CrawlError> {
        if !self.is_detail_page(url) {
            return Ok(Vec::new());
        }

        let name = self.subject_name(url, page)?;
        let mut facts = Vec::new();

        if self.is_surname_page(url) {
            facts.push(Fact::new(name.clone(), "Surname"));
        }

        for block in &page.info_blocks {
            match block.label.as_str() {
                GENDER_LABEL => {
                    facts.extend(gender_values(&block.value).map(|g| Fact::new(name.clone(), g)))
                }
                USAGE_LABEL => facts.extend(
                    split_usage(&block.value)
                        .into_iter()
                        .map(|tag| Fact::new(name.clone(), tag)),
                ),
                _ => {}
            }
        }

        Ok(facts)
    }

    /// Reads the name from the page title
    fn subject_name(&self, url: &Url, page: &ParsedPage) -> Result<String, CrawlError> {
        let title = page.title.as_deref().ok_or_else(|| CrawlError::MalformedPage {
            url: url.to_string(),
            reason: "missing title".to_string(),
        })?;

        self.title
            .captures(title)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .ok_or_else(|| CrawlError::MalformedPage {
                url: url.to_string(),
                reason: format!("title does not name the page subject: {:?}", title),
            })
    }
}

/// Maps a gender value to `Male`/`Female`
///
/// Matching is a case-sensitive substring test; both may fire.
pub fn gender_values(value: &str) -> impl Iterator<Item = &'static str> {
    let male = value.contains("Masculine").then_some("Male");
    let female = value.contains("Feminine").then_some("Female");
    male.into_iter().chain(female)
}

/// Splits a usage value into tags on commas and parentheses
///
/// # Examples
///
/// ```
/// use name_crawler::crawler::split_usage;
///
/// assert_eq!(
///     split_usage("Mythology, Greek Mythology (Latinized)"),
///     vec!["Mythology", "Greek Mythology", "Latinized"]
/// );
/// ```
pub fn split_usage(value: &str) -> Vec<String> {
    value
        .split(|c| matches!(c, ',' | '(' | ')'))
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn compile(pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern(format!("'{}': {}", pattern, e)))
}
