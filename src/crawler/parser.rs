//! HTML parser for name pages
//!
//! This module turns a fetched HTML body into the handful of things the
//! crawler cares about:
//! - Page title
//! - Labeled info blocks (`GENDER:`, `USAGE:`, ...)
//! - Raw `href` values of every anchor, unresolved

use scraper::{ElementRef, Html, Selector};

/// A `(label, value)` pair scraped from the name info box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoBlock {
    /// Label text, e.g. `GENDER:`
    pub label: String,

    /// Value text, e.g. `Masculine`
    pub value: String,
}

impl InfoBlock {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default)]
pub struct ParsedPage {
    /// The page title (from <title> tag)
    pub title: Option<String>,

    /// Info blocks in document order
    pub info_blocks: Vec<InfoBlock>,

    /// `href` of every anchor in document order, as written in the page
    pub links: Vec<String>,
}

/// Parses HTML content into a `ParsedPage`
///
/// The name info box has this shape; the label and value are read from the
/// nested `.namesub` and `.info` elements of each block:
///
/// ```html
/// <div class="nameinfo">
///   <div class="namesub"><span class="namesub">GENDER:</span><span class="info">Masculine</span></div>
///   <div class="namesub"><span class="namesub">USAGE:</span><span class="info">English</span></div>
/// </div>
/// ```
///
/// # Example
///
/// ```
/// use name_crawler::crawler::parse_html;
///
/// let html = r#"<html><head><title>Meaning of the name John</title></head>
///     <body><a href="/name/mary">Mary</a></body></html>"#;
/// let parsed = parse_html(html);
/// assert_eq!(parsed.title.as_deref(), Some("Meaning of the name John"));
/// assert_eq!(parsed.links, vec!["/name/mary".to_string()]);
/// ```
pub fn parse_html(html: &str) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        title: extract_title(&document),
        info_blocks: extract_info_blocks(&document),
        links: extract_links(&document),
    }
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extracts the labeled blocks of the name info box
fn extract_info_blocks(document: &Html) -> Vec<InfoBlock> {
    let (Ok(block_selector), Ok(label_selector), Ok(value_selector)) = (
        Selector::parse(".nameinfo > .namesub"),
        Selector::parse(".namesub"),
        Selector::parse(".info"),
    ) else {
        return Vec::new();
    };

    document
        .select(&block_selector)
        .map(|block| InfoBlock {
            label: nested_text(block, &label_selector),
            value: nested_text(block, &value_selector),
        })
        .collect()
}

/// Concatenated, trimmed text of the descendants of `parent` matching `selector`
fn nested_text(parent: ElementRef<'_>, selector: &Selector) -> String {
    // The block itself carries `.namesub`; only nested matches count.
    parent
        .select(selector)
        .filter(|element| element.id() != parent.id())
        .flat_map(|element| element.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Extracts the raw href of every anchor
fn extract_links(document: &Html) -> Vec<String> {
    let Ok(a_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&a_selector)
        .filter_map(|element| element.value().attr("href"))
        .map(ToString::to_string)
        .collect()
}
