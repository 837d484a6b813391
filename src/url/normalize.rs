use crate::UrlError;
use url::Url;

/// Normalizes an absolute URL into the form the frontier uses as identity
///
/// # Normalization Steps
///
/// 1. Parse the URL; reject if malformed
/// 2. Reject anything that is not HTTP or HTTPS
/// 3. Remove fragment (everything after #)
///
/// Host case and an empty path are normalized by the `url` crate itself
/// (`HTTP://Example.COM` becomes `http://example.com/`). Query strings are kept
/// verbatim because listing pages are paginated through them.
///
/// # Examples
///
/// ```
/// use name_crawler::url::normalize_url;
///
/// let url = normalize_url("http://www.behindthename.com/name/john#top").unwrap();
/// assert_eq!(url.as_str(), "http://www.behindthename.com/name/john");
/// ```
pub fn normalize_url(url_str: &str) -> Result<Url, UrlError> {
    let mut url = Url::parse(url_str.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    if !is_http(&url) {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    url.set_fragment(None);
    Ok(url)
}

/// Resolves a link href against the page it was found on
///
/// Returns None if the link should be dropped:
/// - empty hrefs
/// - hrefs that do not resolve against `base_url`
/// - non-HTTP(S) URLs after resolution (`mailto:`, `javascript:`, ...)
///
/// The fragment of the resolved URL is always stripped.
pub fn resolve_link(base_url: &Url, href: &str) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    let mut absolute = base_url.join(href).ok()?;
    if !is_http(&absolute) {
        return None;
    }

    absolute.set_fragment(None);
    Some(absolute)
}

fn is_http(url: &Url) -> bool {
    url.scheme() == "http" || url.scheme() == "https"
}
