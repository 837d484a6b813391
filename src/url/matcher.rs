use crate::ConfigError;
use regex::Regex;

/// An ordered list of compiled URL patterns
///
/// Patterns are unanchored regular expressions searched against the full URL
/// string; anchor them with `^` or `$` where position matters.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    /// Compiles every pattern, failing on the first invalid one
    ///
    /// # Examples
    ///
    /// ```
    /// use name_crawler::url::PatternSet;
    ///
    /// let set = PatternSet::compile(&[r"/name/.*?/comments"]).unwrap();
    /// assert!(set.matches_any("http://www.behindthename.com/name/john/comments"));
    /// assert!(!set.matches_any("http://www.behindthename.com/name/john"));
    /// ```
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ConfigError> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Regex::new(p.as_ref()).map_err(|e| {
                    ConfigError::InvalidPattern(format!("'{}': {}", p.as_ref(), e))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    /// Returns true if at least one pattern matches `candidate`
    pub fn matches_any(&self, candidate: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_any() {
        let set = PatternSet::compile(&[
            r"^http://(www|surnames).behindthename.com/names/",
            r"^http://(www|surnames).behindthename.com/name/",
        ])
        .unwrap();

        assert!(set.matches_any("http://www.behindthename.com/names/list.php"));
        assert!(set.matches_any("http://surnames.behindthename.com/name/smith"));
        assert!(!set.matches_any("http://www.behindthename.com/contribute.php"));
        assert!(!set.matches_any("https://www.behindthename.com/name/john"));
    }

    #[test]
    fn test_unanchored_search() {
        let set = PatternSet::compile(&[r"/contribute.php"]).unwrap();
        assert!(set.matches_any("http://www.behindthename.com/contribute.php?id=4"));
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        let set = PatternSet::default();
        assert!(!set.matches_any("http://www.behindthename.com/"));
    }

    #[test]
    fn test_invalid_pattern() {
        let result = PatternSet::compile(&["(unclosed"]);
        assert!(matches!(result.unwrap_err(), ConfigError::InvalidPattern(_)));
    }

    #[test]
    fn test_any_of_several() {
        let set = PatternSet::compile(&["/a$", "/b$", "/c$"]).unwrap();
        assert!(set.matches_any("http://www.behindthename.com/c"));
        assert!(!set.matches_any("http://www.behindthename.com/d"));
    }
}
