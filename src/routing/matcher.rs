//! Path matching primitives.
//!
//! # Responsibilities
//! - Match a path against a plain string prefix (case-sensitive)
//! - Match a path against a compiled regular expression
//!
//! # Design Decisions
//! - Prefix matching is not segment aware: `/login` matches `/login-help`
//! - Patterns are compiled once, when the table is built

use regex::Regex;

/// Trait for matching request paths against a condition.
pub trait PathMatcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Matches the request path prefix.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl PathMatcher for PathPrefixMatcher {
    fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.prefix)
    }
}

/// Matches the request path against a regular expression.
#[derive(Debug, Clone)]
pub struct PathPatternMatcher {
    pattern: Regex,
}

impl PathPatternMatcher {
    /// Compile a new pattern matcher.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl PathMatcher for PathPatternMatcher {
    fn matches(&self, path: &str) -> bool {
        self.pattern.is_match(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_matcher() {
        let matcher = PathPrefixMatcher::new("/api");

        assert!(matcher.matches("/api/v1"));
        assert!(matcher.matches("/api"));
        assert!(!matcher.matches("/images"));
        assert!(!matcher.matches("/API/v1")); // Case sensitive
    }

    #[test]
    fn test_prefix_is_not_segment_aware() {
        let matcher = PathPrefixMatcher::new("/login");
        assert!(matcher.matches("/login-help"));
    }

    #[test]
    fn test_pattern_matcher() {
        let matcher = PathPatternMatcher::new(r"^/blog/.*$").unwrap();

        assert!(matcher.matches("/blog/first-post"));
        assert!(matcher.matches("/blog/"));
        assert!(!matcher.matches("/blog"));
        assert!(!matcher.matches("/news/blog/x"));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(PathPatternMatcher::new("^/broken(").is_err());
    }
}
