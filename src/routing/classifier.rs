//! Public/protected route classification.
//!
//! # Responsibilities
//! - Store compiled public prefixes, public patterns and protected prefixes
//! - Answer `is_public` / `is_protected` for a request path
//! - Resolve both answers into a single [`RouteAccess`]
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan per table (acceptable for typical route counts)
//! - The two predicates are independent; a path may satisfy both
//! - `classify` gives protected precedence over public

use serde::Serialize;

use crate::config::RoutesConfig;
use crate::routing::matcher::{PathMatcher, PathPatternMatcher, PathPrefixMatcher};

/// Access class of a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteAccess {
    /// Requires an authenticated session.
    Protected,
    /// Open to anonymous visitors.
    Public,
    /// Listed in no table; the caller applies its default policy.
    Unlisted,
}

impl RouteAccess {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteAccess::Protected => "protected",
            RouteAccess::Public => "public",
            RouteAccess::Unlisted => "unlisted",
        }
    }
}

/// Compiled route tables.
#[derive(Debug)]
pub struct RouteTable {
    public_prefixes: Vec<PathPrefixMatcher>,
    public_patterns: Vec<PathPatternMatcher>,
    protected_prefixes: Vec<PathPrefixMatcher>,
}

impl RouteTable {
    /// Build a table from raw prefixes and patterns.
    pub fn new<P, R, Q>(public_prefixes: P, public_patterns: R, protected_prefixes: Q) -> Result<Self, regex::Error>
    where
        P: IntoIterator,
        P::Item: Into<String>,
        R: IntoIterator,
        R::Item: AsRef<str>,
        Q: IntoIterator,
        Q::Item: Into<String>,
    {
        let public_patterns = public_patterns
            .into_iter()
            .map(|p| PathPatternMatcher::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            public_prefixes: public_prefixes.into_iter().map(PathPrefixMatcher::new).collect(),
            public_patterns,
            protected_prefixes: protected_prefixes.into_iter().map(PathPrefixMatcher::new).collect(),
        })
    }

    /// Compile the tables from configuration.
    pub fn from_config(config: &RoutesConfig) -> Result<Self, regex::Error> {
        let table = Self::new(
            config.public_prefixes.iter().cloned(),
            config.public_patterns.iter(),
            config.protected_prefixes.iter().cloned(),
        )?;

        tracing::debug!(
            public_prefixes = table.public_prefixes.len(),
            public_patterns = table.public_patterns.len(),
            protected_prefixes = table.protected_prefixes.len(),
            "Route table compiled"
        );

        Ok(table)
    }

    /// True if the path starts with a public prefix or matches a public pattern.
    pub fn is_public(&self, path: &str) -> bool {
        self.public_prefixes.iter().any(|m| m.matches(path))
            || self.public_patterns.iter().any(|m| m.matches(path))
    }

    /// True if the path starts with a protected prefix.
    pub fn is_protected(&self, path: &str) -> bool {
        self.protected_prefixes.iter().any(|m| m.matches(path))
    }

    /// Resolve both predicates. Protected wins over public.
    pub fn classify(&self, path: &str) -> RouteAccess {
        if self.is_protected(path) {
            RouteAccess::Protected
        } else if self.is_public(path) {
            RouteAccess::Public
        } else {
            RouteAccess::Unlisted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::new(
            ["/login", "/about", "/api/public"],
            [r"^/blog/.*$", r"^/public/.*$"],
            ["/dashboard", "/api/protected"],
        )
        .unwrap()
    }

    #[test]
    fn test_public_prefixes() {
        let t = table();
        assert!(t.is_public("/login"));
        assert!(t.is_public("/about/team"));
        assert!(t.is_public("/api/public/dates"));
        assert!(!t.is_public("/dashboard"));
    }

    #[test]
    fn test_public_patterns_without_prefix() {
        let t = table();
        assert!(t.is_public("/blog/hello"));
        assert!(t.is_public("/public/logo.png"));
        assert!(!t.is_public("/blog"));
    }

    #[test]
    fn test_prefix_ambiguity_preserved() {
        assert!(table().is_public("/login-help"));
    }

    #[test]
    fn test_protected() {
        let t = table();
        assert!(t.is_protected("/dashboard"));
        assert!(t.is_protected("/dashboard/stats"));
        assert!(t.is_protected("/api/protected/menu"));
        assert!(!t.is_protected("/about"));
    }

    #[test]
    fn test_classify_precedence() {
        let t = RouteTable::new(["/"], Vec::<String>::new(), ["/private"]).unwrap();

        assert!(t.is_public("/private/x"));
        assert!(t.is_protected("/private/x"));
        assert_eq!(t.classify("/private/x"), RouteAccess::Protected);
        assert_eq!(t.classify("/anything"), RouteAccess::Public);
    }

    #[test]
    fn test_classify_unlisted() {
        assert_eq!(table().classify("/reports"), RouteAccess::Unlisted);
    }

    #[test]
    fn test_default_config_tables() {
        let t = RouteTable::from_config(&RoutesConfig::default()).unwrap();

        assert_eq!(t.classify("/"), RouteAccess::Public);
        assert_eq!(t.classify("/login"), RouteAccess::Public);
        assert_eq!(t.classify("/private"), RouteAccess::Protected);
        assert_eq!(t.classify("/settings/profile"), RouteAccess::Protected);
        assert_eq!(t.classify("/api/public/dates/display"), RouteAccess::Public);
    }
}
