//! Session detection.
//!
//! Authentication lives in an external provider. The gate only needs to
//! know whether a request carries a session, which is what [`SessionProbe`]
//! answers.

use axum::http::{header, HeaderMap};

/// Answers whether a request carries an authenticated session.
pub trait SessionProbe: Send + Sync + std::fmt::Debug {
    fn is_authenticated(&self, headers: &HeaderMap) -> bool;
}

/// Per-request session context attached by the route guard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub authenticated: bool,
}

/// Treats a non-empty session cookie as an authenticated session.
#[derive(Debug, Clone)]
pub struct CookieSessionProbe {
    cookie_name: String,
}

impl CookieSessionProbe {
    pub fn new(cookie_name: impl Into<String>) -> Self {
        Self {
            cookie_name: cookie_name.into(),
        }
    }
}

impl SessionProbe for CookieSessionProbe {
    fn is_authenticated(&self, headers: &HeaderMap) -> bool {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .any(|(name, value)| name == self.cookie_name && !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(cookies: &[&str]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for c in cookies {
            map.append(header::COOKIE, HeaderValue::from_str(c).unwrap());
        }
        map
    }

    #[test]
    fn test_cookie_probe() {
        let probe = CookieSessionProbe::new("sid");

        assert!(probe.is_authenticated(&headers(&["sid=abc"])));
        assert!(probe.is_authenticated(&headers(&["theme=dark; sid=abc; lang=en"])));
        assert!(probe.is_authenticated(&headers(&["theme=dark", "sid=abc"])));
        assert!(!probe.is_authenticated(&headers(&["sid="])));
        assert!(!probe.is_authenticated(&headers(&["sidx=abc"])));
        assert!(!probe.is_authenticated(&HeaderMap::new()));
    }
}
