//! Public base URL resolution.
//!
//! Order: development mode, configured website URL, the request's own
//! `Host` (with `X-Forwarded-Proto`, default https), then localhost.

use axum::http::{header, HeaderMap};

use crate::config::SiteConfig;

pub const DEVELOPMENT_BASE_URL: &str = "http://localhost:3000";

pub fn resolve_base_url(site: &SiteConfig, headers: Option<&HeaderMap>) -> String {
    if site.development {
        return DEVELOPMENT_BASE_URL.to_string();
    }

    if let Some(url) = site.website_url.as_deref().filter(|u| !u.is_empty()) {
        return url.trim_end_matches('/').to_string();
    }

    let from_request = headers.and_then(|headers| {
        let host = headers.get(header::HOST)?.to_str().ok()?;
        let proto = headers
            .get("x-forwarded-proto")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("https");
        Some(format!("{}://{}", proto, host))
    });

    from_request.unwrap_or_else(|| DEVELOPMENT_BASE_URL.to_string())
}
