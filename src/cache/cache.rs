use sha2::{Digest, Sha256};
use warp::http::{
    header::{HeaderName, HeaderValue, ETAG},
    HeaderMap,
};

use crate::constants::{
    CATALOG_CACHE_HEADERS, ECHO_CACHE_HEADERS, MANIFEST_CACHE_HEADERS, PAGE_CACHE_HEADERS,
    SERVER_METRICS_CACHE_HEADERS,
};
use crate::error::ApiError;

// Caching - edge hints

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CachePolicy {
    Catalog,
    ServerMetrics,
    NoCache,
    Page,
    Manifest,
}

impl CachePolicy {
    pub fn headers(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            CachePolicy::Catalog => CATALOG_CACHE_HEADERS,
            CachePolicy::ServerMetrics => SERVER_METRICS_CACHE_HEADERS,
            CachePolicy::NoCache => ECHO_CACHE_HEADERS,
            CachePolicy::Page => PAGE_CACHE_HEADERS,
            CachePolicy::Manifest => MANIFEST_CACHE_HEADERS,
        }
    }

    pub fn apply(&self, headers: &mut HeaderMap) {
        for &(name, value) in self.headers() {
            headers.insert(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            );
        }
    }
}

// Caching - revalidation

/// Strong entity tag of a response body.
pub fn entity_tag(body: &[u8]) -> String {
    format!("\"{:x}\"", Sha256::digest(body))
}

pub fn set_entity_tag(headers: &mut HeaderMap, etag: &str) -> Result<(), ApiError> {
    let value = HeaderValue::from_str(etag)
        .map_err(|e| ApiError::InternalFault(format!("Invalid etag {etag}: {e}")))?;
    headers.insert(ETAG, value);
    Ok(())
}

/// Whether an `If-None-Match` header value covers `etag`. Weak comparison,
/// as for GET requests.
pub fn is_fresh(if_none_match: Option<&str>, etag: &str) -> bool {
    let Some(header) = if_none_match else {
        return false;
    };
    let etag = etag.trim_start_matches("W/");

    header
        .split(',')
        .map(|candidate| candidate.trim())
        .any(|candidate| candidate == "*" || candidate.trim_start_matches("W/") == etag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_tag_is_quoted_sha256() {
        let etag = entity_tag(b"[]");
        assert!(etag.starts_with('"') && etag.ends_with('"'));
        assert_eq!(etag.len(), 64 + 2);
        assert_eq!(etag, entity_tag(b"[]"));
        assert_ne!(etag, entity_tag(b"{}"));
    }

    #[test]
    fn freshness() {
        let etag = entity_tag(b"body");
        assert!(is_fresh(Some(&etag), &etag));
        assert!(is_fresh(Some(&format!("\"abc\", W/{etag}")), &etag));
        assert!(is_fresh(Some("*"), &etag));
        assert!(!is_fresh(Some("\"abc\""), &etag));
        assert!(!is_fresh(None, &etag));
    }

    #[test]
    fn catalog_policy_headers() {
        let mut headers = HeaderMap::new();
        CachePolicy::Catalog.apply(&mut headers);
        assert_eq!(
            headers["cache-control"],
            "public, s-maxage=60, stale-while-revalidate=300"
        );
        assert_eq!(headers["cdn-cache-control"], "max-age=900");
    }
}
