//! Conditional request evaluation
//!
//! Decides whether the representation a client already holds is still valid,
//! based on `If-None-Match`, `If-Modified-Since` and `Cache-Control`.

use crate::logger;
use chrono::{DateTime, Utc};
use hyper::header::{HeaderName, CACHE_CONTROL, IF_MODIFIED_SINCE, IF_NONE_MATCH};
use hyper::HeaderMap;
use serde::{Deserialize, Serialize};

/// How a multi-token `If-None-Match` list is compared with the response `ETag`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EtagListMatch {
    /// Every listed token must equal the `ETag`
    #[default]
    Every,
    /// At least one listed token must equal the `ETag`
    Any,
}

/// Cache validators sent by the client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestValidators<'a> {
    pub if_none_match: Option<&'a str>,
    pub if_modified_since: Option<&'a str>,
    pub cache_control: Option<&'a str>,
}

impl<'a> RequestValidators<'a> {
    /// Read validators from request headers
    ///
    /// Empty values and values that are not visible ASCII count as absent.
    pub fn from_headers(headers: &'a HeaderMap) -> Self {
        Self {
            if_none_match: header_str(headers, &IF_NONE_MATCH),
            if_modified_since: header_str(headers, &IF_MODIFIED_SINCE),
            cache_control: header_str(headers, &CACHE_CONTROL),
        }
    }

    const fn is_conditional(&self) -> bool {
        self.if_none_match.is_some() || self.if_modified_since.is_some()
    }

    fn forces_revalidation(&self) -> bool {
        self.cache_control.is_some_and(|value| {
            value
                .split(',')
                .any(|directive| directive.trim().eq_ignore_ascii_case("no-cache"))
        })
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &HeaderName) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Check whether the client's cached representation is still fresh
///
/// Each check only applies when both the request header and the matching
/// response validator are present; a check missing its response validator is
/// skipped. The result is fresh when an applicable check confirms it and
/// `Cache-Control: no-cache` did not force revalidation.
///
/// # Arguments
/// * `validators` - Client-sent conditional headers
/// * `etag` - Response `ETag`, if any
/// * `last_modified` - Response modification time, if any
/// * `policy` - Matching rule for multi-token `If-None-Match` lists
///
/// # Examples
/// ```
/// use hyper_send::http::fresh::{is_fresh, EtagListMatch, RequestValidators};
///
/// let validators = RequestValidators {
///     if_none_match: Some("\"abc\""),
///     ..Default::default()
/// };
/// assert!(is_fresh(&validators, Some("\"abc\""), None, EtagListMatch::Every));
/// assert!(!is_fresh(&validators, Some("\"xyz\""), None, EtagListMatch::Every));
/// ```
pub fn is_fresh(
    validators: &RequestValidators<'_>,
    etag: Option<&str>,
    last_modified: Option<DateTime<Utc>>,
    policy: EtagListMatch,
) -> bool {
    if !validators.is_conditional() {
        return false;
    }

    if validators.forces_revalidation() {
        return false;
    }

    if let (Some(if_none_match), Some(etag)) = (validators.if_none_match, etag) {
        if etag_matches(if_none_match, etag, policy) {
            return true;
        }
    }

    if let (Some(since), Some(mtime)) = (validators.if_modified_since, last_modified) {
        return not_modified_since(since, mtime);
    }

    false
}

/// Compare a comma separated `If-None-Match` list against the `ETag`
pub fn etag_matches(if_none_match: &str, etag: &str, policy: EtagListMatch) -> bool {
    let mut tokens = if_none_match.split(',').map(str::trim);
    match policy {
        EtagListMatch::Every => tokens.all(|token| token == etag),
        EtagListMatch::Any => tokens.any(|token| token == etag),
    }
}

/// HTTP dates carry whole seconds, so the comparison ignores sub-second precision
fn not_modified_since(since: &str, mtime: DateTime<Utc>) -> bool {
    match httpdate::parse_http_date(since) {
        Ok(date) => mtime.timestamp() <= DateTime::<Utc>::from(date).timestamp(),
        Err(e) => {
            logger::log_warning(&format!("Ignoring malformed If-Modified-Since {since:?}: {e}"));
            false
        }
    }
}
