//! HTTP response building module
//!
//! Assembles the final response once the caller-facing layer has decided
//! between a full response and `304 Not Modified`.

use crate::error::{BoxError, Result, SendError};
use chrono::{DateTime, Utc};
use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Empty, Full};
use hyper::body::{Body, Bytes};
use hyper::header::{
    HeaderName, HeaderValue, CONTENT_ENCODING, CONTENT_LANGUAGE, CONTENT_LENGTH, CONTENT_RANGE,
    CONTENT_TYPE, ETAG, LAST_MODIFIED,
};
use hyper::{HeaderMap, Response};

/// Body type of every response produced by this crate
pub type SendBody = BoxBody<Bytes, BoxError>;

/// Validator headers, emitted on both full and 304 responses
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheHeaders<'a> {
    pub etag: Option<&'a str>,
    pub last_modified: Option<DateTime<Utc>>,
}

/// Content description of a full response
pub struct Content<'a> {
    pub content_type: &'a str,
    pub length: Option<u64>,
    /// `None` for HEAD requests
    pub body: Option<SendBody>,
}

pub fn empty_body() -> SendBody {
    Empty::<Bytes>::new().map_err(|never| match never {}).boxed()
}

pub fn full_body(data: impl Into<Bytes>) -> SendBody {
    Full::new(data.into()).map_err(|never| match never {}).boxed()
}

/// Box a caller-provided body without reading it
pub fn stream_body<B>(body: B) -> SendBody
where
    B: Body<Data = Bytes> + Send + Sync + 'static,
    B::Error: Into<BoxError>,
{
    body.map_err(Into::into).boxed()
}

/// Format a timestamp as an HTTP date, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`
pub fn format_http_date(date: DateTime<Utc>) -> String {
    date.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Build 304 Not Modified response
///
/// Representation headers supplied by the caller are dropped; the client
/// already holds the representation.
pub fn build_304_response(
    mut headers: HeaderMap,
    cache: &CacheHeaders<'_>,
) -> Result<Response<SendBody>> {
    let representation: [HeaderName; 5] = [
        CONTENT_TYPE,
        CONTENT_LENGTH,
        CONTENT_ENCODING,
        CONTENT_LANGUAGE,
        CONTENT_RANGE,
    ];
    for name in representation {
        headers.remove(name);
    }
    set_cache_headers(&mut headers, cache)?;

    assemble(304, headers, empty_body())
}

/// Build full response with content and validator headers
pub fn build_content_response(
    status: u16,
    mut headers: HeaderMap,
    cache: &CacheHeaders<'_>,
    content: Content<'_>,
) -> Result<Response<SendBody>> {
    headers.insert(
        CONTENT_TYPE,
        header_value("Content-Type", content.content_type)?,
    );
    match content.length {
        Some(length) => {
            headers.insert(CONTENT_LENGTH, HeaderValue::from(length));
        }
        None => {
            headers.remove(CONTENT_LENGTH);
        }
    }
    set_cache_headers(&mut headers, cache)?;

    assemble(status, headers, content.body.unwrap_or_else(empty_body))
}

fn set_cache_headers(headers: &mut HeaderMap, cache: &CacheHeaders<'_>) -> Result<()> {
    if let Some(etag) = cache.etag {
        headers.insert(ETAG, header_value("ETag", etag)?);
    }
    if let Some(mtime) = cache.last_modified {
        headers.insert(
            LAST_MODIFIED,
            header_value("Last-Modified", &format_http_date(mtime))?,
        );
    }
    Ok(())
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| SendError::InvalidHeaderValue {
        name,
        value: value.to_string(),
    })
}

fn assemble(status: u16, headers: HeaderMap, body: SendBody) -> Result<Response<SendBody>> {
    let mut response = Response::builder().status(status).body(body)?;
    *response.headers_mut() = headers;
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn mtime() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1994, 11, 6, 8, 49, 37).unwrap()
    }

    #[test]
    fn test_format_http_date() {
        assert_eq!(format_http_date(mtime()), "Sun, 06 Nov 1994 08:49:37 GMT");
    }

    #[test]
    fn test_304_drops_content_headers() {
        let mut extra = HeaderMap::new();
        extra.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        extra.insert(CONTENT_LENGTH, HeaderValue::from(5u64));
        extra.insert(CONTENT_ENCODING, HeaderValue::from_static("gzip"));
        extra.insert(CONTENT_LANGUAGE, HeaderValue::from_static("en"));
        extra.insert(CONTENT_RANGE, HeaderValue::from_static("bytes 0-4/5"));
        extra.insert("x-request-id", HeaderValue::from_static("abc"));

        let cache = CacheHeaders {
            etag: Some("\"tag\""),
            last_modified: Some(mtime()),
        };
        let response = build_304_response(extra, &cache).unwrap();

        assert_eq!(response.status(), 304);
        assert!(response.headers().get(CONTENT_TYPE).is_none());
        assert!(response.headers().get(CONTENT_LENGTH).is_none());
        assert!(response.headers().get(CONTENT_ENCODING).is_none());
        assert!(response.headers().get(CONTENT_LANGUAGE).is_none());
        assert!(response.headers().get(CONTENT_RANGE).is_none());
        assert_eq!(response.headers()[ETAG], "\"tag\"");
        assert_eq!(response.headers()[LAST_MODIFIED], "Sun, 06 Nov 1994 08:49:37 GMT");
        assert_eq!(response.headers()["x-request-id"], "abc");
    }

    #[test]
    fn test_content_response_overrides_extra_headers() {
        let mut extra = HeaderMap::new();
        extra.insert(CONTENT_TYPE, HeaderValue::from_static("text/csv"));
        extra.insert(ETAG, HeaderValue::from_static("\"old\""));

        let cache = CacheHeaders {
            etag: Some("\"new\""),
            last_modified: None,
        };
        let content = Content {
            content_type: "application/json",
            length: Some(2),
            body: Some(full_body("{}")),
        };
        let response = build_content_response(201, extra, &cache, content).unwrap();

        assert_eq!(response.status(), 201);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(response.headers()[CONTENT_LENGTH], "2");
        assert_eq!(response.headers().get_all(ETAG).iter().count(), 1);
        assert_eq!(response.headers()[ETAG], "\"new\"");
    }

    #[test]
    fn test_invalid_header_value() {
        let content = Content {
            content_type: "text/plain\r\nx-injected: 1",
            length: None,
            body: None,
        };
        let err = build_content_response(200, HeaderMap::new(), &CacheHeaders::default(), content)
            .unwrap_err();
        assert!(matches!(
            err,
            SendError::InvalidHeaderValue {
                name: "Content-Type",
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_status() {
        let content = Content {
            content_type: "text/plain",
            length: None,
            body: None,
        };
        let err = build_content_response(1000, HeaderMap::new(), &CacheHeaders::default(), content)
            .unwrap_err();
        assert!(matches!(err, SendError::Http(_)));
    }
}
