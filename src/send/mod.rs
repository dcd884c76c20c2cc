//! Response sending
//!
//! Turns a payload into a response, answering `304 Not Modified` when the
//! client's cached copy is still fresh. Every `send_*` helper is a preset of
//! [`send`].

mod options;
mod payload;

pub use options::{JsonIndent, JsonReplacer, SendOptions};
pub use payload::Payload;

use crate::error::{BoxError, Result};
use crate::http::etag::entity_tag;
use crate::http::fresh::{is_fresh, RequestValidators};
use crate::http::mime::default_content_type;
use crate::http::response::{
    build_304_response, build_content_response, full_body, CacheHeaders, Content, SendBody,
};
use crate::logger::{self, SendLogEntry};
use hyper::body::{Body, Bytes};
use hyper::header::{HeaderName, CONTENT_LENGTH, CONTENT_TYPE, ETAG};
use hyper::{Method, Request, Response};
use payload::Prepared;
use serde::Serialize;

/// Send the payload as an HTTP response
///
/// HEAD requests get the same headers as GET without a body. The `ETag` is
/// `options.etag` if set, otherwise computed from buffered payloads unless
/// `options.skip_etag`; streams never get a computed one.
///
/// # Examples
/// ```
/// use hyper::Request;
/// use hyper_send::send::{send, Payload, SendOptions};
///
/// let req = Request::get("/").body(()).unwrap();
/// let res = send(&req, Payload::from("hello world"), SendOptions::default()).unwrap();
/// assert_eq!(res.status(), 200);
/// assert_eq!(res.headers()["content-type"], "text/plain");
/// assert_eq!(res.headers()["content-length"], "11");
/// ```
pub fn send<B>(
    req: &Request<B>,
    payload: Payload,
    options: SendOptions,
) -> Result<Response<SendBody>> {
    let kind = payload.kind();
    let is_head = req.method() == Method::HEAD;
    let prepared = payload.prepare(&options)?;

    let etag = match (&options.etag, &prepared) {
        (Some(etag), _) => Some(etag.clone()),
        (None, Prepared::Buffered(bytes)) if !options.skip_etag => Some(entity_tag(bytes)),
        _ => None,
    };

    let validators = RequestValidators::from_headers(req.headers());
    let fresh = is_fresh(
        &validators,
        etag.as_deref(),
        options.mtime,
        options.etag_match,
    );
    let cache = CacheHeaders {
        etag: etag.as_deref(),
        last_modified: options.mtime,
    };

    let response = if fresh {
        logger::log_info(&format!(
            "Not modified: {} (etag {})",
            req.uri(),
            etag.as_deref().unwrap_or("-")
        ));
        build_304_response(options.headers, &cache)?
    } else {
        let (length, body) = match prepared {
            Prepared::Buffered(bytes) => (u64::try_from(bytes.len()).ok(), full_body(bytes)),
            Prepared::Stream(body) => (options.content_length, body),
        };
        let content = Content {
            content_type: options
                .content_type
                .as_deref()
                .unwrap_or_else(|| default_content_type(kind)),
            length,
            body: (!is_head).then_some(body),
        };
        build_content_response(options.status.unwrap_or(200), options.headers, &cache, content)?
    };

    log_response(req.method(), &response, fresh);
    Ok(response)
}

/// Send an empty `text/plain` response
pub fn send_empty<B>(req: &Request<B>, options: SendOptions) -> Result<Response<SendBody>> {
    send(req, Payload::Empty, options)
}

/// Send text (defaults to `text/plain`)
pub fn send_text<B>(
    req: &Request<B>,
    text: impl Into<String>,
    options: SendOptions,
) -> Result<Response<SendBody>> {
    send(req, Payload::Text(text.into()), options)
}

/// Send raw bytes, typed like text unless `options.content_type` says otherwise
pub fn send_bytes<B>(
    req: &Request<B>,
    data: impl Into<Bytes>,
    options: SendOptions,
) -> Result<Response<SendBody>> {
    send(req, Payload::Bytes(data.into()), options)
}

/// Send HTML (defaults to `text/html`)
pub fn send_html<B>(
    req: &Request<B>,
    html: impl Into<String>,
    options: SendOptions,
) -> Result<Response<SendBody>> {
    send(req, Payload::Html(html.into()), options)
}

/// Send a serializable value as JSON (defaults to `application/json`)
pub fn send_json<B, T>(
    req: &Request<B>,
    value: &T,
    options: SendOptions,
) -> Result<Response<SendBody>>
where
    T: Serialize + ?Sized,
{
    let value = serde_json::to_value(value)?;
    send(req, Payload::Json(value), options)
}

/// Send a body without buffering it (defaults to `application/octet-stream`)
///
/// No `ETag` is computed; pass `options.etag` and `options.content_length`
/// when they are known.
pub fn send_stream<B, S>(
    req: &Request<B>,
    body: S,
    options: SendOptions,
) -> Result<Response<SendBody>>
where
    S: Body<Data = Bytes> + Send + Sync + 'static,
    S::Error: Into<BoxError>,
{
    send(req, Payload::stream(body), options)
}

fn log_response(method: &Method, response: &Response<SendBody>, fresh: bool) {
    let header = |name: HeaderName| {
        response
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let mut entry = SendLogEntry::new(method.to_string(), response.status().as_u16());
    entry.etag = header(ETAG);
    entry.content_type = header(CONTENT_TYPE);
    entry.body_bytes = header(CONTENT_LENGTH).and_then(|n| n.parse().ok());
    entry.fresh = fresh;
    logger::log_send(&entry);
}
