//! Send options
//!
//! One configuration structure for every send entry point; every field has a
//! default so `SendOptions::default()` sends a plain 200 response.

use crate::config::SendConfig;
use crate::http::fresh::EtagListMatch;
use chrono::{DateTime, Utc};
use hyper::HeaderMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Rewrites a JSON member before serialization, `None` drops it
///
/// Called with key `""` for the root value and the array index for array
/// elements.
pub type JsonReplacer = Arc<dyn Fn(&str, Value) -> Option<Value> + Send + Sync>;

/// Longest indentation unit used for JSON bodies
const MAX_JSON_INDENT: usize = 10;

/// Indentation of JSON bodies
///
/// Either a number of spaces or a literal unit such as `"\t"`. Units longer
/// than 10 characters are truncated; an empty unit gives compact output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum JsonIndent {
    Spaces(usize),
    Text(String),
}

impl JsonIndent {
    /// Indentation unit for one nesting level, empty for compact output
    pub fn unit(&self) -> String {
        match self {
            Self::Spaces(n) => " ".repeat((*n).min(MAX_JSON_INDENT)),
            Self::Text(text) => text.chars().take(MAX_JSON_INDENT).collect(),
        }
    }
}

impl Default for JsonIndent {
    fn default() -> Self {
        Self::Spaces(0)
    }
}

impl From<usize> for JsonIndent {
    fn from(spaces: usize) -> Self {
        Self::Spaces(spaces)
    }
}

impl From<&str> for JsonIndent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for JsonIndent {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

#[derive(Clone, Default)]
pub struct SendOptions {
    /// Status of a full response, 200 when unset (304 always wins)
    pub status: Option<u16>,
    /// Extra headers; computed headers replace entries with the same name
    pub headers: HeaderMap,
    /// Overrides the payload kind's default `Content-Type`
    pub content_type: Option<String>,
    /// `Content-Length` of a streamed payload
    pub content_length: Option<u64>,
    /// Last modification time, sent as `Last-Modified`
    pub mtime: Option<DateTime<Utc>>,
    /// Explicit `ETag`, skips computation
    pub etag: Option<String>,
    /// Do not compute an `ETag` for buffered payloads
    pub skip_etag: bool,
    /// Indentation of JSON bodies, compact by default
    pub json_spaces: JsonIndent,
    pub json_replacer: Option<JsonReplacer>,
    pub etag_match: EtagListMatch,
}

impl SendOptions {
    /// Options seeded with configured defaults
    pub fn from_config(config: &SendConfig) -> Self {
        Self {
            skip_etag: config.skip_etag,
            json_spaces: config.json_spaces.clone(),
            etag_match: config.etag_match,
            ..Self::default()
        }
    }
}

impl fmt::Debug for SendOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SendOptions")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .field("content_type", &self.content_type)
            .field("content_length", &self.content_length)
            .field("mtime", &self.mtime)
            .field("etag", &self.etag)
            .field("skip_etag", &self.skip_etag)
            .field("json_spaces", &self.json_spaces)
            .field("json_replacer", &self.json_replacer.as_ref().map(|_| ".."))
            .field("etag_match", &self.etag_match)
            .finish()
    }
}
