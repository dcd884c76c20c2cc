//! Payload representation
//!
//! The caller picks the variant; nothing is inferred from the value's shape.

use super::options::{JsonReplacer, SendOptions};
use crate::error::{BoxError, Result, SendError};
use crate::http::etag::entity_tag;
use crate::http::mime::PayloadKind;
use crate::http::response::{stream_body, SendBody};
use hyper::body::{Body, Bytes};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

/// Body of a response to send
#[derive(Debug)]
pub enum Payload {
    Empty,
    Text(String),
    Bytes(Bytes),
    Json(Value),
    Html(String),
    /// Unbuffered body, forwarded without being read
    Stream(SendBody),
}

/// Payload after JSON serialization
pub enum Prepared {
    Buffered(Bytes),
    Stream(SendBody),
}

impl Payload {
    /// Wrap any `Body` yielding `Bytes` as a stream payload
    pub fn stream<B>(body: B) -> Self
    where
        B: Body<Data = Bytes> + Send + Sync + 'static,
        B::Error: Into<BoxError>,
    {
        Self::Stream(stream_body(body))
    }

    pub const fn kind(&self) -> PayloadKind {
        match self {
            Self::Empty => PayloadKind::Empty,
            Self::Text(_) => PayloadKind::Text,
            Self::Bytes(_) => PayloadKind::Bytes,
            Self::Json(_) => PayloadKind::Json,
            Self::Html(_) => PayloadKind::Html,
            Self::Stream(_) => PayloadKind::Stream,
        }
    }

    /// Compute the `ETag` the payload would be sent with
    ///
    /// JSON payloads are serialized with the options' formatting first.
    /// Streams cannot be digested without buffering them and are rejected.
    pub fn entity_tag(&self, options: &SendOptions) -> Result<String> {
        let tag = match self {
            Self::Empty => entity_tag(b""),
            Self::Text(text) | Self::Html(text) => entity_tag(text.as_bytes()),
            Self::Bytes(bytes) => entity_tag(bytes),
            Self::Json(value) => entity_tag(&serialize_json(value.clone(), options)?),
            Self::Stream(_) => return Err(SendError::InvalidEtagComputation),
        };
        Ok(tag)
    }

    pub fn prepare(self, options: &SendOptions) -> Result<Prepared> {
        let bytes = match self {
            Self::Empty => Bytes::new(),
            Self::Text(text) | Self::Html(text) => Bytes::from(text),
            Self::Bytes(bytes) => bytes,
            Self::Json(value) => Bytes::from(serialize_json(value, options)?),
            Self::Stream(body) => return Ok(Prepared::Stream(body)),
        };
        Ok(Prepared::Buffered(bytes))
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Bytes> for Payload {
    fn from(bytes: Bytes) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(Bytes::from(bytes))
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Payload {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

/// Serialize a JSON value with the options' replacer and indentation
///
/// Object members keep their insertion order. A replacer that drops the root
/// value yields `null`.
fn serialize_json(value: Value, options: &SendOptions) -> Result<Vec<u8>> {
    let value = match &options.json_replacer {
        Some(replacer) => replace(replacer, "", value).unwrap_or(Value::Null),
        None => value,
    };

    let indent = options.json_spaces.unit();
    if indent.is_empty() {
        return Ok(serde_json::to_vec(&value)?);
    }

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}

/// Apply the replacer depth-first, parent before children
///
/// Array elements are keyed by index; a dropped element becomes `null`.
fn replace(replacer: &JsonReplacer, key: &str, value: Value) -> Option<Value> {
    let value = replacer(key, value)?;
    let value = match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter_map(|(k, v)| replace(replacer, &k, v).map(|v| (k, v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(i, v)| replace(replacer, &i.to_string(), v).unwrap_or(Value::Null))
                .collect(),
        ),
        other => other,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::etag::EMPTY_ETAG;
    use crate::send::JsonIndent;
    use serde_json::json;
    use std::sync::Arc;

    fn to_string(value: Value, options: &SendOptions) -> String {
        String::from_utf8(serialize_json(value, options).unwrap()).unwrap()
    }

    #[test]
    fn test_compact_json() {
        let out = to_string(json!({"hello": "world"}), &SendOptions::default());
        assert_eq!(out, r#"{"hello":"world"}"#);
    }

    #[test]
    fn test_indented_json() {
        let options = SendOptions {
            json_spaces: JsonIndent::Spaces(2),
            ..SendOptions::default()
        };
        let out = to_string(json!({"a": [1, 2]}), &options);
        assert_eq!(out, "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
    }

    #[test]
    fn test_indent_is_capped() {
        let options = SendOptions {
            json_spaces: JsonIndent::Spaces(40),
            ..SendOptions::default()
        };
        let out = to_string(json!({"a": 1}), &options);
        assert_eq!(out, format!("{{\n{}\"a\": 1\n}}", " ".repeat(10)));
    }

    #[test]
    fn test_replacer_drops_and_rewrites() {
        let replacer: JsonReplacer = Arc::new(|key: &str, value: Value| match key {
            "password" => None,
            "n" => Some(json!(value.as_i64().unwrap_or(0) * 10)),
            _ => Some(value),
        });
        let options = SendOptions {
            json_replacer: Some(replacer),
            ..SendOptions::default()
        };
        let out = to_string(
            json!({"user": "ann", "password": "secret", "n": 4, "list": [{"password": 1}]}),
            &options,
        );
        assert_eq!(out, r#"{"user":"ann","n":40,"list":[{}]}"#);
    }

    #[test]
    fn test_replacer_array_elements() {
        let replacer: JsonReplacer =
            Arc::new(|key: &str, value: Value| (key != "1").then_some(value));
        let options = SendOptions {
            json_replacer: Some(replacer),
            ..SendOptions::default()
        };
        assert_eq!(to_string(json!(["a", "b", "c"]), &options), r#"["a",null,"c"]"#);
    }

    #[test]
    fn test_text_indent_is_capped() {
        let options = SendOptions {
            json_spaces: JsonIndent::from("<-------->--"),
            ..SendOptions::default()
        };
        let out = to_string(json!({"a": 1}), &options);
        assert_eq!(out, "{\n<-------->\"a\": 1\n}");
    }

    #[test]
    fn test_replacer_keeps_member_order() {
        let replacer: JsonReplacer = Arc::new(|_: &str, value: Value| Some(value));
        let options = SendOptions {
            json_replacer: Some(replacer),
            ..SendOptions::default()
        };
        let out = to_string(json!({"z": 1, "m": {"y": 2, "b": 3}, "a": 4}), &options);
        assert_eq!(out, r#"{"z":1,"m":{"y":2,"b":3},"a":4}"#);
    }

    #[test]
    fn test_replacer_drops_root() {
        let replacer: JsonReplacer = Arc::new(|_: &str, _: Value| None);
        let options = SendOptions {
            json_replacer: Some(replacer),
            ..SendOptions::default()
        };
        assert_eq!(to_string(json!({"a": 1}), &options), "null");
    }

    #[test]
    fn test_entity_tag_for_buffered_payloads() {
        let options = SendOptions::default();
        assert_eq!(Payload::Empty.entity_tag(&options).unwrap(), EMPTY_ETAG);
        assert_eq!(
            Payload::from("hello world").entity_tag(&options).unwrap(),
            "\"b-uU0nuZNNPgilLlLX2n2r+sSE7+N6U4DukIj3rOLvzek\""
        );
        assert_eq!(
            Payload::Json(json!({"hello": "world"}))
                .entity_tag(&options)
                .unwrap(),
            "\"h-k6I5cakU5erL8KjSUVTNownDwccvu5kU1Hxg88toFYg\""
        );
        assert_eq!(
            Payload::Html("hello world".to_string())
                .entity_tag(&options)
                .unwrap(),
            Payload::from(b"hello world".to_vec())
                .entity_tag(&options)
                .unwrap()
        );
    }

    #[test]
    fn test_entity_tag_rejects_stream() {
        let payload = Payload::stream(http_body_util::Full::new(Bytes::from("data")));
        let err = payload.entity_tag(&SendOptions::default()).unwrap_err();
        assert!(matches!(err, SendError::InvalidEtagComputation));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Payload::from(None::<String>).kind(), PayloadKind::Empty);
        assert_eq!(Payload::from(Some("x")).kind(), PayloadKind::Text);
    }
}
