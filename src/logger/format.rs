//! Send log format module
//!
//! Supports multiple log formats:
//! - `common` (one line with the response summary)
//! - `json` (JSON structured logging)
//! - Custom patterns with variables

use chrono::Local;

/// Summary of one built response
#[derive(Debug, Clone)]
pub struct SendLogEntry {
    /// Build timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method of the request
    pub method: String,
    /// Response status code
    pub status: u16,
    /// `ETag` sent with the response
    pub etag: Option<String>,
    /// `Content-Type` sent with the response (absent on 304)
    pub content_type: Option<String>,
    /// `Content-Length` sent with the response, when known
    pub body_bytes: Option<u64>,
    /// Whether the client's cached copy was still fresh
    pub fresh: bool,
}

impl SendLogEntry {
    /// Create a new entry with current timestamp
    pub fn new(method: String, status: u16) -> Self {
        Self {
            time: Local::now(),
            method,
            status,
            etag: None,
            content_type: None,
            body_bytes: None,
            fresh: false,
        }
    }

    /// Format the log entry according to the specified format
    pub fn format(&self, format: &str) -> String {
        match format {
            "common" => self.format_common(),
            "json" => self.format_json(),
            custom => self.format_custom(custom),
        }
    }

    /// `[$time_local] "$method" $status $etag $body_bytes`
    fn format_common(&self) -> String {
        format!(
            "[{}] \"{}\" {} {} {}",
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.status,
            self.etag.as_deref().unwrap_or("-"),
            self.body_bytes_str(),
        )
    }

    fn format_json(&self) -> String {
        serde_json::json!({
            "time": self.time.to_rfc3339(),
            "method": self.method,
            "status": self.status,
            "etag": self.etag,
            "content_type": self.content_type,
            "body_bytes": self.body_bytes,
            "fresh": self.fresh,
        })
        .to_string()
    }

    /// Custom format with variable substitution
    ///
    /// Supported variables:
    /// - `$time_local` - Local time in Common Log Format
    /// - `$time_iso8601` - ISO 8601 timestamp
    /// - `$method` - HTTP method
    /// - `$status` - Response status code
    /// - `$etag` - `ETag` header value
    /// - `$content_type` - `Content-Type` header value
    /// - `$body_bytes` - `Content-Length` header value
    /// - `$fresh` - `true` when answered with 304
    fn format_custom(&self, pattern: &str) -> String {
        pattern
            .replace(
                "$time_local",
                &self.time.format("%d/%b/%Y:%H:%M:%S %z").to_string(),
            )
            .replace("$time_iso8601", &self.time.to_rfc3339())
            .replace("$method", &self.method)
            .replace("$status", &self.status.to_string())
            .replace("$etag", self.etag.as_deref().unwrap_or("-"))
            .replace("$content_type", self.content_type.as_deref().unwrap_or("-"))
            .replace("$body_bytes", &self.body_bytes_str())
            .replace("$fresh", &self.fresh.to_string())
    }

    fn body_bytes_str(&self) -> String {
        self.body_bytes
            .map_or_else(|| "-".to_string(), |n| n.to_string())
    }
}
