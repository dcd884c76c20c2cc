//! Default content types
//!
//! Returns the `Content-Type` used when the caller does not supply one.

/// Shape of a payload, decided by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Empty,
    Text,
    Bytes,
    Json,
    Html,
    Stream,
}

/// Get default Content-Type for a payload kind
///
/// # Examples
/// ```
/// use hyper_send::http::mime::{default_content_type, PayloadKind};
/// assert_eq!(default_content_type(PayloadKind::Json), "application/json");
/// assert_eq!(default_content_type(PayloadKind::Stream), "application/octet-stream");
/// ```
pub const fn default_content_type(kind: PayloadKind) -> &'static str {
    match kind {
        // Raw bytes are sent the same way as text
        PayloadKind::Empty | PayloadKind::Text | PayloadKind::Bytes => "text/plain",
        PayloadKind::Json => "application/json",
        PayloadKind::Html => "text/html",
        PayloadKind::Stream => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_types() {
        assert_eq!(default_content_type(PayloadKind::Empty), "text/plain");
        assert_eq!(default_content_type(PayloadKind::Text), "text/plain");
        assert_eq!(default_content_type(PayloadKind::Bytes), "text/plain");
        assert_eq!(default_content_type(PayloadKind::Json), "application/json");
        assert_eq!(default_content_type(PayloadKind::Html), "text/html");
        assert_eq!(
            default_content_type(PayloadKind::Stream),
            "application/octet-stream"
        );
    }
}
