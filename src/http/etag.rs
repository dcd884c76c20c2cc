//! Entity tag generation
//!
//! Derives a strong validator from buffered response bytes.

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine as _;
use sha2::{Digest, Sha256};

/// `ETag` of a zero-length body
///
/// Hashing empty input always produces the same digest, so it is never recomputed.
pub const EMPTY_ETAG: &str = "\"0-47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU\"";

/// Generate `ETag` from body content
///
/// The tag is the body length in base 36 followed by the unpadded base64
/// SHA-256 digest of the bytes.
///
/// # Arguments
/// * `content` - Buffered body bytes
///
/// # Returns
/// Quoted `ETag` string, e.g., `"b-uU0nuZNNPgilLlLX2n2r+sSE7+N6U4DukIj3rOLvzek"`
///
/// # Examples
/// ```
/// use hyper_send::http::etag::{entity_tag, EMPTY_ETAG};
/// assert_eq!(entity_tag(b""), EMPTY_ETAG);
/// assert!(entity_tag(b"hello world").starts_with("\"b-"));
/// ```
pub fn entity_tag(content: &[u8]) -> String {
    if content.is_empty() {
        return EMPTY_ETAG.to_string();
    }

    let digest = Sha256::digest(content);
    format!(
        "\"{}-{}\"",
        to_base36(content.len()),
        STANDARD_NO_PAD.encode(digest)
    )
}

fn to_base36(mut n: usize) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if n == 0 {
        return "0".to_string();
    }

    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[n % 36]);
        n /= 36;
    }
    out.reverse();
    // Only ASCII digits were pushed
    String::from_utf8(out).unwrap_or_default()
}
