//! HTTP protocol layer module
//!
//! Entity tags, conditional request evaluation, default content types and
//! response assembly, decoupled from how payloads are chosen.

pub mod etag;
pub mod fresh;
pub mod mime;
pub mod response;

// Re-export commonly used types
pub use etag::{entity_tag, EMPTY_ETAG};
pub use fresh::{is_fresh, EtagListMatch, RequestValidators};
pub use response::SendBody;
