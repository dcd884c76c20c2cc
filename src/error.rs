//! Error types
//!
//! Failures surfaced to the caller of the send functions. Missing headers and
//! absent validators are ordinary branches and never show up here.

use thiserror::Error;

/// Boxed error carried by streamed response bodies
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum SendError {
    /// An entity tag was requested for a payload whose bytes are not buffered
    #[error("cannot compute an entity tag for a streamed payload")]
    InvalidEtagComputation,

    /// Structured payload could not be turned into JSON
    #[error("failed to serialize JSON payload: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A header value supplied through the options is not a valid header value
    #[error("invalid value for {name} header: {value:?}")]
    InvalidHeaderValue { name: &'static str, value: String },

    /// Response assembly rejected by the HTTP message builder
    #[error("failed to build response: {0}")]
    Http(#[from] hyper::http::Error),
}

pub type Result<T, E = SendError> = std::result::Result<T, E>;
