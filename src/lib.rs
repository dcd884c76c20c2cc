//! Conditional HTTP response construction for hyper
//!
//! Builds `hyper::Response`s from text, bytes, JSON, HTML or streamed bodies,
//! with SHA-256 entity tags and `304 Not Modified` handling for
//! `If-None-Match` / `If-Modified-Since` requests.
//!
//! ```
//! use hyper::Request;
//! use hyper_send::{send_text, SendOptions};
//!
//! let req = Request::get("/")
//!     .header("if-none-match", "\"b-uU0nuZNNPgilLlLX2n2r+sSE7+N6U4DukIj3rOLvzek\"")
//!     .body(())
//!     .unwrap();
//! let res = send_text(&req, "hello world", SendOptions::default()).unwrap();
//! assert_eq!(res.status(), 304);
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod send;

pub use crate::config::Config;
pub use error::{Result, SendError};
pub use send::{
    send, send_bytes, send_empty, send_html, send_json, send_stream, send_text, JsonIndent,
    JsonReplacer, Payload, SendOptions,
};
