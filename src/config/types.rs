// Configuration types module
// Defines all configuration-related data structures

use crate::http::fresh::EtagListMatch;
use crate::send::JsonIndent;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub send: SendConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Defaults applied to every send call
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct SendConfig {
    /// Indentation of JSON bodies: a number of spaces or a literal unit
    #[serde(default)]
    pub json_spaces: JsonIndent,
    /// Disable automatic `ETag` computation for buffered payloads
    #[serde(default)]
    pub skip_etag: bool,
    /// Matching rule for multi-token `If-None-Match` lists
    #[serde(default)]
    pub etag_match: EtagListMatch,
}

/// Log verbosity, ordered from quietest to loudest
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,
    /// Write one line per built response
    #[serde(default)]
    pub send_log: bool,
    /// Send log format (common, json, or custom pattern)
    #[serde(default = "default_send_log_format")]
    pub send_log_format: String,
    /// Send log file path (optional, stdout if not set)
    #[serde(default)]
    pub send_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_send_log_format() -> String {
    "common".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            send_log: false,
            send_log_format: default_send_log_format(),
            send_log_file: None,
            error_log_file: None,
        }
    }
}
