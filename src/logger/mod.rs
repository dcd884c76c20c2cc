//! Logger module
//!
//! Provides logging utilities for the send layer including:
//! - Per-response send logging with multiple formats
//! - Warning and info logging with level filtering
//! - File-based logging support

mod format;
pub mod writer;

pub use format::SendLogEntry;

use crate::config::{LogLevel, LoggingConfig};

/// Initialize the logger with configuration
///
/// Should be called once at application startup. Before that, warnings and
/// errors go to stderr and send logging is off.
pub fn init(config: &LoggingConfig) -> std::io::Result<()> {
    writer::init(config)
}

fn enabled(level: LogLevel) -> bool {
    let max = writer::get().map_or(LogLevel::Warn, writer::LogWriter::level);
    level <= max
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_warning(message: &str) {
    if enabled(LogLevel::Warn) {
        write_error(&format!("[WARN] {message}"));
    }
}

pub fn log_info(message: &str) {
    if enabled(LogLevel::Info) {
        write_error(&format!("[INFO] {message}"));
    }
}

/// Log a built response in the configured send log format
pub fn log_send(entry: &SendLogEntry) {
    if let Some(w) = writer::get() {
        if let Some(format) = w.send_format() {
            w.write_send(&entry.format(format));
        }
    }
}
