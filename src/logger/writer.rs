//! Log writer module
//!
//! Provides thread-safe log writing to files or stdout/stderr.

use crate::config::{LogLevel, LoggingConfig};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

/// Global log writer instance
static LOG_WRITER: OnceLock<LogWriter> = OnceLock::new();

/// Log output target
enum LogTarget {
    /// Write to stdout
    Stdout,
    /// Write to stderr
    Stderr,
    /// Write to file
    File(File),
}

/// Thread-safe log writer
pub struct LogWriter {
    level: LogLevel,
    /// Format of per-response lines, `None` when disabled
    send_format: Option<String>,
    /// Send log target
    send: Mutex<LogTarget>,
    /// Error log target
    error: Mutex<LogTarget>,
}

impl LogWriter {
    pub fn new(config: &LoggingConfig) -> io::Result<Self> {
        let send = match config.send_log_file.as_deref() {
            Some(path) => LogTarget::File(open_log_file(path)?),
            None => LogTarget::Stdout,
        };

        let error = match config.error_log_file.as_deref() {
            Some(path) => LogTarget::File(open_log_file(path)?),
            None => LogTarget::Stderr,
        };

        Ok(Self {
            level: config.level,
            send_format: config.send_log.then(|| config.send_log_format.clone()),
            send: Mutex::new(send),
            error: Mutex::new(error),
        })
    }

    pub const fn level(&self) -> LogLevel {
        self.level
    }

    pub fn send_format(&self) -> Option<&str> {
        self.send_format.as_deref()
    }

    /// Write to send log
    pub fn write_send(&self, message: &str) {
        if let Ok(mut target) = self.send.lock() {
            write_to_target(&mut target, message);
        }
    }

    /// Write to error log
    pub fn write_error(&self, message: &str) {
        if let Ok(mut target) = self.error.lock() {
            write_to_target(&mut target, message);
        }
    }
}

/// Open or create a log file for appending
fn open_log_file(path: &str) -> io::Result<File> {
    // Create parent directories if they don't exist
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}

/// Write message to log target
fn write_to_target(target: &mut LogTarget, message: &str) {
    match target {
        LogTarget::Stdout => {
            println!("{message}");
        }
        LogTarget::Stderr => {
            eprintln!("{message}");
        }
        LogTarget::File(f) => {
            let _ = writeln!(f, "{message}");
        }
    }
}

/// Initialize the global log writer
///
/// This should be called once at application startup.
/// Returns error if log files cannot be opened.
pub fn init(config: &LoggingConfig) -> io::Result<()> {
    let writer = LogWriter::new(config)?;
    LOG_WRITER.set(writer).map_err(|_| {
        io::Error::new(
            io::ErrorKind::AlreadyExists,
            "Log writer already initialized",
        )
    })
}

/// Get the global log writer, if `init()` has been called
pub fn get() -> Option<&'static LogWriter> {
    LOG_WRITER.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("hyper-send-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_write_to_files() {
        let send_path = temp_path("send.log");
        let error_path = temp_path("nested/error.log");
        let config = LoggingConfig {
            send_log: true,
            send_log_file: Some(send_path.to_string_lossy().into_owned()),
            error_log_file: Some(error_path.to_string_lossy().into_owned()),
            ..LoggingConfig::default()
        };

        let writer = LogWriter::new(&config).unwrap();
        writer.write_send("first line");
        writer.write_send("second line");
        writer.write_error("[ERROR] boom");

        let send = std::fs::read_to_string(&send_path).unwrap();
        assert!(send.contains("first line\nsecond line\n"));
        let error = std::fs::read_to_string(&error_path).unwrap();
        assert!(error.contains("[ERROR] boom"));

        let _ = std::fs::remove_file(send_path);
        let _ = std::fs::remove_file(error_path);
    }

    #[test]
    fn test_send_format_disabled() {
        let writer = LogWriter::new(&LoggingConfig::default()).unwrap();
        assert_eq!(writer.send_format(), None);
        assert_eq!(writer.level(), LogLevel::Warn);
    }
}
