//! Log writer module
//!
//! Thread-safe access log output to stdout or an append-mode file.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

/// Log output target
enum LogTarget {
    Stdout,
    File(Mutex<File>),
}

/// Writes one access log line per request
pub struct AccessLogWriter {
    target: LogTarget,
}

impl AccessLogWriter {
    /// Open the writer; `None` writes to stdout
    pub fn open(path: Option<&str>) -> io::Result<Self> {
        let target = match path {
            Some(path) => LogTarget::File(Mutex::new(open_log_file(path)?)),
            None => LogTarget::Stdout,
        };
        Ok(Self { target })
    }

    pub fn write_line(&self, message: &str) {
        match &self.target {
            LogTarget::Stdout => println!("{message}"),
            LogTarget::File(file) => {
                if let Ok(mut f) = file.lock() {
                    if let Err(e) = writeln!(f, "{message}") {
                        super::log_warning(&format!("Failed to write access log: {e}"));
                    }
                }
            }
        }
    }
}

/// Open or create a log file for appending
pub fn open_log_file(path: &str) -> io::Result<File> {
    // Create parent directories if they don't exist
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}
