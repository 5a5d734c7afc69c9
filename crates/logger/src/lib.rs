//! Logging for winkit.
//!
//! Thread-safe global logger keeping the most recent entries in memory
//! and optionally appending them to a file. Messages logged before
//! [`init`] are dropped, so library crates can log unconditionally.

use chrono::Local;
use std::collections::VecDeque;
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

/// Log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Timestamp in HH:MM:SS format
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn to_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

#[derive(Debug)]
struct Logger {
    /// Last `max_entries` messages
    entries: VecDeque<LogEntry>,
    max_entries: usize,
    min_level: LogLevel,
    /// Log file, if file output is enabled
    file_path: Option<PathBuf>,
}

impl Logger {
    fn new(file_path: Option<PathBuf>, max_entries: usize, min_level: LogLevel) -> Self {
        if let Some(path) = &file_path {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }

            // Truncate on startup
            if let Ok(mut file) = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)
            {
                let _ = writeln!(file, "=== winkit log start ===");
            }
        }

        Self {
            entries: VecDeque::new(),
            max_entries,
            min_level,
            file_path,
        }
    }

    fn add_entry(&mut self, level: LogLevel, message: String) {
        if level < self.min_level {
            return;
        }

        let timestamp = Local::now().format("%H:%M:%S").to_string();

        if let Some(path) = &self.file_path {
            // Recreate the file if it was deleted
            if let Ok(mut file) = OpenOptions::new().append(true).create(true).open(path) {
                let _ = writeln!(file, "[{}] {}: {}", timestamp, level.to_str(), message);
            }
        }

        self.entries.push_back(LogEntry {
            timestamp,
            level,
            message,
        });
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }

    fn get_entries(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }

    fn set_min_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }
}

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

/// Run `f` against the global logger if it has been initialized.
fn with_logger<R>(f: impl FnOnce(&mut Logger) -> R) -> Option<R> {
    let mut logger = LOGGER.get()?.lock().ok()?;
    Some(f(&mut logger))
}

/// Initialize the global logger.
///
/// Call once at startup; later calls are ignored.
///
/// # Arguments
///
/// * `file_path` - Log file, or `None` to keep entries in memory only
/// * `max_entries` - Maximum number of entries kept in memory
/// * `min_level` - Minimum level to record
pub fn init(file_path: Option<PathBuf>, max_entries: usize, min_level: LogLevel) {
    LOGGER.get_or_init(|| Mutex::new(Logger::new(file_path, max_entries, min_level)));
}

pub fn set_min_level(level: LogLevel) {
    with_logger(|logger| logger.set_min_level(level));
}

pub fn debug(message: impl Into<String>) {
    with_logger(|logger| logger.add_entry(LogLevel::Debug, message.into()));
}

pub fn info(message: impl Into<String>) {
    with_logger(|logger| logger.add_entry(LogLevel::Info, message.into()));
}

pub fn warn(message: impl Into<String>) {
    with_logger(|logger| logger.add_entry(LogLevel::Warn, message.into()));
}

pub fn error(message: impl Into<String>) {
    with_logger(|logger| logger.add_entry(LogLevel::Error, message.into()));
}

/// All entries currently held in memory, oldest first.
pub fn get_entries() -> Vec<LogEntry> {
    with_logger(|logger| logger.get_entries()).unwrap_or_default()
}
