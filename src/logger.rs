//! Custom logging module.
//!
//! This module provides a custom logger implementation that captures log entries
//! into a bounded buffer shared with the application state for display in the UI.

use crate::error::{AppError, AppResult};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Default number of log lines retained for the log panel.
///
pub const DEFAULT_CAPACITY: usize = 500;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Bounded, shareable buffer of formatted log lines. Oldest lines are dropped
/// once capacity is reached.
///
#[derive(Clone, Debug)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl Default for LogBuffer {
    fn default() -> Self {
        LogBuffer::new(DEFAULT_CAPACITY)
    }
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        LogBuffer {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn push(&self, line: String) {
        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() >= self.capacity {
                entries.pop_front();
            }
            entries.push_back(line);
        }
    }

    /// Return a copy of the buffered lines, oldest first.
    ///
    pub fn entries(&self) -> Vec<String> {
        match self.entries.lock() {
            Ok(entries) => entries.iter().cloned().collect(),
            Err(_) => vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Custom logger that captures logs to state
///
pub struct CustomLogger {
    level: LevelFilter,
    log_callback: Arc<Mutex<Option<Box<dyn Fn(String) + Send + Sync>>>>,
}

impl CustomLogger {
    pub fn new(level: LevelFilter) -> Self {
        CustomLogger {
            level,
            log_callback: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_log_callback(&self, callback: Box<dyn Fn(String) + Send + Sync>) {
        if let Ok(mut guard) = self.log_callback.lock() {
            *guard = Some(callback);
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(callback) = self.log_callback.lock() {
            if let Some(ref cb) = *callback {
                cb(format_log(record));
            }
        }
    }

    fn flush(&self) {}
}

/// Install the global logger, forwarding every formatted line into the given
/// buffer.
///
pub fn init(level: LevelFilter, buffer: LogBuffer) -> AppResult<()> {
    let logger = CustomLogger::new(level);
    logger.set_log_callback(Box::new(move |line| buffer.push(line)));
    log::set_boxed_logger(Box::new(logger))
        .map(|()| log::set_max_level(level))
        .map_err(|e| AppError::Logger(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(logger: &CustomLogger) -> LogBuffer {
        let buffer = LogBuffer::new(10);
        let sink = buffer.clone();
        logger.set_log_callback(Box::new(move |line| sink.push(line)));
        buffer
    }

    #[test]
    fn format_log_includes_level_and_message() {
        let line = format_log(
            &Record::builder()
                .args(format_args!("Added task {}", 3))
                .level(Level::Warn)
                .build(),
        );
        assert!(line.contains("WARN Added task 3"));
    }

    #[test]
    fn logger_respects_level() {
        let logger = CustomLogger::new(LevelFilter::Info);
        let buffer = capture(&logger);

        logger.log(
            &Record::builder()
                .args(format_args!("kept"))
                .level(Level::Info)
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("dropped"))
                .level(Level::Debug)
                .build(),
        );

        let entries = buffer.entries();
        assert_eq!(1, entries.len());
        assert!(entries[0].ends_with("INFO kept"));
    }

    #[test]
    fn logger_without_callback_is_silent() {
        let logger = CustomLogger::new(LevelFilter::Trace);
        logger.log(
            &Record::builder()
                .args(format_args!("nobody listens"))
                .level(Level::Error)
                .build(),
        );
    }

    #[test]
    fn init_installs_global_logger() {
        // The only test touching the global logger
        let buffer = LogBuffer::new(50);
        init(LevelFilter::Info, buffer.clone()).unwrap();
        log::info!("global logger ready");
        log::trace!("below the configured level");

        let entries = buffer.entries();
        assert!(entries.iter().any(|e| e.ends_with("INFO global logger ready")));
        assert!(!entries.iter().any(|e| e.contains("below the configured level")));
        assert!(init(LevelFilter::Info, LogBuffer::default()).is_err());
    }

    #[test]
    fn buffer_drops_oldest_lines() {
        let buffer = LogBuffer::new(3);
        assert!(buffer.is_empty());
        for i in 0..5 {
            buffer.push(format!("line {}", i));
        }
        assert_eq!(3, buffer.len());
        assert_eq!(vec!["line 2", "line 3", "line 4"], buffer.entries());
    }
}
