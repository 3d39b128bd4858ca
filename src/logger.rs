//! Custom logging module.
//!
//! This module provides a custom logger implementation that captures log entries
//! and forwards them to a shared buffer the UI drains into its log panel.

use crate::error::AppError;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Arc, Mutex};

/// Log lines waiting to be moved into application state.
///
pub type LogBuffer = Arc<Mutex<Vec<String>>>;

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

/// Custom logger that captures logs through a callback
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
        if self.enabled(record.metadata()) {
            if let Ok(callback) = self.log_callback.lock() {
                if let Some(ref cb) = *callback {
                    cb(format_log(record));
                }
            }
        }
    }

    fn flush(&self) {}
}

/// Install the custom logger globally and return the buffer it writes to.
///
pub fn init(level: LevelFilter) -> Result<LogBuffer, AppError> {
    let buffer: LogBuffer = Arc::new(Mutex::new(Vec::new()));
    let logger = CustomLogger::new(level);
    let sink = Arc::clone(&buffer);
    logger.set_log_callback(Box::new(move |line| {
        if let Ok(mut lines) = sink.lock() {
            lines.push(line);
        }
    }));
    log::set_boxed_logger(Box::new(logger)).map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(level);
    Ok(buffer)
}

/// Take every buffered line, leaving the buffer empty.
///
pub fn drain(buffer: &LogBuffer) -> Vec<String> {
    match buffer.lock() {
        Ok(mut lines) => std::mem::take(&mut *lines),
        Err(_) => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_log_includes_level_and_message() {
        let line = format_log(
            &Record::builder()
                .args(format_args!("Registration error: Username taken"))
                .level(Level::Error)
                .build(),
        );
        assert!(line.contains("ERROR"));
        assert!(line.ends_with("Registration error: Username taken"));
    }

    #[test]
    fn test_logger_respects_level_and_forwards_lines() {
        let logger = CustomLogger::new(LevelFilter::Info);
        let captured: LogBuffer = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&captured);
        logger.set_log_callback(Box::new(move |line| sink.lock().unwrap().push(line)));

        logger.log(
            &Record::builder()
                .args(format_args!("shown"))
                .level(Level::Info)
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("hidden"))
                .level(Level::Debug)
                .build(),
        );

        let lines = drain(&captured);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("shown"));
        assert!(drain(&captured).is_empty());
    }
}
