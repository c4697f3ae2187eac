//! The log writer
//!
//! Every emit operation funnels into one private `write` path:
//!
//! 1. Records below the minimum level (and debug records while debug output
//!    is disabled) return before any formatting or locking.
//! 2. The writer lock is taken. It guards the configuration too, so a record
//!    always sees one consistent configuration; the level check is repeated
//!    against it, since the configuration may have changed in between.
//! 3. The message is rendered, written to the console sink, then appended to
//!    the log file when file logging is on.
//!
//! Failures never reach the caller. Formatting and console failures produce a
//! `[LOGGER ERROR]` line; file failures are dropped.

use std::borrow::Cow;
use std::fmt::{self, Display};
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Local};
use crossterm::style::Color;
use parking_lot::Mutex;

use super::console::{Segment, SharedSink, StdoutSink};
use super::detail::ErrorDetail;
use super::error::LogWriteError;
use super::file_logger;
use super::level::LogLevel;
use super::template::{self, TemplateError};
use super::traits::Logger;
use crate::config::LoggerConfig;

/// Console timestamp format (`HH:MM:SS.mmm`)
pub const CONSOLE_TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

/// Color of the console timestamp segment
const TIMESTAMP_COLOR: Color = Color::DarkGrey;

const DEBUG_FALLBACK: &str = "Debug exception";
const WARN_FALLBACK: &str = "Warning occurred";
const ERROR_FALLBACK: &str = "Error occurred";
const FATAL_FALLBACK: &str = "Fatal error occurred";

/// Message body of a record, rendered only once the record passes the threshold
enum Body<'a> {
    Text(&'a str),
    Template(&'a str, &'a [&'a dyn Display]),
}

impl Body<'_> {
    fn render(&self) -> Result<Cow<'_, str>, TemplateError> {
        match self {
            Body::Text(text) => Ok(Cow::Borrowed(*text)),
            Body::Template(text, args) => template::render(text, args).map(Cow::Owned),
        }
    }
}

/// One emit call; built, written and dropped
struct Record<'a> {
    level: LogLevel,
    tag: &'a str,
    color: Color,
    body: Body<'a>,
    error: Option<ErrorDetail>,
}

impl<'a> Record<'a> {
    fn new(level: LogLevel, body: Body<'a>) -> Self {
        Self {
            level,
            tag: level.tag(),
            color: level.color(),
            body,
            error: None,
        }
    }

    fn with_error(mut self, error: ErrorDetail) -> Self {
        self.error = Some(error);
        self
    }
}

/// Leveled console and file logger
///
/// Share it as `Arc<LogWriter>` (or as a [`SharedLogger`](super::SharedLogger))
/// with the components that log.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use logwriter_core::{LogWriter, LoggerConfig, LogLevel, MemorySink};
///
/// let console = MemorySink::new();
/// let writer = LogWriter::with_sink(
///     LoggerConfig::default().with_display(false, true),
///     Arc::new(console.clone()),
/// );
///
/// writer.set_min_level(LogLevel::Info);
/// writer.debug("dropped");
/// writer.info_format("{0} workers started", &[&4]);
///
/// assert_eq!(console.lines(), vec!["[INFO] 4 workers started"]);
/// ```
pub struct LogWriter {
    config: Mutex<LoggerConfig>,
    // Mirrors of config fields for the lock-free threshold check; only
    // written while `config` is locked.
    min_level: AtomicU8,
    debug_enabled: AtomicBool,
    console: SharedSink,
}

impl Default for LogWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogWriter {
    /// Default configuration, writing to stdout
    pub fn new() -> Self {
        Self::with_config(LoggerConfig::default())
    }

    pub fn with_config(config: LoggerConfig) -> Self {
        Self::with_sink(config, Arc::new(StdoutSink::new()))
    }

    pub fn with_sink(config: LoggerConfig, console: SharedSink) -> Self {
        Self {
            min_level: AtomicU8::new(config.min_level.as_u8()),
            debug_enabled: AtomicBool::new(config.debug_enabled),
            config: Mutex::new(config),
            console,
        }
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Drop records below `level`
    pub fn set_min_level(&self, level: LogLevel) {
        let mut config = self.config.lock();
        config.min_level = level;
        self.min_level.store(level.as_u8(), Ordering::Release);
    }

    /// Turn the file sink on or off
    ///
    /// A non-empty `path` replaces the stored file path; `None` or an empty
    /// path keeps the current one.
    pub fn enable_file_logging(&self, enable: bool, path: Option<&Path>) {
        let mut config = self.config.lock();
        config.file_logging_enabled = enable;
        if let Some(path) = path.filter(|p| !p.as_os_str().is_empty()) {
            config.log_file_path = path.to_path_buf();
        }
    }

    /// Toggle the console timestamp and level prefixes
    pub fn configure(&self, show_timestamp: bool, show_level: bool) {
        let mut config = self.config.lock();
        config.show_timestamp = show_timestamp;
        config.show_level = show_level;
    }

    /// Turn debug-level output on or off
    pub fn set_debug_enabled(&self, enabled: bool) {
        let mut config = self.config.lock();
        config.debug_enabled = enabled;
        self.debug_enabled.store(enabled, Ordering::Release);
    }

    pub fn set_colors_enabled(&self, enabled: bool) {
        self.config.lock().colors_enabled = enabled;
    }

    /// Replace the whole configuration at once
    pub fn apply_config(&self, new_config: LoggerConfig) {
        let mut config = self.config.lock();
        self.min_level.store(new_config.min_level.as_u8(), Ordering::Release);
        self.debug_enabled.store(new_config.debug_enabled, Ordering::Release);
        *config = new_config;
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> LoggerConfig {
        self.config.lock().clone()
    }

    /// Whether a record at `level` would be written
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        if level == LogLevel::Debug && !self.debug_enabled.load(Ordering::Acquire) {
            return false;
        }
        level >= LogLevel::from_u8(self.min_level.load(Ordering::Acquire))
    }

    // ------------------------------------------------------------------
    // Debug
    // ------------------------------------------------------------------

    pub fn debug(&self, message: &str) {
        self.write(Record::new(LogLevel::Debug, Body::Text(message)));
    }

    pub fn debug_format(&self, template: &str, args: &[&dyn Display]) {
        self.write(Record::new(LogLevel::Debug, Body::Template(template, args)));
    }

    pub fn debug_with(&self, error: impl Into<ErrorDetail>, message: Option<&str>) {
        self.write_error(LogLevel::Debug, error, message.unwrap_or(DEBUG_FALLBACK));
    }

    // ------------------------------------------------------------------
    // Info
    // ------------------------------------------------------------------

    pub fn info(&self, message: &str) {
        self.write(Record::new(LogLevel::Info, Body::Text(message)));
    }

    pub fn info_format(&self, template: &str, args: &[&dyn Display]) {
        self.write(Record::new(LogLevel::Info, Body::Template(template, args)));
    }

    // ------------------------------------------------------------------
    // Success
    // ------------------------------------------------------------------

    pub fn success(&self, message: &str) {
        self.write(Record::new(LogLevel::Success, Body::Text(message)));
    }

    pub fn success_format(&self, template: &str, args: &[&dyn Display]) {
        self.write(Record::new(LogLevel::Success, Body::Template(template, args)));
    }

    // ------------------------------------------------------------------
    // Warn
    // ------------------------------------------------------------------

    pub fn warn(&self, message: &str) {
        self.write(Record::new(LogLevel::Warn, Body::Text(message)));
    }

    pub fn warn_format(&self, template: &str, args: &[&dyn Display]) {
        self.write(Record::new(LogLevel::Warn, Body::Template(template, args)));
    }

    pub fn warn_with(&self, error: impl Into<ErrorDetail>, message: Option<&str>) {
        self.write_error(LogLevel::Warn, error, message.unwrap_or(WARN_FALLBACK));
    }

    // ------------------------------------------------------------------
    // Error
    // ------------------------------------------------------------------

    pub fn error(&self, message: &str) {
        self.write(Record::new(LogLevel::Error, Body::Text(message)));
    }

    pub fn error_format(&self, template: &str, args: &[&dyn Display]) {
        self.write(Record::new(LogLevel::Error, Body::Template(template, args)));
    }

    /// Log an error with its exception details
    ///
    /// ```
    /// use std::io;
    /// use std::sync::Arc;
    /// use logwriter_core::{LogWriter, LoggerConfig, MemorySink};
    ///
    /// let console = MemorySink::new();
    /// let writer = LogWriter::with_sink(
    ///     LoggerConfig::default().with_display(false, false),
    ///     Arc::new(console.clone()),
    /// );
    ///
    /// let err = io::Error::new(io::ErrorKind::NotFound, "config.yaml missing");
    /// writer.error_with(&err, Some("startup failed"));
    ///
    /// assert_eq!(
    ///     console.lines(),
    ///     vec!["startup failed", "  Exception: Error: config.yaml missing"]
    /// );
    /// ```
    pub fn error_with(&self, error: impl Into<ErrorDetail>, message: Option<&str>) {
        self.write_error(LogLevel::Error, error, message.unwrap_or(ERROR_FALLBACK));
    }

    // ------------------------------------------------------------------
    // Fatal
    // ------------------------------------------------------------------

    pub fn fatal(&self, message: &str) {
        self.write(Record::new(LogLevel::Fatal, Body::Text(message)));
    }

    pub fn fatal_format(&self, template: &str, args: &[&dyn Display]) {
        self.write(Record::new(LogLevel::Fatal, Body::Template(template, args)));
    }

    pub fn fatal_with(&self, error: impl Into<ErrorDetail>, message: Option<&str>) {
        self.write_error(LogLevel::Fatal, error, message.unwrap_or(FATAL_FALLBACK));
    }

    // ------------------------------------------------------------------
    // Utilities
    // ------------------------------------------------------------------

    /// Log at info severity with a caller-chosen tag and color
    pub fn custom(&self, tag: &str, message: &str, color: Color) {
        self.write(Record {
            level: LogLevel::Info,
            tag,
            color,
            body: Body::Text(message),
            error: None,
        });
    }

    /// Write `ch` repeated `length` times as one console line
    pub fn separator(&self, ch: char, length: usize) {
        let line = ch.to_string().repeat(length);
        let _config = self.config.lock();
        if let Err(err) = self.console.write_line(&[Segment::plain(line)]) {
            self.report(&LogWriteError::Console(err));
        }
    }

    /// Write a title between two `=` borders, four characters wider than the title
    pub fn header(&self, title: &str) {
        let border = "=".repeat(title.chars().count() + 4);
        let _config = self.config.lock();
        let lines = [border.clone(), format!("  {}", title), border];
        for line in lines {
            if let Err(err) = self.console.write_line(&[Segment::plain(line)]) {
                self.report(&LogWriteError::Console(err));
                return;
            }
        }
    }

    /// Clear the console; touches no shared state, so no lock is taken
    pub fn clear_screen(&self) {
        if let Err(err) = self.console.clear() {
            self.report(&LogWriteError::Console(err));
        }
    }

    // ------------------------------------------------------------------
    // Write path
    // ------------------------------------------------------------------

    fn write_error(&self, level: LogLevel, error: impl Into<ErrorDetail>, message: &str) {
        // Capturing the error details is formatting work too
        if !self.is_enabled(level) {
            return;
        }
        self.write(Record::new(level, Body::Text(message)).with_error(error.into()));
    }

    fn write(&self, record: Record<'_>) {
        if !self.is_enabled(record.level) {
            return;
        }

        let config = self.config.lock();
        // The configuration may have changed while waiting for the lock
        if !admits(&config, record.level) {
            return;
        }
        if let Err(err) = self.write_locked(&config, &record) {
            if err.is_reported() {
                self.report(&err);
            }
        }
    }

    fn write_locked(
        &self,
        config: &LoggerConfig,
        record: &Record<'_>,
    ) -> Result<(), LogWriteError> {
        let now = Local::now();

        let mut message = record.body.render()?.into_owned();
        if let Some(detail) = &record.error {
            detail.render_into(&mut message);
        }

        let segments = console_segments(config, record, &now, &message);
        self.console
            .write_line(&segments)
            .map_err(LogWriteError::Console)?;

        if config.file_logging_enabled {
            let line = file_logger::format_record(&now, record.tag, &message);
            file_logger::append_record(&config.log_file_path, &line).map_err(|source| {
                LogWriteError::File {
                    path: config.log_file_path.clone(),
                    source,
                }
            })?;
        }

        Ok(())
    }

    /// Last-resort report of a write-path failure; if this fails too, nothing more is tried
    fn report(&self, err: &LogWriteError) {
        let _ = self
            .console
            .write_line(&[Segment::plain(format!("[LOGGER ERROR] {}", err))]);
    }
}

/// Threshold and debug gate, evaluated against a locked configuration
fn admits(config: &LoggerConfig, level: LogLevel) -> bool {
    if level == LogLevel::Debug && !config.debug_enabled {
        return false;
    }
    level >= config.min_level
}

fn console_segments(
    config: &LoggerConfig,
    record: &Record<'_>,
    now: &DateTime<Local>,
    message: &str,
) -> Vec<Segment> {
    let paint = |text: String, color: Color| {
        if config.colors_enabled {
            Segment::colored(text, color)
        } else {
            Segment::plain(text)
        }
    };

    let mut segments = Vec::with_capacity(3);
    if config.show_timestamp {
        segments.push(paint(
            format!("[{}] ", now.format(CONSOLE_TIMESTAMP_FORMAT)),
            TIMESTAMP_COLOR,
        ));
    }
    if config.show_level {
        segments.push(paint(format!("[{}] ", record.tag), record.color));
    }
    segments.push(Segment::plain(message));
    segments
}

impl fmt::Debug for LogWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogWriter")
            .field("config", &*self.config.lock())
            .finish_non_exhaustive()
    }
}

impl Logger for LogWriter {
    fn debug(&self, message: &str) {
        LogWriter::debug(self, message);
    }

    fn info(&self, message: &str) {
        LogWriter::info(self, message);
    }

    fn success(&self, message: &str) {
        LogWriter::success(self, message);
    }

    fn warn(&self, message: &str) {
        LogWriter::warn(self, message);
    }

    fn error(&self, message: &str) {
        LogWriter::error(self, message);
    }

    fn fatal(&self, message: &str) {
        LogWriter::fatal(self, message);
    }
}
