//! Leveled console and file logging

mod traits;
mod noop;
mod level;
mod detail;
mod error;
mod writer;
mod global;
pub mod console;
pub mod file_logger;
pub mod template;

pub use traits::{Logger, LoggerExt, SharedLogger};
pub use noop::NoOpLogger;
pub use level::{LogLevel, ParseLevelError};
pub use detail::ErrorDetail;
pub use error::LogWriteError;
pub use writer::{LogWriter, CONSOLE_TIMESTAMP_FORMAT};
pub use global::global;
pub use console::{ConsoleSink, MemorySink, Segment, SharedSink, StdoutSink};
pub use template::TemplateError;

// Callers pass colors to `LogWriter::custom`
pub use crossterm::style::Color;
