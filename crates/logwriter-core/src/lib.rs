//! LogWriter Core
//!
//! Leveled, timestamped messages on the console and optionally in a file,
//! written under a single lock so concurrent records never interleave.
//!
//! ```rust
//! use std::sync::Arc;
//! use logwriter_core::{Logger, LogWriter, LoggerConfig, LogLevel, MemorySink, SharedLogger};
//!
//! let console = MemorySink::new();
//! let writer = Arc::new(LogWriter::with_sink(
//!     LoggerConfig::default().with_display(false, true),
//!     Arc::new(console.clone()),
//! ));
//!
//! writer.set_min_level(LogLevel::Info);
//! writer.header("Startup");
//! writer.success("listening on :8080");
//!
//! // Hand the same writer to components that only need the `Logger` seam
//! let logger: SharedLogger = writer.clone();
//! logger.warn("cache cold");
//!
//! assert_eq!(
//!     console.lines(),
//!     vec!["===========", "  Startup", "===========", "[OK] listening on :8080", "[WARN] cache cold"]
//! );
//! ```

pub mod logging;
pub mod config;

// Re-export commonly used types
pub use logging::{
    Logger, LoggerExt, SharedLogger, NoOpLogger,
    LogLevel, LogWriter, ErrorDetail, LogWriteError, TemplateError,
    ConsoleSink, MemorySink, StdoutSink, Segment, SharedSink, Color,
    global,
};

pub use config::{LoggerConfig, ConfigError, ConfigResult};
