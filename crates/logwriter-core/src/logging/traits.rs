//! Logger trait definition

use std::sync::Arc;

/// Logging seam for components that receive an injected logger
///
/// Implementations:
/// - `LogWriter`: Console and file output with level filtering
/// - `NoOpLogger`: Silent logger for testing
pub trait Logger: Send + Sync {
    /// Log a debug message
    fn debug(&self, message: &str);

    /// Log an info message
    fn info(&self, message: &str);

    /// Log a success message
    fn success(&self, message: &str);

    /// Log a warning message
    fn warn(&self, message: &str);

    /// Log an error message
    fn error(&self, message: &str);

    /// Log a fatal message
    fn fatal(&self, message: &str);
}

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Extension trait for logging with format arguments
///
/// The arguments are only rendered to a string, which means the message is
/// built even when the record ends up filtered out. Use the `LogWriter`
/// methods directly on hot paths.
pub trait LoggerExt: Logger {
    fn debug_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.debug(&args.to_string());
    }

    fn info_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.info(&args.to_string());
    }

    fn success_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.success(&args.to_string());
    }

    fn warn_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.warn(&args.to_string());
    }

    fn error_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.error(&args.to_string());
    }

    fn fatal_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.fatal(&args.to_string());
    }
}

// Implement LoggerExt for all Logger implementations
impl<T: Logger + ?Sized> LoggerExt for T {}

/// Convenience macros for logging
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::logging::LoggerExt as _;
        $logger.debug_fmt(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::logging::LoggerExt as _;
        $logger.info_fmt(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_success {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::logging::LoggerExt as _;
        $logger.success_fmt(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::logging::LoggerExt as _;
        $logger.warn_fmt(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::logging::LoggerExt as _;
        $logger.error_fmt(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::logging::LoggerExt as _;
        $logger.fatal_fmt(format_args!($($arg)*))
    }};
}
