//! Process-wide default writer
//!
//! Components should normally receive a `LogWriter` (or a `SharedLogger`)
//! explicitly. This instance exists for binaries that want one writer for the
//! whole process without threading it through.

use once_cell::sync::Lazy;

use super::writer::LogWriter;

static GLOBAL: Lazy<LogWriter> = Lazy::new(LogWriter::new);

/// The process-wide writer: default configuration, stdout console
pub fn global() -> &'static LogWriter {
    &GLOBAL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(global(), global()));

        // Keep stdout quiet; other tests never touch the global writer
        global().set_min_level(LogLevel::Fatal);
        global().info("not shown");
        assert!(!global().is_enabled(LogLevel::Error));
        assert!(global().is_enabled(LogLevel::Fatal));
    }
}
