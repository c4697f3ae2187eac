//! Failures inside the write path
//!
//! None of these ever reach the caller of an emit operation. The writer turns
//! them into a `[LOGGER ERROR]` console line, except file failures which are
//! dropped silently.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::template::TemplateError;

#[derive(Debug, Error)]
pub enum LogWriteError {
    #[error("Formatting error: {0}")]
    Format(#[from] TemplateError),

    #[error("Console write failed: {0}")]
    Console(#[source] io::Error),

    #[error("Failed to append to {}: {source}", .path.display())]
    File { path: PathBuf, source: io::Error },
}

impl LogWriteError {
    /// Whether this failure is reported on the console
    pub fn is_reported(&self) -> bool {
        !matches!(self, LogWriteError::File { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporting_policy() {
        let format = LogWriteError::from(TemplateError::UnbalancedBrace(0));
        assert!(format.is_reported());
        assert_eq!(format.to_string(), "Formatting error: Unbalanced brace at byte 0");

        let console = LogWriteError::Console(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(console.is_reported());

        let file = LogWriteError::File {
            path: PathBuf::from("/readonly/app.log"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!file.is_reported());
        assert_eq!(file.to_string(), "Failed to append to /readonly/app.log: denied");
    }
}
