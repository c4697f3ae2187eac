//! Append-only file sink
//!
//! Each record opens the file, appends, flushes and closes it again. No handle
//! is held between records, so every record is complete on disk once the call
//! returns and the path can change freely between calls.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Local};

/// Date-time format used for file records, regardless of console settings
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Format one file record: `[<date time>] [<TAG>] <message>`
pub fn format_record(now: &DateTime<Local>, tag: &str, message: &str) -> String {
    format!("[{}] [{}] {}", now.format(FILE_TIMESTAMP_FORMAT), tag, message)
}

/// Append `record` plus a line terminator to the file at `path`
pub fn append_record(path: &Path, record: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", record)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};
    use tempfile::tempdir;

    #[test]
    fn test_format_record() {
        let now = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(
            format_record(&now, "WARN", "disk almost full"),
            "[2024-03-09 07:05:01.000] [WARN] disk almost full"
        );
    }

    #[test]
    fn test_timestamp_parses_back() {
        let line = format_record(&Local::now(), "INFO", "x");
        let stamp = &line[1..24];
        assert!(NaiveDateTime::parse_from_str(stamp, FILE_TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_append_creates_and_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");

        append_record(&path, "first").unwrap();
        append_record(&path, "second\n  Exception: E: m").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n  Exception: E: m\n");
    }

    #[test]
    fn test_append_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("app.log");
        assert!(append_record(&path, "lost").is_err());
    }
}
