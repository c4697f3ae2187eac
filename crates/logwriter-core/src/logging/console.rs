//! Console sinks

use std::io::{self, Write};
use std::sync::Arc;

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use parking_lot::Mutex;

/// A piece of a console line, optionally colored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub color: Option<Color>,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn colored(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

/// Destination for console output
///
/// Implementations:
/// - `StdoutSink`: Colored terminal output on stdout
/// - `MemorySink`: Captures plain text, for tests and embedding hosts
pub trait ConsoleSink: Send + Sync {
    /// Write one logical line. Segment text may itself contain newlines.
    fn write_line(&self, segments: &[Segment]) -> io::Result<()>;

    /// Clear the display
    fn clear(&self) -> io::Result<()>;
}

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn ConsoleSink>;

/// Concatenate segment text, dropping colors
pub fn plain_text(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

/// Writes to stdout, coloring segments with ANSI attributes
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl ConsoleSink for StdoutSink {
    fn write_line(&self, segments: &[Segment]) -> io::Result<()> {
        let mut out = io::stdout().lock();
        for segment in segments {
            match segment.color {
                Some(color) => {
                    out.queue(SetForegroundColor(color))?
                        .queue(Print(&segment.text))?
                        .queue(ResetColor)?;
                }
                None => {
                    out.write_all(segment.text.as_bytes())?;
                }
            }
        }
        out.write_all(b"\n")?;
        out.flush()
    }

    fn clear(&self) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.queue(Clear(ClearType::All))?.queue(MoveTo(0, 0))?;
        out.flush()
    }
}

/// Captures console output in memory
///
/// Clones share the same buffer, so a test can keep one handle and give the
/// other to a `LogWriter`.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
    clears: Arc<Mutex<usize>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every written line, as plain text; multi-line records are split
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .iter()
            .flat_map(|record| record.split('\n').map(str::to_string))
            .collect()
    }

    /// Every `write_line` call, unsplit
    pub fn records(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// All output joined with newlines
    pub fn contents(&self) -> String {
        self.lines.lock().join("\n")
    }

    /// Number of times the display was cleared
    pub fn clear_count(&self) -> usize {
        *self.clears.lock()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn reset(&self) {
        self.lines.lock().clear();
    }
}

impl ConsoleSink for MemorySink {
    fn write_line(&self, segments: &[Segment]) -> io::Result<()> {
        self.lines.lock().push(plain_text(segments));
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        *self.clears.lock() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        let segments = vec![
            Segment::colored("[INFO] ", Color::Cyan),
            Segment::plain("ready"),
        ];
        assert_eq!(plain_text(&segments), "[INFO] ready");
    }

    #[test]
    fn test_memory_sink_shares_buffer() {
        let sink = MemorySink::new();
        let handle = sink.clone();

        sink.write_line(&[Segment::plain("one")]).unwrap();
        sink.write_line(&[Segment::plain("two\n  three")]).unwrap();
        sink.clear().unwrap();

        assert_eq!(handle.records(), vec!["one", "two\n  three"]);
        assert_eq!(handle.lines(), vec!["one", "two", "  three"]);
        assert_eq!(handle.contents(), "one\ntwo\n  three");
        assert_eq!(handle.clear_count(), 1);

        handle.reset();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_stdout_sink() {
        // Only checks that writing to the real terminal does not fail
        let sink = StdoutSink::new();
        sink.write_line(&[Segment::colored("[OK] ", Color::Green), Segment::plain("stdout sink")])
            .unwrap();
    }
}
