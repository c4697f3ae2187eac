//! Error details attached to a log record

use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::fmt::Write as _;

/// Snapshot of an error taken at the moment it is logged
///
/// Rendered after the message body as:
///
/// ```text
///   Exception: <TypeName>: <message>
///   StackTrace: <trace>            (only when a trace is present)
///   InnerException: <message>      (only when the error has a source)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub type_name: String,
    pub message: String,
    pub stack_trace: Option<String>,
    pub inner: Option<String>,
}

impl ErrorDetail {
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
            stack_trace: None,
            inner: None,
        }
    }

    /// Capture an error: its unqualified type name, its message and its direct source
    pub fn from_error<E: Error + ?Sized>(err: &E) -> Self {
        Self {
            type_name: short_type_name(std::any::type_name::<E>()).to_string(),
            message: err.to_string(),
            stack_trace: None,
            inner: err.source().map(|source| source.to_string()),
        }
    }

    pub fn with_stack_trace(mut self, trace: impl Into<String>) -> Self {
        self.stack_trace = Some(trace.into());
        self
    }

    /// Attach a backtrace if one was actually captured (`RUST_BACKTRACE` set)
    pub fn with_backtrace(mut self, backtrace: &Backtrace) -> Self {
        if backtrace.status() == BacktraceStatus::Captured {
            self.stack_trace = Some(backtrace.to_string());
        }
        self
    }

    pub fn with_inner(mut self, inner: impl Into<String>) -> Self {
        self.inner = Some(inner.into());
        self
    }

    /// Append the exception lines to `out`, each on its own line
    pub(crate) fn render_into(&self, out: &mut String) {
        let _ = write!(out, "\n  Exception: {}: {}", self.type_name, self.message);
        if let Some(trace) = self.stack_trace.as_deref().filter(|t| !t.is_empty()) {
            let _ = write!(out, "\n  StackTrace: {}", trace.trim_end());
        }
        if let Some(inner) = &self.inner {
            let _ = write!(out, "\n  InnerException: {}", inner);
        }
    }
}

impl<E: Error + ?Sized> From<&E> for ErrorDetail {
    fn from(err: &E) -> Self {
        ErrorDetail::from_error(err)
    }
}

/// Strip the module path from a type name, keeping generic arguments untouched
///
/// `std::io::error::Error` becomes `Error`; for trait objects only the first
/// bound is kept, so `dyn core::error::Error + core::marker::Send` becomes `Error`.
fn short_type_name(full: &str) -> &str {
    let full = match full.strip_prefix("dyn ") {
        Some(bounds) => bounds.split(" + ").next().unwrap_or(bounds),
        None => full,
    };
    let head_end = full.find('<').unwrap_or(full.len());
    let start = full[..head_end].rfind("::").map(|i| i + 2).unwrap_or(0);
    &full[start..]
}
