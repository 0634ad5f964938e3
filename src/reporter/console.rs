//! A reporter that renders diagnostics as conventional compiler output.

use crate::error::ReportError;
use crate::reporter::build_reporter::BuildReporter;
use crate::reporter::diagnostic::{Diagnostic, MessageImportance};
use std::io::{self, Write};
use std::sync::Mutex;

/// Writes diagnostics as `file(line,col): severity code: message` lines.
///
/// A stand-in host for running pipelines outside a real build system, and
/// the usual target of demo configurations. Output goes through a locked
/// writer, so one reporter may be shared across threads.
pub struct ConsoleReporter<W: Write + Send> {
    out: Mutex<W>,
}

impl ConsoleReporter<io::Stderr> {
    /// Creates a reporter writing to standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> ConsoleReporter<W> {
    /// Creates a reporter writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            out: Mutex::new(writer),
        }
    }

    /// Consumes the reporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_line(&self, line: String) -> Result<(), ReportError> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| ReportError::new("console writer lock poisoned"))?;

        out.write_all(line.as_bytes())
            .and_then(|()| out.write_all(b"\n"))
            .and_then(|()| out.flush())
            .map_err(|e| ReportError::with_source("failed to write diagnostic", e))
    }
}

impl<W: Write + Send> BuildReporter for ConsoleReporter<W> {
    fn log_message(
        &self,
        diagnostic: &Diagnostic,
        _importance: MessageImportance,
    ) -> Result<(), ReportError> {
        self.write_line(format_line("message", diagnostic))
    }

    fn log_warning(&self, diagnostic: &Diagnostic) -> Result<(), ReportError> {
        self.write_line(format_line("warning", diagnostic))
    }

    fn log_error(&self, diagnostic: &Diagnostic) -> Result<(), ReportError> {
        self.write_line(format_line("error", diagnostic))
    }
}

fn format_line(keyword: &str, diagnostic: &Diagnostic) -> String {
    let mut line = String::new();
    if let Some(file) = &diagnostic.file {
        line.push_str(file);
        line.push_str(&format_position(diagnostic));
        line.push_str(": ");
    }
    if let Some(subcategory) = &diagnostic.subcategory {
        line.push_str(subcategory);
        line.push(' ');
    }
    line.push_str(keyword);
    if let Some(code) = &diagnostic.code {
        line.push(' ');
        line.push_str(code);
    }
    line.push_str(": ");
    line.push_str(&diagnostic.message);
    line
}

fn format_position(diagnostic: &Diagnostic) -> String {
    if diagnostic.line == 0 {
        return String::new();
    }
    if diagnostic.end_line > 0 {
        format!(
            "({},{},{},{})",
            diagnostic.line, diagnostic.column, diagnostic.end_line, diagnostic.end_column
        )
    } else if diagnostic.column > 0 {
        format!("({},{})", diagnostic.line, diagnostic.column)
    } else {
        format!("({})", diagnostic.line)
    }
}
