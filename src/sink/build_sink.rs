//! The sink that redirects log events to the build host.

use crate::error::ReportError;
use crate::event::{scalar_string, scalar_u32, LogEvent, Severity};
use crate::format::{DefaultFormatter, ValueFormatter};
use crate::properties::BuildProperties;
use crate::reporter::{reporter_for_task, BuildReporter, BuildTask, Diagnostic, MessageImportance};
use crate::sink::event_sink::LogEventSink;
use std::sync::Arc;

/// Redirects log events to a build system's diagnostic reporter.
///
/// The sink holds two collaborators for its lifetime: the reporting handle
/// and the formatter used while rendering messages. It keeps no state
/// between events, so one instance may be shared across threads whenever the
/// underlying reporter supports concurrent use.
///
/// Each event is translated independently: the recognized properties (see
/// [`BuildProperties`]) become the diagnostic's positional metadata, the
/// message template is rendered, any attached failure is appended to the
/// message text, and exactly one reporter entry point is invoked based on
/// the event's severity.
///
/// # Example
///
/// ```
/// use buildlog_sink::prelude::*;
/// use buildlog_sink::reporter::ConsoleReporter;
/// use std::sync::Arc;
///
/// let sink = BuildLogSink::new(Arc::new(ConsoleReporter::stderr()));
/// let event = LogEvent::new(Severity::Warning, "disk low")
///     .with_property(BuildProperties::FILE, "a.txt")
///     .with_property(BuildProperties::LINE_NUMBER, 42);
/// sink.emit(&event)?;
/// # Ok::<(), buildlog_sink::ReportError>(())
/// ```
pub struct BuildLogSink {
    reporter: Arc<dyn BuildReporter>,
    formatter: Box<dyn ValueFormatter>,
}

impl BuildLogSink {
    /// Creates a sink bound to a reporting handle, with default formatting.
    pub fn new(reporter: Arc<dyn BuildReporter>) -> Self {
        Self {
            reporter,
            formatter: Box::new(DefaultFormatter),
        }
    }

    /// Creates a sink with a custom value formatter.
    pub fn with_formatter(
        reporter: Arc<dyn BuildReporter>,
        formatter: Box<dyn ValueFormatter>,
    ) -> Self {
        Self {
            reporter,
            formatter,
        }
    }

    /// Creates a sink from a build task, deriving its reporting handle.
    ///
    /// Behaves identically to constructing from the handle directly.
    pub fn for_task(task: &dyn BuildTask) -> Self {
        Self::new(reporter_for_task(task))
    }

    fn translate(&self, event: &LogEvent) -> Diagnostic {
        let mut message = event.render_message(self.formatter.as_ref());
        if let Some(error) = &event.error {
            message.push('\n');
            message.push_str(&error_chain(error.as_ref()));
        }

        Diagnostic {
            subcategory: scalar_string(event.property(BuildProperties::SUBCATEGORY)),
            code: scalar_string(event.property(BuildProperties::MESSAGE_CODE)),
            help_keyword: scalar_string(event.property(BuildProperties::HELP_KEYWORD)),
            file: scalar_string(event.property(BuildProperties::FILE)),
            line: scalar_u32(event.property(BuildProperties::LINE_NUMBER)),
            column: scalar_u32(event.property(BuildProperties::COLUMN_NUMBER)),
            end_line: scalar_u32(event.property(BuildProperties::END_LINE_NUMBER)),
            end_column: scalar_u32(event.property(BuildProperties::END_COLUMN_NUMBER)),
            message,
        }
    }
}

impl LogEventSink for BuildLogSink {
    fn emit(&self, event: &LogEvent) -> Result<(), ReportError> {
        let diagnostic = self.translate(event);
        match event.level {
            Severity::Verbose => self
                .reporter
                .log_message(&diagnostic, MessageImportance::Low),
            Severity::Debug => self
                .reporter
                .log_message(&diagnostic, MessageImportance::Normal),
            Severity::Info => self
                .reporter
                .log_message(&diagnostic, MessageImportance::High),
            Severity::Warning => self.reporter.log_warning(&diagnostic),
            // The host has no separate fatal channel.
            Severity::Error | Severity::Fatal => self.reporter.log_error(&diagnostic),
        }
    }
}

/// Full textual representation of a failure, including its cause chain.
fn error_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut text = error.to_string();
    let mut cause = error.source();
    while let Some(current) = cause {
        text.push_str("\ncaused by: ");
        text.push_str(&current.to_string());
        cause = current.source();
    }
    text
}
