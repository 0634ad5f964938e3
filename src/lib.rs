#![forbid(unsafe_code)]

pub mod error;
pub mod event;
pub mod format;
pub mod pipeline;
pub mod properties;
pub mod reporter;
pub mod sink;

// Re-exports
pub use crate::error::{ReportError, UnknownSeverity};
pub use crate::event::{LogEvent, Severity};
pub use crate::properties::BuildProperties;
pub use crate::sink::{BuildLogSink, LogEventSink};

///
/// Expose all structures required by virtually any producer or host binding
///
/// ```
/// use buildlog_sink::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ReportError, UnknownSeverity};
    pub use crate::event::{EventError, LogEvent, Severity};
    pub use crate::format::{DefaultFormatter, ValueFormatter};
    pub use crate::pipeline::{LogPipeline, LogPipelineBuilder};
    pub use crate::properties::BuildProperties;
    pub use crate::reporter::{BuildReporter, BuildTask, Diagnostic, MessageImportance};
    pub use crate::sink::{BuildLogSink, LogEventSink};
}
