//! Fluent assembly of event pipelines.
//!
//! The pipeline is the registration surface producers use to attach sinks:
//! build a [`LogPipeline`], hand it events, and every attached sink sees
//! each event at or above the minimum level. Because the build sink
//! redirects events to another logging system, it is recommended to let all
//! levels pass through; the default minimum level is therefore
//! [`Severity::Verbose`].

use crate::error::ReportError;
use crate::event::{LogEvent, Severity};
use crate::reporter::{BuildReporter, BuildTask};
use crate::sink::{BuildLogSink, LogEventSink};
use std::sync::Arc;

/// Dispatches events to every attached sink, in attachment order.
///
/// # Example
///
/// ```
/// use buildlog_sink::prelude::*;
/// use buildlog_sink::reporter::ConsoleReporter;
/// use std::sync::Arc;
///
/// let pipeline = LogPipeline::builder()
///     .minimum_level(Severity::Info)
///     .write_to_reporter(Arc::new(ConsoleReporter::stderr()))
///     .build();
///
/// pipeline.dispatch(&LogEvent::new(Severity::Info, "build started"))?;
/// # Ok::<(), buildlog_sink::ReportError>(())
/// ```
pub struct LogPipeline {
    minimum_level: Severity,
    sinks: Vec<Box<dyn LogEventSink>>,
}

impl LogPipeline {
    /// Starts building a pipeline.
    pub fn builder() -> LogPipelineBuilder {
        LogPipelineBuilder {
            minimum_level: Severity::Verbose,
            sinks: Vec::new(),
        }
    }

    /// Forwards one event to every sink at or above the minimum level.
    ///
    /// The first sink failure is returned unchanged and later sinks are not
    /// invoked for this event.
    pub fn dispatch(&self, event: &LogEvent) -> Result<(), ReportError> {
        if event.level < self.minimum_level {
            return Ok(());
        }
        for sink in &self.sinks {
            sink.emit(event)?;
        }
        Ok(())
    }

    /// The level below which events are dropped.
    pub fn minimum_level(&self) -> Severity {
        self.minimum_level
    }

    /// The number of attached sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

/// Builder returned by [`LogPipeline::builder`].
pub struct LogPipelineBuilder {
    minimum_level: Severity,
    sinks: Vec<Box<dyn LogEventSink>>,
}

impl LogPipelineBuilder {
    /// Sets the level below which events are dropped.
    pub fn minimum_level(mut self, level: Severity) -> Self {
        self.minimum_level = level;
        self
    }

    /// Attaches any sink.
    pub fn sink(mut self, sink: impl LogEventSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Attaches a build sink for the given task.
    pub fn write_to_build(self, task: &dyn BuildTask) -> Self {
        self.sink(BuildLogSink::for_task(task))
    }

    /// Attaches a build sink bound to the given reporting handle.
    pub fn write_to_reporter(self, reporter: Arc<dyn BuildReporter>) -> Self {
        self.sink(BuildLogSink::new(reporter))
    }

    /// Finishes the pipeline.
    pub fn build(self) -> LogPipeline {
        LogPipeline {
            minimum_level: self.minimum_level,
            sinks: self.sinks,
        }
    }
}
