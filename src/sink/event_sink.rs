/// Sink trait definition.
use crate::error::ReportError;
use crate::event::LogEvent;

/// A destination for structured log events.
///
/// Sinks receive each event exactly once, synchronously, in the order the
/// producer emits them. There is no buffering or retry anywhere in the
/// crate: whatever a sink returns is what the producer sees.
pub trait LogEventSink: Send + Sync {
    /// Translates and forwards a single event.
    fn emit(&self, event: &LogEvent) -> Result<(), ReportError>;
}
