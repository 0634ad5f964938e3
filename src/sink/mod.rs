mod build_sink;
mod event_sink;

// Re-exporting all public structures
pub use build_sink::BuildLogSink;
pub use event_sink::LogEventSink;
