mod bridge;
mod log_event;
mod property;
mod severity;
mod template;

// Re-exporting all public structures
pub use log_event::{EventError, LogEvent};
pub use property::{scalar_string, scalar_u32};
pub use severity::Severity;
