/// The structured log event consumed by sinks.
use crate::event::severity::Severity;
use crate::event::template;
use crate::format::ValueFormatter;
use serde_json::Value;
use std::collections::BTreeMap;

/// The failure object type that can be attached to an event.
pub type EventError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A single structured log event.
///
/// Events are immutable from a sink's perspective: sinks read the level,
/// render the message, and consult the property bag, but never alter or
/// retain the record.
///
/// # Example
///
/// ```
/// use buildlog_sink::prelude::*;
///
/// let event = LogEvent::new(Severity::Warning, "{Disk} is low on space")
///     .with_property("Disk", "sda1")
///     .with_property(BuildProperties::FILE, "fstab")
///     .with_property(BuildProperties::LINE_NUMBER, 3);
///
/// let message = event.render_message(&DefaultFormatter);
/// assert_eq!(message, "sda1 is low on space");
/// ```
#[derive(Debug)]
pub struct LogEvent {
    /// The severity level of the event.
    pub level: Severity,
    /// The raw message template, before property substitution.
    pub template: String,
    /// Named properties attached to the event.
    pub properties: BTreeMap<String, Value>,
    /// The failure that caused the event, if any.
    pub error: Option<EventError>,
}

impl LogEvent {
    /// Creates an event with no properties and no attached failure.
    pub fn new(level: Severity, template: impl Into<String>) -> Self {
        Self {
            level,
            template: template.into(),
            properties: BTreeMap::new(),
            error: None,
        }
    }

    /// Attaches a named property, replacing any previous value for the name.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Attaches the failure that caused this event.
    pub fn with_error(mut self, error: impl Into<EventError>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Looks up a property by exact name.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Renders the message template with the given formatter.
    pub fn render_message(&self, formatter: &dyn ValueFormatter) -> String {
        template::render(&self.template, &self.properties, formatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::DefaultFormatter;
    use serde_json::json;

    #[test]
    fn test_new_event_is_empty() {
        let event = LogEvent::new(Severity::Info, "hello");
        assert_eq!(event.level, Severity::Info);
        assert_eq!(event.template, "hello");
        assert!(event.properties.is_empty());
        assert!(event.error.is_none());
    }

    #[test]
    fn test_with_property_accumulates() {
        let event = LogEvent::new(Severity::Debug, "probe")
            .with_property("File", "a.txt")
            .with_property("LineNumber", 42);

        assert_eq!(event.property("File"), Some(&json!("a.txt")));
        assert_eq!(event.property("LineNumber"), Some(&json!(42)));
        assert_eq!(event.property("Missing"), None);
    }

    #[test]
    fn test_with_property_replaces_existing_value() {
        let event = LogEvent::new(Severity::Debug, "probe")
            .with_property("File", "a.txt")
            .with_property("File", "b.txt");

        assert_eq!(event.property("File"), Some(&json!("b.txt")));
    }

    #[test]
    fn test_with_error_attaches_failure() {
        let event = LogEvent::new(Severity::Fatal, "crash")
            .with_error(std::io::Error::new(std::io::ErrorKind::Other, "boom"));

        assert!(event.error.is_some());
    }

    #[test]
    fn test_render_message_substitutes_properties() {
        let event =
            LogEvent::new(Severity::Info, "compiled {Count} units").with_property("Count", 3);

        assert_eq!(
            event.render_message(&DefaultFormatter),
            "compiled 3 units"
        );
    }
}
