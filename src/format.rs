//! Property value formatting used while rendering message templates.

use serde_json::Value;

/// Formats property values into message text.
///
/// Plays the role of a format/culture provider: a sink holds one formatter
/// for its lifetime and applies it to every rendered template hole. Supply a
/// custom implementation to control how numbers or structured values appear
/// in forwarded messages.
pub trait ValueFormatter: Send + Sync {
    /// Renders a single property value as display text.
    fn format_value(&self, value: &Value) -> String;
}

/// The formatter used when none is configured.
///
/// Strings render without quotes; numbers, booleans, and structured values
/// render in their canonical JSON form.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormatter;

impl ValueFormatter for DefaultFormatter {
    fn format_value(&self, value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strings_render_unquoted() {
        assert_eq!(DefaultFormatter.format_value(&json!("a.txt")), "a.txt");
    }

    #[test]
    fn test_numbers_and_bools_render_canonically() {
        assert_eq!(DefaultFormatter.format_value(&json!(42)), "42");
        assert_eq!(DefaultFormatter.format_value(&json!(2.5)), "2.5");
        assert_eq!(DefaultFormatter.format_value(&json!(true)), "true");
    }

    #[test]
    fn test_structured_values_render_as_compact_json() {
        assert_eq!(
            DefaultFormatter.format_value(&json!({"a": 1})),
            r#"{"a":1}"#
        );
        assert_eq!(DefaultFormatter.format_value(&json!([1, 2])), "[1,2]");
    }
}
