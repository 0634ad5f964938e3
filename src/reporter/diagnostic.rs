/// Diagnostic payload delivered to the build host.
use strum_macros::{Display, EnumString};

/// The relative importance of an informational build message.
///
/// Build hosts use this to decide which messages appear at a given
/// verbosity; warnings and errors always appear and carry no importance.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum MessageImportance {
    /// Shown only at the most detailed verbosity.
    Low,
    /// Shown at normal verbosity.
    #[default]
    Normal,
    /// Shown even at quiet verbosity.
    High,
}

/// A diagnostic as the build host receives it.
///
/// String fields are `None` when the producing event did not carry the
/// corresponding property; positions are `0` when unset. The message text is
/// fully rendered, including any appended failure detail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostic {
    /// The message's subcategory.
    pub subcategory: Option<String>,
    /// The message's error or warning code.
    pub code: Option<String>,
    /// The help keyword for the host IDE.
    pub help_keyword: Option<String>,
    /// The path to the file causing the message.
    pub file: Option<String>,
    /// The line in the file causing the message.
    pub line: u32,
    /// The column in the file causing the message.
    pub column: u32,
    /// The last line of a range of lines causing the message.
    pub end_line: u32,
    /// The last column of a range of columns causing the message.
    pub end_column: u32,
    /// The fully rendered message text.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic carrying only a message.
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_importance_ordering() {
        assert!(MessageImportance::Low < MessageImportance::Normal);
        assert!(MessageImportance::Normal < MessageImportance::High);
    }

    #[test]
    fn test_importance_display_and_parse() {
        assert_eq!(MessageImportance::Low.to_string(), "low");
        assert_eq!(MessageImportance::High.to_string(), "high");
        assert_eq!(
            MessageImportance::from_str("normal").unwrap(),
            MessageImportance::Normal
        );
        assert!(MessageImportance::from_str("urgent").is_err());
    }

    #[test]
    fn test_importance_default() {
        assert_eq!(MessageImportance::default(), MessageImportance::Normal);
    }

    #[test]
    fn test_diagnostic_default_is_empty() {
        let diagnostic = Diagnostic::default();
        assert!(diagnostic.subcategory.is_none());
        assert!(diagnostic.code.is_none());
        assert!(diagnostic.help_keyword.is_none());
        assert!(diagnostic.file.is_none());
        assert_eq!(diagnostic.line, 0);
        assert_eq!(diagnostic.column, 0);
        assert_eq!(diagnostic.end_line, 0);
        assert_eq!(diagnostic.end_column, 0);
        assert!(diagnostic.message.is_empty());
    }

    #[test]
    fn test_message_only() {
        let diagnostic = Diagnostic::message_only("built ok");
        assert_eq!(diagnostic.message, "built ok");
        assert_eq!(
            diagnostic,
            Diagnostic {
                message: "built ok".to_string(),
                ..Diagnostic::default()
            }
        );
    }
}
