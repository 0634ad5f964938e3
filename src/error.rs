/// Error types shared across the crate.
use thiserror::Error;

/// A numeric severity code outside the recognized `0..=5` range.
///
/// Returned by [`Severity::try_from`](crate::event::Severity) when a record
/// producer hands over a level this crate does not know. Forwarding such an
/// event to the wrong host channel would misreport build status, so the
/// conversion rejects instead of defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("severity value {0} is outside the recognized range 0-5")]
pub struct UnknownSeverity(pub i64);

/// Failure raised by a [`BuildReporter`](crate::reporter::BuildReporter)
/// entry point while delivering a diagnostic.
///
/// The sink never produces one of these on its own; it only propagates what
/// the host reporting interface returns.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ReportError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ReportError {
    /// Creates a report error carrying a message only.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a report error wrapping an underlying cause.
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// The human-readable failure description.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_unknown_severity_display() {
        let err = UnknownSeverity(42);
        assert_eq!(
            err.to_string(),
            "severity value 42 is outside the recognized range 0-5"
        );
    }

    #[test]
    fn test_unknown_severity_equality() {
        assert_eq!(UnknownSeverity(7), UnknownSeverity(7));
        assert_ne!(UnknownSeverity(7), UnknownSeverity(-1));
    }

    #[test]
    fn test_report_error_message() {
        let err = ReportError::new("delivery failed");
        assert_eq!(err.message(), "delivery failed");
        assert_eq!(err.to_string(), "delivery failed");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_report_error_with_source() {
        let cause = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = ReportError::with_source("failed to write diagnostic", cause);

        assert_eq!(err.to_string(), "failed to write diagnostic");
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "pipe closed");
    }
}
