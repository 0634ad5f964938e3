/// Severity levels for structured log events.
use crate::error::UnknownSeverity;
use strum_macros::{Display, EnumString};

/// The severity level of a log event, ordered from least to most severe.
///
/// The numeric codes are part of the producer contract: `TryFrom<i64>`
/// accepts `0..=5` and rejects everything else with [`UnknownSeverity`], so
/// an event with an unrecognized level can never be constructed, let alone
/// forwarded to the wrong host channel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    /// Tracing detail, hidden at normal build verbosity.
    Verbose = 0,
    /// Internal diagnostics useful when debugging a producer.
    Debug = 1,
    /// Regular informational messages.
    #[default]
    Info = 2,
    /// A problem that does not fail the build.
    Warning = 3,
    /// A problem that fails the build.
    Error = 4,
    /// An unrecoverable failure. The host has no separate fatal channel, so
    /// these are reported through the error entry point.
    Fatal = 5,
}

impl TryFrom<i64> for Severity {
    type Error = UnknownSeverity;

    fn try_from(value: i64) -> Result<Self, UnknownSeverity> {
        match value {
            0 => Ok(Severity::Verbose),
            1 => Ok(Severity::Debug),
            2 => Ok(Severity::Info),
            3 => Ok(Severity::Warning),
            4 => Ok(Severity::Error),
            5 => Ok(Severity::Fatal),
            other => Err(UnknownSeverity(other)),
        }
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => Severity::Verbose,
            log::Level::Debug => Severity::Debug,
            log::Level::Info => Severity::Info,
            log::Level::Warn => Severity::Warning,
            log::Level::Error => Severity::Error,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Verbose.to_string(), "verbose");
        assert_eq!(Severity::Debug.to_string(), "debug");
        assert_eq!(Severity::Info.to_string(), "info");
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Fatal.to_string(), "fatal");
    }

    #[test]
    fn test_severity_from_str() {
        assert_eq!(Severity::from_str("verbose").unwrap(), Severity::Verbose);
        assert_eq!(Severity::from_str("warning").unwrap(), Severity::Warning);
        assert_eq!(Severity::from_str("fatal").unwrap(), Severity::Fatal);
        assert!(Severity::from_str("invalid").is_err());
    }

    #[test]
    fn test_severity_try_from() {
        assert_eq!(Severity::try_from(0).unwrap(), Severity::Verbose);
        assert_eq!(Severity::try_from(1).unwrap(), Severity::Debug);
        assert_eq!(Severity::try_from(2).unwrap(), Severity::Info);
        assert_eq!(Severity::try_from(3).unwrap(), Severity::Warning);
        assert_eq!(Severity::try_from(4).unwrap(), Severity::Error);
        assert_eq!(Severity::try_from(5).unwrap(), Severity::Fatal);
    }

    #[test]
    fn test_severity_try_from_out_of_range() {
        assert_eq!(Severity::try_from(6), Err(UnknownSeverity(6)));
        assert_eq!(Severity::try_from(-1), Err(UnknownSeverity(-1)));
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Verbose < Severity::Debug);
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn test_severity_values() {
        assert_eq!(Severity::Verbose as i64, 0);
        assert_eq!(Severity::Info as i64, 2);
        assert_eq!(Severity::Fatal as i64, 5);
    }

    #[test]
    fn test_severity_from_log_level() {
        assert_eq!(Severity::from(log::Level::Trace), Severity::Verbose);
        assert_eq!(Severity::from(log::Level::Debug), Severity::Debug);
        assert_eq!(Severity::from(log::Level::Info), Severity::Info);
        assert_eq!(Severity::from(log::Level::Warn), Severity::Warning);
        assert_eq!(Severity::from(log::Level::Error), Severity::Error);
    }

    #[test]
    fn test_severity_default() {
        assert_eq!(Severity::default(), Severity::Info);
    }
}
