/// Host reporting interface trait definition.
use crate::error::ReportError;
use crate::reporter::diagnostic::{Diagnostic, MessageImportance};

/// The build host's diagnostic reporting interface - enables mocking in tests.
///
/// Implementations deliver diagnostics to the build system's own output or
/// UI. The three entry points mirror the host's ordered severities:
/// informational messages carry an importance tier, warnings and errors do
/// not. All entry points receive the full positional metadata; hosts that
/// cannot display a field simply ignore it.
///
/// A reporter must be safe for concurrent use if the sink holding it is
/// shared across threads; the sink itself adds no synchronization.
#[cfg_attr(test, mockall::automock)]
pub trait BuildReporter: Send + Sync {
    /// Reports an informational message at the given importance.
    fn log_message(
        &self,
        diagnostic: &Diagnostic,
        importance: MessageImportance,
    ) -> Result<(), ReportError>;

    /// Reports a warning.
    fn log_warning(&self, diagnostic: &Diagnostic) -> Result<(), ReportError>;

    /// Reports an error.
    fn log_error(&self, diagnostic: &Diagnostic) -> Result<(), ReportError>;
}
