mod build_reporter;
mod console;
mod diagnostic;
mod task;

// Re-exporting all public structures
pub use build_reporter::BuildReporter;
pub use console::ConsoleReporter;
pub use diagnostic::{Diagnostic, MessageImportance};
pub use task::{reporter_for_task, BuildTask};

#[cfg(test)]
pub(crate) use build_reporter::MockBuildReporter;
