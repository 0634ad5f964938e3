/// The richer host object a reporting handle can be derived from.
use crate::reporter::build_reporter::BuildReporter;
use std::sync::Arc;

/// A task executing inside the host build system.
///
/// Tasks own their reporting handle. Sinks constructed from a task behave
/// identically to sinks constructed from the handle directly; the task is
/// only consulted once, at construction.
pub trait BuildTask: Send + Sync {
    /// The reporting handle bound to this task.
    fn reporter(&self) -> Arc<dyn BuildReporter>;
}

/// Derives the reporting handle from a task.
pub fn reporter_for_task(task: &dyn BuildTask) -> Arc<dyn BuildReporter> {
    task.reporter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::console::ConsoleReporter;

    struct FakeTask {
        reporter: Arc<dyn BuildReporter>,
    }

    impl BuildTask for FakeTask {
        fn reporter(&self) -> Arc<dyn BuildReporter> {
            Arc::clone(&self.reporter)
        }
    }

    #[test]
    fn test_reporter_for_task_returns_the_bound_handle() {
        let reporter: Arc<dyn BuildReporter> = Arc::new(ConsoleReporter::new(Vec::new()));
        let task = FakeTask {
            reporter: Arc::clone(&reporter),
        };

        let derived = reporter_for_task(&task);
        assert!(Arc::ptr_eq(&reporter, &derived));
    }
}
