//! Collaborators injected into every logger.

use std::fmt;
use std::sync::Arc;

use crate::format::{BasicPrettyPrinter, PrettyPrinter};
use crate::gate::{AtomicLevelGate, LevelGate};
use crate::observability::logging::TracingFailureReporter;
use crate::target::FailureReporter;

/// Gate, printer and failure reporter shared by the loggers of a registry.
#[derive(Clone)]
pub struct LogContext {
    gate: Arc<dyn LevelGate>,
    printer: Arc<dyn PrettyPrinter>,
    reporter: Arc<dyn FailureReporter>,
}

impl LogContext {
    /// Context with the given gate, the basic printer and the tracing reporter.
    pub fn new(gate: Arc<dyn LevelGate>) -> Self {
        Self {
            gate,
            printer: Arc::new(BasicPrettyPrinter::default()),
            reporter: Arc::new(TracingFailureReporter),
        }
    }

    pub fn with_printer(mut self, printer: Arc<dyn PrettyPrinter>) -> Self {
        self.printer = printer;
        self
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn FailureReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn gate(&self) -> &dyn LevelGate {
        self.gate.as_ref()
    }

    pub fn printer(&self) -> &dyn PrettyPrinter {
        self.printer.as_ref()
    }

    pub fn reporter(&self) -> &dyn FailureReporter {
        self.reporter.as_ref()
    }
}

impl Default for LogContext {
    fn default() -> Self {
        Self::new(Arc::new(AtomicLevelGate::default()))
    }
}

impl fmt::Debug for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogContext")
            .field("target_level", &self.gate.target_level())
            .finish_non_exhaustive()
    }
}
