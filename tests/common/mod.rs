//! Shared targets and helpers for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use fanout_log::gate::FixedLevelGate;
use fanout_log::logger::{LogContext, Logger};
use fanout_log::model::{Level, LogEvent};
use fanout_log::target::{FailureReporter, Target, TargetError, TargetFailure};

/// One delivered event, reduced to what tests assert on.
#[derive(Debug, Clone, PartialEq)]
pub struct Received {
    pub category: String,
    pub message: String,
    pub level: Level,
    pub cause: Option<String>,
}

/// Target that remembers every event it receives.
pub struct RecordingTarget {
    name: String,
    level: Level,
    events: Mutex<Vec<Received>>,
}

impl RecordingTarget {
    pub fn new(name: &str, level: Level) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            level,
            events: Mutex::new(Vec::new()),
        })
    }

    pub fn events(&self) -> Vec<Received> {
        self.events.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.events().into_iter().map(|e| e.message).collect()
    }

    pub fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

impl Target for RecordingTarget {
    fn name(&self) -> &str {
        &self.name
    }

    fn level(&self) -> Level {
        self.level
    }

    fn log_event(&self, event: &LogEvent) -> Result<(), TargetError> {
        self.events.lock().unwrap().push(Received {
            category: event.category().to_string(),
            message: event.message().to_string(),
            level: event.level(),
            cause: event.cause().map(|c| c.to_string()),
        });
        Ok(())
    }
}

/// Target that rejects everything and counts the attempts.
#[derive(Default)]
pub struct FailingTarget {
    pub attempts: AtomicUsize,
}

impl Target for FailingTarget {
    fn name(&self) -> &str {
        "failing"
    }

    fn level(&self) -> Level {
        Level::ALL
    }

    fn log_event(&self, _event: &LogEvent) -> Result<(), TargetError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(TargetError::Rejected("disk full".to_string()))
    }
}

/// Target that panics on every event.
pub struct PanickingTarget;

impl Target for PanickingTarget {
    fn name(&self) -> &str {
        "panicking"
    }

    fn level(&self) -> Level {
        Level::ALL
    }

    fn log_event(&self, _event: &LogEvent) -> Result<(), TargetError> {
        panic!("sink exploded");
    }
}

/// Failure reporter that keeps `(target, error)` pairs.
#[derive(Default)]
pub struct CapturingReporter {
    failures: Mutex<Vec<(String, String)>>,
}

impl CapturingReporter {
    pub fn failures(&self) -> Vec<(String, String)> {
        self.failures.lock().unwrap().clone()
    }
}

impl FailureReporter for CapturingReporter {
    fn report(&self, failure: &TargetFailure<'_>) {
        self.failures
            .lock()
            .unwrap()
            .push((failure.target.to_string(), failure.error.to_string()));
    }
}

/// Logger behind a fixed gate with the capturing reporter installed.
pub fn gated_logger(category: &str, gate: Level) -> (Logger, Arc<CapturingReporter>) {
    let reporter = Arc::new(CapturingReporter::default());
    let context = LogContext::new(Arc::new(FixedLevelGate(gate))).with_reporter(reporter.clone());
    (Logger::new(category, context), reporter)
}

pub fn as_target<T: Target + 'static>(target: &Arc<T>) -> Arc<dyn Target> {
    target.clone()
}
