//! Per-category logger and its dispatch loop.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::format::substitute;
use crate::logger::args::LogArgs;
use crate::logger::context::LogContext;
use crate::logger::targets::{TargetSet, TargetSnapshot};
use crate::model::{Level, LogEvent};
use crate::observability::metrics;
use crate::target::{Target, TargetError, TargetFailure};

/// Fans log calls for one category out to its registered targets.
///
/// All methods take `&self` and may be called from any number of threads.
/// Target registration and dispatch never block each other: a dispatch
/// works on the snapshot of targets taken when it started.
pub struct Logger {
    category: ArcSwap<String>,
    targets: TargetSet,
    context: LogContext,
}

impl Logger {
    pub fn new(category: impl Into<String>, context: LogContext) -> Self {
        Self {
            category: ArcSwap::from_pointee(category.into()),
            targets: TargetSet::new(),
            context,
        }
    }

    /// Category this logger emits for.
    pub fn category(&self) -> Arc<String> {
        self.category.load_full()
    }

    /// Rename the logger. Only events constructed afterwards carry the new name.
    pub fn set_category(&self, category: impl Into<String>) {
        self.category.store(Arc::new(category.into()));
    }

    pub fn context(&self) -> &LogContext {
        &self.context
    }

    /// Whether at least one target is registered.
    ///
    /// Lets call sites skip building expensive messages nobody will see.
    pub fn has_target(&self) -> bool {
        !self.targets.is_empty()
    }

    /// Snapshot of the registered targets.
    pub fn targets(&self) -> TargetSnapshot {
        self.targets.snapshot()
    }

    /// Register `target`. Registering a target twice has no effect.
    pub fn add_target(&self, target: Arc<dyn Target>) {
        let name = target.name().to_string();
        if self.targets.add(target) {
            tracing::debug!(category = %self.category.load().as_str(), target_name = %name, "Target added");
        }
    }

    /// Unregister `target`. Unknown targets are ignored.
    pub fn remove_target(&self, target: &Arc<dyn Target>) {
        if self.targets.remove(target) {
            tracing::debug!(category = %self.category.load().as_str(), target_name = %target.name(), "Target removed");
        }
    }

    pub fn debug(&self, message: &str, args: LogArgs) {
        self.log(Level::DEBUG, message, args);
    }

    pub fn info(&self, message: &str, args: LogArgs) {
        self.log(Level::INFO, message, args);
    }

    pub fn warn(&self, message: &str, args: LogArgs) {
        self.log(Level::WARN, message, args);
    }

    pub fn error(&self, message: &str, args: LogArgs) {
        self.log(Level::ERROR, message, args);
    }

    pub fn fatal(&self, message: &str, args: LogArgs) {
        self.log(Level::FATAL, message, args);
    }

    /// Dispatch at `level`, honouring the gate and each target's level.
    pub fn log(&self, level: Level, message: &str, args: LogArgs) {
        self.dispatch(level, message, args, true);
    }

    /// Dispatch to every registered target regardless of any level.
    ///
    /// Administrative escape hatch for output that must never be filtered
    /// (startup banners, audit records). Do not use for ordinary logging.
    pub fn log_forced(&self, level: Level, message: &str, args: LogArgs) {
        self.dispatch(level, message, args, false);
    }

    /// The canonical dispatch operation.
    ///
    /// With `verify_level` false both the gate and the per-target levels are
    /// bypassed. Nothing is formatted or constructed when no target is
    /// registered or the gate rejects `level`. Failures of individual targets
    /// are handed to the context's reporter; this method never fails.
    pub fn dispatch(&self, level: Level, message: &str, args: LogArgs, verify_level: bool) {
        let targets = self.targets.snapshot();
        if targets.is_empty() {
            return;
        }
        if verify_level && level < self.context.gate().target_level() {
            return;
        }

        let (params, cause) = args.into_parts();
        let message = match params {
            Some(params) => substitute(message, &params, self.context.printer()),
            None => message.to_string(),
        };
        let event = LogEvent::new(self.category.load_full(), message, level, cause);
        metrics::record_event(level);

        for target in targets.iter() {
            if verify_level && level < target.level() {
                continue;
            }
            self.deliver(target.as_ref(), &event);
        }
    }

    fn deliver(&self, target: &dyn Target, event: &LogEvent) {
        let error = match panic::catch_unwind(AssertUnwindSafe(|| target.log_event(event))) {
            Ok(Ok(())) => return,
            Ok(Err(e)) => e,
            Err(payload) => TargetError::Panicked(panic_message(payload.as_ref())),
        };

        let failure = TargetFailure {
            target: target.name(),
            category: event.category(),
            level: event.level(),
            error: &error,
        };
        let reporter = self.context.reporter();
        // A broken reporter must not turn into a caller failure either.
        if panic::catch_unwind(AssertUnwindSafe(|| reporter.report(&failure))).is_err() {
            eprintln!(
                "fanout-log: failure reporter panicked while reporting target `{}`: {}",
                failure.target, error
            );
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("category", &self.category.load().as_str())
            .field("targets", &self.targets.len())
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
