//! Target that re-emits events through `tracing`.
//!
//! `tracing` needs static callsites, so each severity band maps to a fixed
//! macro invocation. FATAL has no `tracing` equivalent and is emitted as
//! an error with `level = "FATAL"` in its fields.

use std::sync::atomic::{AtomicU16, Ordering};

use crate::model::{Level, LogEvent};
use crate::target::{Target, TargetError};

/// `tracing` target that forwarded events are recorded under.
pub const EVENTS_TARGET: &str = "fanout_log::events";

/// Forwards events to the installed `tracing` subscriber.
#[derive(Debug)]
pub struct TracingTarget {
    name: String,
    level: AtomicU16,
}

impl TracingTarget {
    pub fn new(name: impl Into<String>, level: Level) -> Self {
        Self {
            name: name.into(),
            level: AtomicU16::new(level.raw()),
        }
    }

    /// Change the minimum level. Visible to dispatches that start afterwards.
    pub fn set_level(&self, level: Level) {
        self.level.store(level.raw(), Ordering::Relaxed);
    }
}

impl Target for TracingTarget {
    fn name(&self) -> &str {
        &self.name
    }

    fn level(&self) -> Level {
        Level::from_raw(self.level.load(Ordering::Relaxed))
    }

    fn log_event(&self, event: &LogEvent) -> Result<(), TargetError> {
        let category = event.category();
        let level = event.level();
        let message = event.message();
        let cause = event.cause().map(|c| c.to_string());

        if level >= Level::ERROR {
            tracing::error!(target: EVENTS_TARGET, category, %level, cause = cause.as_deref(), "{}", message);
        } else if level >= Level::WARN {
            tracing::warn!(target: EVENTS_TARGET, category, %level, cause = cause.as_deref(), "{}", message);
        } else if level >= Level::INFO {
            tracing::info!(target: EVENTS_TARGET, category, %level, cause = cause.as_deref(), "{}", message);
        } else if level >= Level::DEBUG {
            tracing::debug!(target: EVENTS_TARGET, category, %level, cause = cause.as_deref(), "{}", message);
        } else {
            tracing::trace!(target: EVENTS_TARGET, category, %level, cause = cause.as_deref(), "{}", message);
        }
        Ok(())
    }
}
