//! The immutable record handed to every target.

use std::error::Error;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::model::level::Level;

/// Failure cause attached to an event.
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;

/// One log occurrence.
///
/// Built once per dispatch and shared by reference with every target that
/// accepts it. The originating logger is recorded by its category label
/// only, so outstanding events never keep a logger alive.
#[derive(Debug, Clone)]
pub struct LogEvent {
    category: Arc<String>,
    message: String,
    level: Level,
    timestamp: SystemTime,
    cause: Option<Cause>,
}

impl LogEvent {
    /// Create an event stamped with the current time.
    pub fn new(category: Arc<String>, message: String, level: Level, cause: Option<Cause>) -> Self {
        Self {
            category,
            message,
            level,
            timestamp: SystemTime::now(),
            cause,
        }
    }

    /// Category of the logger that produced this event.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Fully substituted message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }

    /// Milliseconds since the unix epoch.
    pub fn timestamp_ms(&self) -> u128 {
        self.timestamp
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis()
    }

    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}
