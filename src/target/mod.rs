//! Sink interface.
//!
//! # Data Flow
//! ```text
//! Logger dispatch (per snapshot entry)
//!     → level check against Target::level()
//!     → Target::log_event(&LogEvent)
//!     → Err / panic → failure.rs (FailureReporter)
//! ```
//!
//! # Design Decisions
//! - Targets are shared as `Arc<dyn Target>`; identity is the allocation
//! - A target failure is isolated and reported, never returned to the caller
//! - Writing, buffering and formatting are the target's own business

pub mod failure;
pub mod tracing_target;

use std::sync::Arc;
use thiserror::Error;

use crate::model::{Level, LogEvent};

pub use failure::{FailureReporter, TargetFailure};
pub use tracing_target::TracingTarget;

/// Errors a target may return from [`Target::log_event`].
#[derive(Debug, Error)]
pub enum TargetError {
    /// The target refused the event.
    #[error("event rejected: {0}")]
    Rejected(String),

    /// Underlying I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The target panicked while handling the event.
    #[error("target panicked: {0}")]
    Panicked(String),
}

/// A sink that receives dispatched events.
pub trait Target: Send + Sync {
    /// Name used in diagnostics and failure reports.
    fn name(&self) -> &str;

    /// Minimum level this target accepts.
    fn level(&self) -> Level;

    /// Receive one event. The event is shared with other targets and must be
    /// treated as read-only.
    fn log_event(&self, event: &LogEvent) -> Result<(), TargetError>;
}

/// Identity comparison for shared targets.
///
/// Compares data pointers only, so two `Arc`s to the same target match even
/// if they were coerced to `dyn Target` through different vtables.
pub fn same_target(a: &Arc<dyn Target>, b: &Arc<dyn Target>) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}
