//! Side channel for isolated sink failures.

use crate::model::Level;
use crate::target::TargetError;

/// Everything known about one failed delivery.
#[derive(Debug)]
pub struct TargetFailure<'a> {
    /// Name of the target that failed.
    pub target: &'a str,
    /// Category of the dispatching logger.
    pub category: &'a str,
    /// Level of the event that could not be delivered.
    pub level: Level,
    pub error: &'a TargetError,
}

/// Receives target failures that the dispatch loop swallowed on the
/// caller's behalf.
///
/// Implementations must not log through the logger that failed, or a
/// permanently broken target turns every report into another failure.
pub trait FailureReporter: Send + Sync {
    fn report(&self, failure: &TargetFailure<'_>);
}

impl<F> FailureReporter for F
where
    F: Fn(&TargetFailure<'_>) + Send + Sync,
{
    fn report(&self, failure: &TargetFailure<'_>) {
        self(failure)
    }
}
