//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the `tracing` subscriber
//! - Report isolated target failures
//!
//! # Design Decisions
//! - JSON format for production, pretty format for development
//! - Filter comes from `RUST_LOG` when set, config otherwise

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::observability::metrics;
use crate::target::{FailureReporter, TargetFailure};

/// Install the global subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init_tracing(default_filter: &str, json: bool) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json()))
        .with((!json).then(|| fmt::layer()))
        .try_init()
}

/// Default failure reporter: one `tracing` error plus a counter bump.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFailureReporter;

impl FailureReporter for TracingFailureReporter {
    fn report(&self, failure: &TargetFailure<'_>) {
        metrics::record_target_failure(failure.target);
        tracing::error!(
            target_name = %failure.target,
            category = %failure.category,
            level = %failure.level,
            error = %failure.error,
            "Log target failed to accept event"
        );
    }
}
