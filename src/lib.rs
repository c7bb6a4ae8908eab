//! Category loggers that fan events out to pluggable targets.
//!
//! A [`Logger`] belongs to a category, checks each event against a
//! process-wide [`LevelGate`](gate::LevelGate), substitutes `{0}`-style
//! parameters and hands the resulting [`LogEvent`] to every registered
//! [`Target`] whose own level admits it. Target failures are isolated and
//! reported, never returned to the caller.

// Core subsystems
pub mod format;
pub mod gate;
pub mod logger;
pub mod model;
pub mod registry;
pub mod target;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::LogConfig;
pub use lifecycle::LoggingRuntime;
pub use logger::{LogArgs, LogContext, Logger};
pub use model::{Level, LogEvent};
pub use registry::LogRegistry;
pub use target::{Target, TargetError};
