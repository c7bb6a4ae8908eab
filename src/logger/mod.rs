//! Category loggers.
//!
//! # Data Flow
//! ```text
//! logger.warn(message, LogArgs)
//!     → dispatch.rs: Logger::dispatch(level, message, args, verify_level)
//!         → targets.rs snapshot (lock-free load)
//!         → fast exit: no targets / gate rejects level
//!         → format::substitute (only when params present)
//!         → LogEvent::new
//!         → per target: level check → Target::log_event
//!         → failures → FailureReporter (context.rs)
//! ```
//!
//! # Design Decisions
//! - Target list is copy-on-write; dispatch never holds a lock while calling targets
//! - Collaborators (gate, printer, reporter) are injected through `LogContext`
//! - Five level-named wrappers over one canonical dispatch method

pub mod args;
pub mod context;
pub mod dispatch;
pub mod targets;

pub use args::LogArgs;
pub use context::LogContext;
pub use dispatch::Logger;
pub use targets::{TargetSet, TargetSnapshot};
