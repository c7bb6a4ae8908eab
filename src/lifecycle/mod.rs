//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Build registry → Bind targets
//!
//! Reload (startup.rs):
//!     Watcher or SIGHUP → Load config → LoggingRuntime::apply
//!
//! Shutdown (shutdown.rs):
//!     Signal received or input exhausted → Stop reading → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//!     SIGHUP → Trigger config reload
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then registry, then targets
//! - A failed reload never tears down the running configuration

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use signals::{SignalAction, Signals};
pub use startup::LoggingRuntime;
