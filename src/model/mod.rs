//! Data model shared by loggers and targets.
//!
//! # Data Flow
//! ```text
//! Logger::log(level, message, args)
//!     → level.rs (gate comparisons, numeric)
//!     → event.rs (one immutable LogEvent per dispatch)
//!     → &LogEvent handed to every accepting target
//! ```
//!
//! # Design Decisions
//! - Events are never mutated after construction
//! - An event names its logger by category, it does not own it

pub mod event;
pub mod level;

pub use event::{Cause, LogEvent};
pub use level::{Level, ParseLevelError};
