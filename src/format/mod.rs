//! Message formatting.
//!
//! # Data Flow
//! ```text
//! LogArgs.params (serde_json::Value list)
//!     → pretty.rs (PrettyPrinter renders each non-null value)
//!     → substitution.rs (replace `{i}` tokens, index order)
//!     → final message text for the LogEvent
//! ```
//!
//! # Design Decisions
//! - Parameters are JSON values so any serializable caller data can be passed
//! - Null parameters never reach the printer; they render as `null`
//! - Substitution only runs once a dispatch is known to have an audience

pub mod pretty;
pub mod substitution;

pub use pretty::{BasicPrettyPrinter, PrettyPrinter};
pub use substitution::substitute;
