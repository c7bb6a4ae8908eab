//! Category registry subsystem.
//!
//! # Data Flow
//! ```text
//! registry.logger("net")
//!     → store.rs (DashMap lookup, create on miss)
//!     → new logger receives matching bindings (binding.rs)
//!
//! registry.add_target(target, categories)
//!     → take the rebind lock
//!     → publish binding (copy-on-write)
//!     → walk existing loggers: add where matching, remove elsewhere
//! ```
//!
//! # Design Decisions
//! - Flat category names, exact matching; no hierarchy
//! - One shared gate per registry
//! - Binding changes are serialized; logger lookup never takes the rebind lock
//! - Loggers are never rekeyed; renaming a logger only changes its events

pub mod binding;
pub mod store;

pub use binding::Binding;
pub use store::LogRegistry;
