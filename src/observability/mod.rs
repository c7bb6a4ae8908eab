//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Crate diagnostics and bridged events:
//!     → logging.rs (tracing subscriber, failure reporter)
//!     → metrics.rs (dispatch and failure counters)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Metrics are cheap (atomic increments)
//! - Failure reports go to `tracing`, never back into a dispatching logger

pub mod logging;
pub mod metrics;
