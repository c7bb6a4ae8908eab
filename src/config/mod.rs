//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → LogConfig (validated, immutable)
//!     → lifecycle::startup applies it to the registry
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → sent over a channel, applied by the owner of the registry
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - An invalid reload is logged and ignored; the running config stays

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{LogConfig, ObservabilityConfig, PrinterConfig, TargetConfig};
pub use validation::ValidationError;
pub use watcher::ConfigWatcher;
