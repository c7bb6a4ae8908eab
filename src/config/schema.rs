//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::model::Level;

/// Root logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    /// Process-wide minimum level (the gate).
    pub level: Level,

    /// Parameter rendering.
    pub printer: PrinterConfig,

    /// Diagnostics of the logging system itself.
    pub observability: ObservabilityConfig,

    /// Targets and the categories they listen to.
    pub targets: Vec<TargetConfig>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            printer: PrinterConfig::default(),
            observability: ObservabilityConfig::default(),
            targets: vec![TargetConfig {
                name: "stdout".to_string(),
                level: Level::ALL,
                categories: Vec::new(),
            }],
        }
    }
}

/// Pretty-printer settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PrinterConfig {
    /// Maximum rendered length of one parameter, in characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_len: Option<usize>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,

    /// Emit JSON lines instead of the human readable format.
    pub json: bool,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "info,fanout_log::events=trace".to_string(),
            json: false,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

/// One configured target.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TargetConfig {
    /// Unique target name.
    pub name: String,

    /// Minimum level this target accepts.
    #[serde(default)]
    pub level: Level,

    /// Categories to listen to; empty means all.
    #[serde(default)]
    pub categories: Vec<String>,
}
