//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the registry from a validated configuration
//! - Create and bind the configured targets
//! - Re-apply configuration on reload
//!
//! # Design Decisions
//! - Targets are matched by name across reloads; a kept target keeps its identity
//! - Printer settings are fixed at startup, loggers already hold their context
//! - Reloads go through the same path as startup

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::config::LogConfig;
use crate::format::BasicPrettyPrinter;
use crate::registry::LogRegistry;
use crate::target::{Target, TracingTarget};

/// A registry plus the targets created for it from configuration.
pub struct LoggingRuntime {
    registry: Arc<LogRegistry>,
    targets: Mutex<HashMap<String, Arc<TracingTarget>>>,
}

impl LoggingRuntime {
    /// Build the registry and bind every configured target.
    pub fn start(config: &LogConfig) -> Self {
        let printer = BasicPrettyPrinter::new(config.printer.max_len);
        let registry = LogRegistry::new(config.level).with_printer(Arc::new(printer));

        let runtime = Self {
            registry: Arc::new(registry),
            targets: Mutex::new(HashMap::new()),
        };
        runtime.apply(config);

        tracing::info!(
            level = %config.level,
            targets = config.targets.len(),
            "Logging runtime started"
        );
        runtime
    }

    pub fn registry(&self) -> &Arc<LogRegistry> {
        &self.registry
    }

    /// Names of the configured targets, sorted.
    pub fn target_names(&self) -> Vec<String> {
        let targets = self.targets.lock().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<_> = targets.keys().cloned().collect();
        names.sort();
        names
    }

    /// Bring gate and targets in line with `config`.
    pub fn apply(&self, config: &LogConfig) {
        self.registry.set_target_level(config.level);

        let mut targets = self.targets.lock().unwrap_or_else(PoisonError::into_inner);

        let wanted: Vec<&str> = config.targets.iter().map(|t| t.name.as_str()).collect();
        let stale: Vec<String> = targets
            .keys()
            .filter(|name| !wanted.contains(&name.as_str()))
            .cloned()
            .collect();
        for name in stale {
            if let Some(target) = targets.remove(&name) {
                let target: Arc<dyn Target> = target;
                self.registry.remove_target(&target);
            }
        }

        for target_config in &config.targets {
            let target = targets
                .entry(target_config.name.clone())
                .or_insert_with(|| Arc::new(TracingTarget::new(&target_config.name, target_config.level)));
            target.set_level(target_config.level);

            let shared: Arc<dyn Target> = target.clone();
            self.registry
                .add_target(shared, target_config.categories.iter().cloned());
        }
    }
}
