//! Category registry.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use arc_swap::ArcSwap;
use dashmap::DashMap;

use crate::format::PrettyPrinter;
use crate::gate::{AtomicLevelGate, LevelGate};
use crate::logger::{LogContext, Logger};
use crate::model::Level;
use crate::registry::binding::Binding;
use crate::target::{FailureReporter, Target};

/// Owns one logger per category and routes targets to them.
///
/// Loggers are created on first lookup and receive every bound target whose
/// categories match. Targets bound later are pushed into existing loggers.
pub struct LogRegistry {
    gate: Arc<AtomicLevelGate>,
    context: LogContext,
    loggers: DashMap<String, Arc<Logger>>,
    bindings: ArcSwap<Vec<Binding>>,
    /// Held across publishing a binding change and walking the loggers.
    rebind: Mutex<()>,
}

impl LogRegistry {
    /// Create a registry whose gate starts at `level`.
    pub fn new(level: Level) -> Self {
        let gate = Arc::new(AtomicLevelGate::new(level));
        let context = LogContext::new(gate.clone() as Arc<dyn LevelGate>);
        Self {
            gate,
            context,
            loggers: DashMap::new(),
            bindings: ArcSwap::from_pointee(Vec::new()),
            rebind: Mutex::new(()),
        }
    }

    /// Replace the printer. Only affects loggers created afterwards.
    pub fn with_printer(mut self, printer: Arc<dyn PrettyPrinter>) -> Self {
        self.context = self.context.with_printer(printer);
        self
    }

    /// Replace the failure reporter. Only affects loggers created afterwards.
    pub fn with_reporter(mut self, reporter: Arc<dyn FailureReporter>) -> Self {
        self.context = self.context.with_reporter(reporter);
        self
    }

    /// The gate shared by every logger of this registry.
    pub fn gate(&self) -> &Arc<AtomicLevelGate> {
        &self.gate
    }

    pub fn set_target_level(&self, level: Level) -> Level {
        self.gate.set_target_level(level)
    }

    /// Get the logger for `category`, creating it on first use.
    pub fn logger(&self, category: &str) -> Arc<Logger> {
        if let Some(existing) = self.loggers.get(category) {
            return Arc::clone(existing.value());
        }

        let entry = self.loggers.entry(category.to_string()).or_insert_with(|| {
            let logger = Logger::new(category, self.context.clone());
            for binding in self.bindings.load().iter() {
                if binding.matches(category) {
                    logger.add_target(Arc::clone(&binding.target));
                }
            }
            tracing::debug!(category, "Logger created");
            Arc::new(logger)
        });
        Arc::clone(entry.value())
    }

    /// Drop the logger for `category`. Outstanding handles keep working.
    pub fn remove_logger(&self, category: &str) -> Option<Arc<Logger>> {
        self.loggers.remove(category).map(|(_, logger)| logger)
    }

    /// Known categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        let mut names: Vec<_> = self.loggers.iter().map(|r| r.key().clone()).collect();
        names.sort();
        names
    }

    /// Bind `target` to `categories` (empty = all), replacing any previous
    /// binding of the same target.
    ///
    /// Binding changes are serialized, so concurrent calls leave every
    /// logger as some sequential order of those calls would.
    pub fn add_target<I, S>(&self, target: Arc<dyn Target>, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let binding = Binding::new(target, categories.into_iter().map(Into::into).collect());
        let _rebind = self.lock_rebind();

        let mut next: Vec<_> = self
            .bindings
            .load()
            .iter()
            .filter(|b| !b.is_for(&binding.target))
            .cloned()
            .collect();
        next.push(binding.clone());
        self.bindings.store(Arc::new(next));

        // Bindings are published before the walk, so a logger created
        // concurrently either sees the binding or is visited here.
        for entry in self.loggers.iter() {
            if binding.matches(entry.key()) {
                entry.value().add_target(Arc::clone(&binding.target));
            } else {
                entry.value().remove_target(&binding.target);
            }
        }

        tracing::info!(
            target_name = %binding.target.name(),
            categories = ?binding.categories,
            "Target bound"
        );
    }

    /// Unbind `target` from every logger.
    pub fn remove_target(&self, target: &Arc<dyn Target>) {
        let _rebind = self.lock_rebind();

        let next: Vec<_> = self
            .bindings
            .load()
            .iter()
            .filter(|b| !b.is_for(target))
            .cloned()
            .collect();
        self.bindings.store(Arc::new(next));

        for entry in self.loggers.iter() {
            entry.value().remove_target(target);
        }

        tracing::info!(target_name = %target.name(), "Target unbound");
    }

    /// Number of bound targets.
    pub fn target_count(&self) -> usize {
        self.bindings.load().len()
    }

    /// Whether the current bindings route `target` to `category`.
    pub fn routes(&self, target: &Arc<dyn Target>, category: &str) -> bool {
        self.bindings
            .load()
            .iter()
            .any(|b| b.is_for(target) && b.matches(category))
    }

    fn lock_rebind(&self) -> MutexGuard<'_, ()> {
        self.rebind.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
