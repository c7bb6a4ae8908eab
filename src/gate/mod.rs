//! Process-wide severity gate.
//!
//! # Data Flow
//! ```text
//! config level / admin change
//!     → AtomicLevelGate::set_target_level (atomic store)
//!     → every later dispatch reads LevelGate::target_level()
//! ```
//!
//! # Design Decisions
//! - The gate is injected into loggers, never reached through a global
//! - Reads are a single relaxed atomic load; in-flight dispatches are not re-evaluated

use std::sync::atomic::{AtomicU16, Ordering};

use crate::model::Level;

/// Source of the current minimum level.
pub trait LevelGate: Send + Sync {
    fn target_level(&self) -> Level;
}

/// Hot-swappable gate backed by an atomic.
#[derive(Debug, Default)]
pub struct AtomicLevelGate {
    level: AtomicU16,
}

impl AtomicLevelGate {
    pub fn new(level: Level) -> Self {
        Self {
            level: AtomicU16::new(level.raw()),
        }
    }

    /// Replace the threshold, returning the previous one.
    pub fn set_target_level(&self, level: Level) -> Level {
        let previous = Level::from_raw(self.level.swap(level.raw(), Ordering::Relaxed));
        if previous != level {
            tracing::info!(%previous, current = %level, "Target level changed");
        }
        previous
    }
}

impl LevelGate for AtomicLevelGate {
    fn target_level(&self) -> Level {
        Level::from_raw(self.level.load(Ordering::Relaxed))
    }
}

/// A gate that never changes.
#[derive(Debug, Clone, Copy)]
pub struct FixedLevelGate(pub Level);

impl LevelGate for FixedLevelGate {
    fn target_level(&self) -> Level {
        self.0
    }
}
