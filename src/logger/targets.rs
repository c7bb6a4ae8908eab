//! Copy-on-write target collection.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::target::{same_target, Target};

/// Immutable snapshot of a target collection.
pub type TargetSnapshot = Arc<Vec<Arc<dyn Target>>>;

/// Set of distinct targets, safe to mutate while dispatches iterate it.
///
/// Every mutation publishes a whole new vector through a read-copy-update
/// loop, so concurrent writers retry instead of overwriting each other and
/// readers only ever observe complete vectors.
pub struct TargetSet {
    inner: ArcSwap<Vec<Arc<dyn Target>>>,
}

impl TargetSet {
    pub fn new() -> Self {
        Self {
            inner: ArcSwap::from_pointee(Vec::new()),
        }
    }

    /// Insert `target` unless already present. Returns whether it was added.
    pub fn add(&self, target: Arc<dyn Target>) -> bool {
        let mut added = false;
        self.inner.rcu(|current| {
            if current.iter().any(|t| same_target(t, &target)) {
                added = false;
                return Arc::clone(current);
            }
            added = true;
            let mut next = Vec::with_capacity(current.len() + 1);
            next.extend(current.iter().cloned());
            next.push(Arc::clone(&target));
            Arc::new(next)
        });
        added
    }

    /// Remove `target` if present. Returns whether it was removed.
    pub fn remove(&self, target: &Arc<dyn Target>) -> bool {
        let mut removed = false;
        self.inner.rcu(|current| {
            if !current.iter().any(|t| same_target(t, target)) {
                removed = false;
                return Arc::clone(current);
            }
            removed = true;
            let next: Vec<_> = current
                .iter()
                .filter(|t| !same_target(t, target))
                .cloned()
                .collect();
            Arc::new(next)
        });
        removed
    }

    pub fn contains(&self, target: &Arc<dyn Target>) -> bool {
        self.inner.load().iter().any(|t| same_target(t, target))
    }

    pub fn is_empty(&self) -> bool {
        self.inner.load().is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.load().len()
    }

    /// Current contents. Later mutations do not affect the returned value.
    pub fn snapshot(&self) -> TargetSnapshot {
        self.inner.load_full()
    }
}

impl Default for TargetSet {
    fn default() -> Self {
        Self::new()
    }
}
