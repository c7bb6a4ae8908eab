//! Target-to-category bindings.

use std::sync::Arc;

use crate::target::{same_target, Target};

/// A target together with the categories it listens to.
///
/// No categories means every category.
#[derive(Clone)]
pub struct Binding {
    pub target: Arc<dyn Target>,
    pub categories: Vec<String>,
}

impl Binding {
    pub fn new(target: Arc<dyn Target>, categories: Vec<String>) -> Self {
        Self { target, categories }
    }

    pub fn matches(&self, category: &str) -> bool {
        self.categories.is_empty() || self.categories.iter().any(|c| c == category)
    }

    pub fn is_for(&self, target: &Arc<dyn Target>) -> bool {
        same_target(&self.target, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Level;
    use crate::target::TracingTarget;

    #[test]
    fn test_empty_categories_match_everything() {
        let binding = Binding::new(Arc::new(TracingTarget::new("all", Level::ALL)), Vec::new());
        assert!(binding.matches("net"));
        assert!(binding.matches(""));
    }

    #[test]
    fn test_exact_category_match() {
        let binding = Binding::new(
            Arc::new(TracingTarget::new("net", Level::ALL)),
            vec!["net".to_string(), "dns".to_string()],
        );
        assert!(binding.matches("dns"));
        assert!(!binding.matches("net.tcp"));
    }
}
