//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Target names unique and non-empty
//! - Category names non-empty
//! - Names used as written; surrounding whitespace is rejected, not trimmed
//! - Reject targets that could never receive an event
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LogConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::LogConfig;
use crate::model::Level;

/// One semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("target #{0} has an empty name")]
    EmptyTargetName(usize),

    #[error("target `{0}` is defined more than once")]
    DuplicateTargetName(String),

    #[error("target `{0}` lists an empty category")]
    EmptyCategory(String),

    #[error("target name `{0}` has leading or trailing whitespace")]
    PaddedTargetName(String),

    #[error("target `{target}` lists category `{category}` with leading or trailing whitespace")]
    PaddedCategory { target: String, category: String },

    #[error("target `{0}` has level NONE and would never receive events")]
    UnreachableTarget(String),

    #[error("metrics address `{0}` is not a socket address")]
    InvalidMetricsAddress(String),
}

/// Check `config` for semantic errors.
pub fn validate_config(config: &LogConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, target) in config.targets.iter().enumerate() {
        let name = target.name.trim();
        if name.is_empty() {
            errors.push(ValidationError::EmptyTargetName(index));
            continue;
        }
        if name != target.name.as_str() {
            errors.push(ValidationError::PaddedTargetName(target.name.clone()));
        }
        if !seen.insert(name) {
            errors.push(ValidationError::DuplicateTargetName(name.to_string()));
        }
        if target.categories.iter().any(|c| c.trim().is_empty()) {
            errors.push(ValidationError::EmptyCategory(name.to_string()));
        }
        for category in &target.categories {
            let trimmed = category.trim();
            if !trimmed.is_empty() && trimmed != category.as_str() {
                errors.push(ValidationError::PaddedCategory {
                    target: name.to_string(),
                    category: category.clone(),
                });
            }
        }
        if target.level >= Level::NONE {
            errors.push(ValidationError::UnreachableTarget(name.to_string()));
        }
    }

    let observability = &config.observability;
    if observability.metrics_enabled
        && observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
