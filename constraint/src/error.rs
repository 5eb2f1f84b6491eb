//! Constraint error types.

use strip_core::{ActionCategory, CategorySet};
use thiserror::Error;

/// Result type for policy construction.
pub type PolicyResult<T> = Result<T, PolicyError>;

/// Result type for action list validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for policy configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while building a policy.
///
/// These indicate a malformed policy definition, never bad caller input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("Categories cannot be both required and disallowed: {categories}")]
    ConflictingCategory { categories: CategorySet },

    #[error("Required categories ({required}) exceed max allowed actions ({max_actions})")]
    RequiredExceedsMax { required: usize, max_actions: usize },
}

impl PolicyError {
    pub fn conflicting_category(categories: CategorySet) -> Self {
        Self::ConflictingCategory { categories }
    }

    pub fn required_exceeds_max(required: usize, max_actions: usize) -> Self {
        Self::RequiredExceedsMax {
            required,
            max_actions,
        }
    }
}

/// Errors raised when an action list does not satisfy a policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{category} is disallowed (action {position})")]
    DisallowedCategory {
        category: ActionCategory,
        position: usize,
    },

    #[error("Action strip exceeded max of {limit} actions (action {position})")]
    TooManyActions { limit: usize, position: usize },

    #[error("Action strip exceeded max of {limit} actions with titles (action {position})")]
    TooManyTitledActions { limit: usize, position: usize },

    #[error("Missing required categories: {categories}")]
    MissingRequiredCategories { categories: CategorySet },
}

impl ValidationError {
    pub fn disallowed_category(category: ActionCategory, position: usize) -> Self {
        Self::DisallowedCategory { category, position }
    }

    pub fn too_many_actions(limit: usize, position: usize) -> Self {
        Self::TooManyActions { limit, position }
    }

    pub fn too_many_titled_actions(limit: usize, position: usize) -> Self {
        Self::TooManyTitledActions { limit, position }
    }

    pub fn missing_required_categories(categories: CategorySet) -> Self {
        Self::MissingRequiredCategories { categories }
    }

    /// Index of the offending action, for per-item violations.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::DisallowedCategory { position, .. }
            | Self::TooManyActions { position, .. }
            | Self::TooManyTitledActions { position, .. } => Some(*position),
            Self::MissingRequiredCategories { .. } => None,
        }
    }
}

/// Errors raised while loading a policy from configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid policy document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid policy: {0}")]
    Policy(#[from] PolicyError),

    #[error("Unknown named policy: {name}")]
    UnknownPolicy { name: String },
}

impl ConfigError {
    pub fn unknown_policy(name: impl Into<String>) -> Self {
        Self::UnknownPolicy { name: name.into() }
    }
}
