//! Core error types.

use thiserror::Error;

/// Error returned when a category name does not match any known category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown action category: {name}")]
pub struct UnknownCategory {
    pub name: String,
}

impl UnknownCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
