//! Template error types.

use strip_constraint::ValidationError;
use thiserror::Error;

/// Result type for template construction.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur while building a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Either the title or header action must be set")]
    MissingTitleOrHeader,

    #[error("Invalid header action: {0}")]
    HeaderAction(#[source] ValidationError),

    #[error("Invalid action list: {0}")]
    ActionList(#[source] ValidationError),
}

impl TemplateError {
    /// The underlying constraint violation, if any.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            Self::HeaderAction(e) | Self::ActionList(e) => Some(e),
            Self::EmptyMessage | Self::MissingTitleOrHeader => None,
        }
    }
}
