//! STRIP Template
//!
//! Templates whose builders enforce action constraints.
//!
//! Responsibilities:
//! - Validate header actions against the header policy on assignment
//! - Validate action lists against the template's policy on assignment
//! - Re-check everything, plus template-specific rules, at build time

mod error;
mod message;

pub use error::{TemplateError, TemplateResult};
pub use message::{MessageTemplate, MessageTemplateBuilder};
