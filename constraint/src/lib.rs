//! STRIP Constraint
//!
//! Validate ordered action lists against constraint policies.
//!
//! Responsibilities:
//! - Build immutable, self-consistent policies (ConstraintSet)
//! - Provide the named policies templates share
//! - Validate a candidate action list in a single fail-fast pass
//! - Load policies from JSON configuration
//! - Produce errors that name the violated rule and its limit

mod checker;
mod config;
mod error;
mod named;
mod policy;

pub use checker::validate;
pub use config::PolicyConfig;
pub use error::{
    ConfigError, ConfigResult, PolicyError, PolicyResult, ValidationError, ValidationResult,
};
pub use named::{NamedPolicy, CONSERVATIVE, HEADER, NAVIGATION, SIMPLE};
pub use policy::{ConstraintSet, ConstraintSetBuilder};
