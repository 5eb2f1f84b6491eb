//! STRIP Core Types
//!
//! This crate provides the value objects shared by every STRIP component:
//! - Action categories (the closed ActionCategory enum and CategorySet)
//! - Actions and their optional titles
//! - Common error types

mod action;
mod category;
mod error;

pub use action::*;
pub use category::*;
pub use error::*;
