//! Named policies shared by templates.
//!
//! Their limits are part of the public contract; other components refer to
//! them by name.

use crate::error::ConfigError;
use crate::policy::{ConstraintSet, ConstraintSetBuilder};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use strip_core::ActionCategory;

/// Conservative limits for most templates: at most 2 actions, none titled.
pub static CONSERVATIVE: LazyLock<ConstraintSet> = LazyLock::new(|| {
    build_named(
        NamedPolicy::Conservative,
        ConstraintSet::builder().set_max_actions(2),
    )
});

/// Template headers: one standard action (back or app icon), never custom.
pub static HEADER: LazyLock<ConstraintSet> = LazyLock::new(|| {
    build_named(
        NamedPolicy::Header,
        ConstraintSet::builder()
            .set_max_actions(1)
            .add_disallowed_category(ActionCategory::Custom),
    )
});

/// Conservative, with one titled action allowed.
pub static SIMPLE: LazyLock<ConstraintSet> = LazyLock::new(|| {
    build_named(
        NamedPolicy::Simple,
        CONSERVATIVE.to_builder().set_max_titled_actions(1),
    )
});

/// Navigation templates: up to 4 actions, one titled, at least one custom.
pub static NAVIGATION: LazyLock<ConstraintSet> = LazyLock::new(|| {
    build_named(
        NamedPolicy::Navigation,
        CONSERVATIVE
            .to_builder()
            .set_max_actions(4)
            .set_max_titled_actions(1)
            .add_required_category(ActionCategory::Custom),
    )
});

// A named policy that fails to build is a bug in this file.
fn build_named(name: NamedPolicy, builder: ConstraintSetBuilder) -> ConstraintSet {
    builder
        .build()
        .unwrap_or_else(|e| panic!("named policy `{}` is malformed: {}", name, e))
}

/// Identifies one of the shared policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedPolicy {
    Conservative,
    Header,
    Simple,
    Navigation,
}

impl NamedPolicy {
    pub const ALL: [NamedPolicy; 4] = [
        NamedPolicy::Conservative,
        NamedPolicy::Header,
        NamedPolicy::Simple,
        NamedPolicy::Navigation,
    ];

    /// The shared policy instance.
    pub fn policy(self) -> &'static ConstraintSet {
        match self {
            NamedPolicy::Conservative => &*CONSERVATIVE,
            NamedPolicy::Header => &*HEADER,
            NamedPolicy::Simple => &*SIMPLE,
            NamedPolicy::Navigation => &*NAVIGATION,
        }
    }

    /// Lower-case name used in configuration.
    pub fn name(self) -> &'static str {
        match self {
            NamedPolicy::Conservative => "conservative",
            NamedPolicy::Header => "header",
            NamedPolicy::Simple => "simple",
            NamedPolicy::Navigation => "navigation",
        }
    }
}

impl fmt::Display for NamedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NamedPolicy::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| ConfigError::unknown_policy(s))
    }
}
