//! Policy configuration documents.
//!
//! A policy can be described in JSON and loaded through the same builder as
//! the named policies, so a malformed document never yields a policy:
//!
//! ```json
//! { "extends": "conservative", "max_actions": 4, "required": ["CUSTOM"] }
//! ```
//!
//! `extends` seeds the builder from a named policy. Fields that are absent
//! (or `null`) keep the seeded value; without `extends`, an absent
//! `max_actions` means unbounded. Category lists are added to the seeded sets.

use crate::error::{ConfigError, ConfigResult};
use crate::named::NamedPolicy;
use crate::policy::{ConstraintSet, ConstraintSetBuilder};
use serde::{Deserialize, Serialize};
use strip_core::CategorySet;

/// Serialized form of a [`ConstraintSet`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    /// Named policy to start from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    #[serde(default)]
    pub max_actions: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_titled_actions: Option<usize>,
    #[serde(default, skip_serializing_if = "CategorySet::is_empty")]
    pub required: CategorySet,
    #[serde(default, skip_serializing_if = "CategorySet::is_empty")]
    pub disallowed: CategorySet,
}

impl PolicyConfig {
    /// Resolve into a built policy.
    pub fn into_policy(self) -> ConfigResult<ConstraintSet> {
        let mut builder = match &self.extends {
            Some(name) => name.parse::<NamedPolicy>()?.policy().to_builder(),
            None => ConstraintSetBuilder::new(),
        };

        if let Some(max) = self.max_actions {
            builder = builder.set_max_actions(max);
        }
        if let Some(max) = self.max_titled_actions {
            builder = builder.set_max_titled_actions(max);
        }
        for category in self.required {
            builder = builder.add_required_category(category);
        }
        for category in self.disallowed {
            builder = builder.add_disallowed_category(category);
        }

        Ok(builder.build()?)
    }
}

impl TryFrom<PolicyConfig> for ConstraintSet {
    type Error = ConfigError;

    fn try_from(config: PolicyConfig) -> Result<Self, Self::Error> {
        config.into_policy()
    }
}

impl From<ConstraintSet> for PolicyConfig {
    fn from(policy: ConstraintSet) -> Self {
        Self {
            extends: None,
            max_actions: (!policy.is_unbounded()).then_some(policy.max_actions()),
            max_titled_actions: Some(policy.max_titled_actions()),
            required: policy.required_categories().clone(),
            disallowed: policy.disallowed_categories().clone(),
        }
    }
}

impl ConstraintSet {
    /// Parse and build a policy from a JSON document.
    pub fn from_json(json: &str) -> ConfigResult<ConstraintSet> {
        let config: PolicyConfig = serde_json::from_str(json)?;
        config.into_policy()
    }

    /// Render this policy as a JSON document.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string(&PolicyConfig::from(self.clone()))?)
    }
}
