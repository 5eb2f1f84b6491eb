//! ConstraintSet and its builder.

use crate::checker;
use crate::config::PolicyConfig;
use crate::error::{PolicyError, PolicyResult, ValidationResult};
use serde::{Deserialize, Serialize};
use strip_core::{Action, ActionCategory, CategorySet};

/// Limits applied to the action list of one template context.
///
/// Instances are immutable and always satisfy two invariants: no category is
/// both required and disallowed, and the required categories fit within
/// `max_actions`. The only way to obtain one is through
/// [`ConstraintSetBuilder::build`] (directly or via deserialization).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PolicyConfig", into = "PolicyConfig")]
pub struct ConstraintSet {
    max_actions: usize,
    max_titled_actions: usize,
    required_categories: CategorySet,
    disallowed_categories: CategorySet,
}

impl ConstraintSet {
    /// Start a policy from the defaults.
    pub fn builder() -> ConstraintSetBuilder {
        ConstraintSetBuilder::new()
    }

    /// Start a new policy seeded with this one's settings.
    pub fn to_builder(&self) -> ConstraintSetBuilder {
        ConstraintSetBuilder::from(self)
    }

    /// Maximum number of actions; `usize::MAX` when unbounded.
    pub fn max_actions(&self) -> usize {
        self.max_actions
    }

    /// Maximum number of actions carrying a non-empty title.
    pub fn max_titled_actions(&self) -> usize {
        self.max_titled_actions
    }

    pub fn required_categories(&self) -> &CategorySet {
        &self.required_categories
    }

    pub fn disallowed_categories(&self) -> &CategorySet {
        &self.disallowed_categories
    }

    /// Returns true if the policy places no limit on the action count.
    pub fn is_unbounded(&self) -> bool {
        self.max_actions == usize::MAX
    }

    pub fn is_required(&self, category: ActionCategory) -> bool {
        self.required_categories.contains(category)
    }

    pub fn is_disallowed(&self, category: ActionCategory) -> bool {
        self.disallowed_categories.contains(category)
    }

    /// Validate an action list against this policy.
    pub fn validate(&self, actions: &[Action]) -> ValidationResult<()> {
        checker::validate(self, actions)
    }

    /// The longest prefix of `actions` within the action budget.
    ///
    /// No other rule is applied; callers that opt into truncation still
    /// validate the result.
    pub fn truncate<'a>(&self, actions: &'a [Action]) -> &'a [Action] {
        &actions[..actions.len().min(self.max_actions)]
    }
}

/// Builder for a [`ConstraintSet`].
///
/// Setters only record values; cross-field checks happen in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct ConstraintSetBuilder {
    max_actions: usize,
    max_titled_actions: usize,
    required_categories: CategorySet,
    disallowed_categories: CategorySet,
}

impl Default for ConstraintSetBuilder {
    fn default() -> Self {
        Self {
            max_actions: usize::MAX,
            max_titled_actions: 0,
            required_categories: CategorySet::new(),
            disallowed_categories: CategorySet::new(),
        }
    }
}

impl ConstraintSetBuilder {
    /// Unlimited actions, no titled actions, no required or disallowed categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of actions.
    pub fn set_max_actions(mut self, max_actions: usize) -> Self {
        self.max_actions = max_actions;
        self
    }

    /// Set the maximum number of titled actions.
    pub fn set_max_titled_actions(mut self, max_titled_actions: usize) -> Self {
        self.max_titled_actions = max_titled_actions;
        self
    }

    /// Require at least one action of this category.
    pub fn add_required_category(mut self, category: ActionCategory) -> Self {
        self.required_categories.insert(category);
        self
    }

    /// Reject any action of this category.
    pub fn add_disallowed_category(mut self, category: ActionCategory) -> Self {
        self.disallowed_categories.insert(category);
        self
    }

    /// Build the immutable policy.
    pub fn build(self) -> PolicyResult<ConstraintSet> {
        let conflicting = self
            .required_categories
            .intersection(&self.disallowed_categories);
        if !conflicting.is_empty() {
            return Err(PolicyError::conflicting_category(conflicting));
        }

        if self.required_categories.len() > self.max_actions {
            return Err(PolicyError::required_exceeds_max(
                self.required_categories.len(),
                self.max_actions,
            ));
        }

        Ok(ConstraintSet {
            max_actions: self.max_actions,
            max_titled_actions: self.max_titled_actions,
            required_categories: self.required_categories,
            disallowed_categories: self.disallowed_categories,
        })
    }
}

impl From<&ConstraintSet> for ConstraintSetBuilder {
    fn from(policy: &ConstraintSet) -> Self {
        Self {
            max_actions: policy.max_actions,
            max_titled_actions: policy.max_titled_actions,
            required_categories: policy.required_categories.clone(),
            disallowed_categories: policy.disallowed_categories.clone(),
        }
    }
}

impl From<ConstraintSet> for ConstraintSetBuilder {
    fn from(policy: ConstraintSet) -> Self {
        Self {
            max_actions: policy.max_actions,
            max_titled_actions: policy.max_titled_actions,
            required_categories: policy.required_categories,
            disallowed_categories: policy.disallowed_categories,
        }
    }
}
