//! Action list checking.

use crate::error::{ValidationError, ValidationResult};
use crate::policy::ConstraintSet;
use strip_core::Action;

/// Check an ordered action list against a policy.
///
/// Runs a single pass in input order. Per-item rules (disallowed category,
/// titled budget, action budget) fail on the first offending action; the
/// required-category rule needs the whole list and is checked last.
pub fn validate(policy: &ConstraintSet, actions: &[Action]) -> ValidationResult<()> {
    let mut remaining_actions = policy.max_actions();
    let mut remaining_titled = policy.max_titled_actions();
    let mut pending_required = policy.required_categories().clone();

    for (position, action) in actions.iter().enumerate() {
        let category = action.category();

        if policy.is_disallowed(category) {
            return Err(ValidationError::disallowed_category(category, position));
        }

        pending_required.remove(category);

        if action.is_titled() {
            remaining_titled = remaining_titled.checked_sub(1).ok_or_else(|| {
                ValidationError::too_many_titled_actions(policy.max_titled_actions(), position)
            })?;
        }

        remaining_actions = remaining_actions
            .checked_sub(1)
            .ok_or_else(|| ValidationError::too_many_actions(policy.max_actions(), position))?;
    }

    if !pending_required.is_empty() {
        return Err(ValidationError::missing_required_categories(pending_required));
    }

    Ok(())
}
