//! Action categories.
//!
//! Every action belongs to exactly one category. The set of categories is
//! closed: the host knows how to draw each of them, and constraint policies
//! refer to them by name.

use crate::UnknownCategory;
use serde::{Deserialize, Serialize};
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// The kind of an action.
///
/// Ordering follows declaration order, so sets of categories iterate and
/// report deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionCategory {
    /// An application-defined action with its own title or icon.
    Custom,
    /// The application icon, shown in headers.
    AppIcon,
    /// Navigates back.
    Back,
    /// Toggles pan mode on map surfaces.
    Pan,
}

impl ActionCategory {
    /// All categories, in order.
    pub const ALL: [ActionCategory; 4] = [
        ActionCategory::Custom,
        ActionCategory::AppIcon,
        ActionCategory::Back,
        ActionCategory::Pan,
    ];

    /// Stable upper-case name used in diagnostics and configuration.
    pub fn name(self) -> &'static str {
        match self {
            ActionCategory::Custom => "CUSTOM",
            ActionCategory::AppIcon => "APP_ICON",
            ActionCategory::Back => "BACK",
            ActionCategory::Pan => "PAN",
        }
    }
}

impl fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActionCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionCategory::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownCategory::new(s))
    }
}

/// An ordered set of action categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySet {
    categories: BTreeSet<ActionCategory>,
}

impl CategorySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a category. Returns true if it was not already present.
    pub fn insert(&mut self, category: ActionCategory) -> bool {
        self.categories.insert(category)
    }

    /// Remove a category. Returns true if it was present.
    pub fn remove(&mut self, category: ActionCategory) -> bool {
        self.categories.remove(&category)
    }

    pub fn contains(&self, category: ActionCategory) -> bool {
        self.categories.contains(&category)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterate in ascending category order.
    pub fn iter(&self) -> impl Iterator<Item = ActionCategory> + '_ {
        self.categories.iter().copied()
    }

    /// Returns true if no category is in both sets.
    pub fn is_disjoint(&self, other: &CategorySet) -> bool {
        self.categories.is_disjoint(&other.categories)
    }

    /// Categories present in both sets.
    pub fn intersection(&self, other: &CategorySet) -> CategorySet {
        self.categories
            .intersection(&other.categories)
            .copied()
            .collect()
    }
}

impl FromIterator<ActionCategory> for CategorySet {
    fn from_iter<I: IntoIterator<Item = ActionCategory>>(iter: I) -> Self {
        Self {
            categories: iter.into_iter().collect(),
        }
    }
}

impl Extend<ActionCategory> for CategorySet {
    fn extend<I: IntoIterator<Item = ActionCategory>>(&mut self, iter: I) {
        self.categories.extend(iter);
    }
}

impl<const N: usize> From<[ActionCategory; N]> for CategorySet {
    fn from(categories: [ActionCategory; N]) -> Self {
        categories.into_iter().collect()
    }
}

impl IntoIterator for CategorySet {
    type Item = ActionCategory;
    type IntoIter = btree_set::IntoIter<ActionCategory>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.into_iter()
    }
}

impl<'a> IntoIterator for &'a CategorySet {
    type Item = &'a ActionCategory;
    type IntoIter = btree_set::Iter<'a, ActionCategory>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.iter()
    }
}

impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, category) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", category)?;
        }
        Ok(())
    }
}
