//! Actions and titles.
//!
//! An action is a single user-invocable item attached to a template. The
//! constraint layer only looks at its category and whether it carries a
//! non-empty title.

use crate::ActionCategory;
use std::fmt;

/// Display text of an action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Title(String);

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Title {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Title {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A user-invocable item on a template's action strip.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Action {
    /// Kind of this action.
    pub category: ActionCategory,
    /// Optional display title (possibly empty).
    pub title: Option<Title>,
}

impl Action {
    /// Create an untitled action of the given category.
    pub fn new(category: ActionCategory) -> Self {
        Self {
            category,
            title: None,
        }
    }

    /// Create an untitled custom action.
    pub fn custom() -> Self {
        Self::new(ActionCategory::Custom)
    }

    /// The standard back action.
    pub fn back() -> Self {
        Self::new(ActionCategory::Back)
    }

    /// The standard app-icon action.
    pub fn app_icon() -> Self {
        Self::new(ActionCategory::AppIcon)
    }

    /// The standard pan action.
    pub fn pan() -> Self {
        Self::new(ActionCategory::Pan)
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<Title>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn category(&self) -> ActionCategory {
        self.category
    }

    pub fn title(&self) -> Option<&Title> {
        self.title.as_ref()
    }

    /// Returns true if the title is set and non-empty.
    pub fn is_titled(&self) -> bool {
        self.title.as_ref().is_some_and(|t| !t.is_empty())
    }
}

impl From<ActionCategory> for Action {
    fn from(category: ActionCategory) -> Self {
        Self::new(category)
    }
}
