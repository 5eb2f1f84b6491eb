//! Message template.
//!
//! Shows a message, optionally with a title, a header action, debug text
//! and a short strip of actions. The header is checked against [`HEADER`]
//! and the action strip against [`SIMPLE`].

use crate::error::{TemplateError, TemplateResult};
use std::error::Error as StdError;
use strip_constraint::{ConstraintSet, HEADER, SIMPLE};
use strip_core::{Action, Title};
use tracing::{debug, trace};

/// An immutable message template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    title: Option<Title>,
    message: Title,
    debug_message: Option<String>,
    header_action: Option<Action>,
    actions: Vec<Action>,
}

impl MessageTemplate {
    /// Start building a template showing `message`.
    pub fn builder(message: impl Into<Title>) -> MessageTemplateBuilder {
        MessageTemplateBuilder::new(message)
    }

    pub fn title(&self) -> Option<&Title> {
        self.title.as_ref()
    }

    pub fn message(&self) -> &Title {
        &self.message
    }

    pub fn debug_message(&self) -> Option<&str> {
        self.debug_message.as_deref()
    }

    pub fn header_action(&self) -> Option<&Action> {
        self.header_action.as_ref()
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Policy applied to the action strip.
    pub fn action_policy() -> &'static ConstraintSet {
        &*SIMPLE
    }
}

/// Builder for a [`MessageTemplate`].
///
/// Setters that take actions validate them immediately and leave the builder
/// untouched on failure; `build` re-checks everything.
#[derive(Debug, Clone)]
pub struct MessageTemplateBuilder {
    title: Option<Title>,
    message: Title,
    debug_text: Option<String>,
    debug_cause: Option<String>,
    header_action: Option<Action>,
    actions: Vec<Action>,
}

impl MessageTemplateBuilder {
    pub fn new(message: impl Into<Title>) -> Self {
        Self {
            title: None,
            message: message.into(),
            debug_text: None,
            debug_cause: None,
            header_action: None,
            actions: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<Title>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Free-form debug text shown alongside the message.
    pub fn debug_message(mut self, text: impl Into<String>) -> Self {
        self.debug_text = Some(text.into());
        self
    }

    /// An error whose description, including its source chain, is appended
    /// to the debug text.
    pub fn debug_cause(mut self, cause: &(dyn StdError + 'static)) -> Self {
        self.debug_cause = Some(render_cause(cause));
        self
    }

    /// Set or clear the header action. Only standard actions are accepted.
    pub fn header_action(mut self, action: Option<Action>) -> TemplateResult<Self> {
        check_header(action.as_ref())?;
        self.header_action = action;
        Ok(self)
    }

    /// Replace the action strip.
    pub fn action_list(mut self, actions: Vec<Action>) -> TemplateResult<Self> {
        check_actions(&actions)?;
        self.actions = actions;
        Ok(self)
    }

    /// Replace the action strip, dropping actions beyond the policy's budget
    /// before validating what remains.
    pub fn action_list_truncated(self, mut actions: Vec<Action>) -> TemplateResult<Self> {
        let keep = MessageTemplate::action_policy().truncate(&actions).len();
        if keep < actions.len() {
            debug!(dropped = actions.len() - keep, "truncating action list");
            actions.truncate(keep);
        }
        self.action_list(actions)
    }

    /// Build the template.
    pub fn build(self) -> TemplateResult<MessageTemplate> {
        if self.message.is_empty() {
            return Err(TemplateError::EmptyMessage);
        }

        let title_missing = self.title.as_ref().map_or(true, Title::is_empty);
        if title_missing && self.header_action.is_none() {
            return Err(TemplateError::MissingTitleOrHeader);
        }

        check_header(self.header_action.as_ref())?;
        check_actions(&self.actions)?;

        let debug_message = join_debug(self.debug_text, self.debug_cause);

        trace!(
            actions = self.actions.len(),
            header = self.header_action.is_some(),
            "built message template"
        );

        Ok(MessageTemplate {
            title: self.title,
            message: self.message,
            debug_message,
            header_action: self.header_action,
            actions: self.actions,
        })
    }
}

fn check_header(action: Option<&Action>) -> TemplateResult<()> {
    let candidate: &[Action] = match action {
        Some(action) => std::slice::from_ref(action),
        None => &[],
    };
    HEADER.validate(candidate).map_err(|e| {
        debug!(count = candidate.len(), error = %e, "rejected header action");
        TemplateError::HeaderAction(e)
    })
}

fn check_actions(actions: &[Action]) -> TemplateResult<()> {
    MessageTemplate::action_policy()
        .validate(actions)
        .map_err(|e| {
            debug!(count = actions.len(), error = %e, "rejected action list");
            TemplateError::ActionList(e)
        })
}

fn render_cause(cause: &(dyn StdError + 'static)) -> String {
    let mut rendered = cause.to_string();
    let mut source = cause.source();
    while let Some(err) = source {
        rendered.push_str("\nCaused by: ");
        rendered.push_str(&err.to_string());
        source = err.source();
    }
    rendered
}

fn join_debug(text: Option<String>, cause: Option<String>) -> Option<String> {
    let joined = match (text, cause) {
        (Some(text), Some(cause)) if !text.is_empty() => format!("{}\n{}", text, cause),
        (_, Some(cause)) => cause,
        (Some(text), None) => text,
        (None, None) => String::new(),
    };
    (!joined.is_empty()).then_some(joined)
}
