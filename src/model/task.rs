use std::fmt;
use std::rc::Rc;

use crate::ops::launch::ActionError;

/// Something a task does when the user confirms it
pub trait TaskAction: fmt::Debug {
    fn run(&self, task: &Task) -> Result<(), ActionError>;
}

/// Shared handle to a task action
pub type ActionRef = Rc<dyn TaskAction>;

/// Summary shown when a list is built from no tasks at all
pub const PLACEHOLDER_SUMMARY: &str = "No tasks yet...";

/// A single entry in the task list. Immutable once built.
#[derive(Debug, Clone)]
pub struct Task {
    /// One-line summary, always visible
    pub summary: String,
    /// Longer text, shown only when the task is selected
    pub description: String,
    /// Color tag resolved through the theme (e.g. "lightblue", "#FFA500")
    pub color: String,
    /// What confirming the task does; `None` falls back to the list default
    pub action: Option<ActionRef>,
}

impl Task {
    pub fn new(
        summary: impl Into<String>,
        description: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Task {
            summary: summary.into(),
            description: description.into(),
            color: color.into(),
            action: None,
        }
    }

    /// Attach an action to this task
    pub fn with_action(mut self, action: ActionRef) -> Self {
        self.action = Some(action);
        self
    }

    /// The non-actionable stand-in used when there are no tasks
    pub fn placeholder() -> Self {
        Task::new(PLACEHOLDER_SUMMARY, "", "grey")
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }
}
