use crate::model::task::Task;

use super::card::MissingActionHandler;

/// What the dialog is telling the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The confirmed task has no action
    NoAction,
    /// The task's action returned an error
    ActionFailed(String),
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::NoAction => "Nothing to do",
            Notice::ActionFailed(_) => "Action failed",
        }
    }

    pub fn body(&self) -> String {
        match self {
            Notice::NoAction => "Task has no action associated".to_string(),
            Notice::ActionFailed(message) => message.clone(),
        }
    }
}

/// Modal notice with a single Ok control. Hidden until shown; shown until
/// dismissed.
#[derive(Debug, Clone, Default)]
pub struct ModalDialog {
    notice: Option<Notice>,
}

impl ModalDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.notice.is_some()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn show(&mut self, notice: Notice) {
        tracing::debug!(?notice, "dialog shown");
        self.notice = Some(notice);
    }

    /// The Ok control: hide the dialog
    pub fn hide(&mut self) {
        if self.notice.take().is_some() {
            tracing::debug!("dialog dismissed");
        }
    }
}

impl AsMut<ModalDialog> for ModalDialog {
    fn as_mut(&mut self) -> &mut ModalDialog {
        self
    }
}

impl MissingActionHandler for ModalDialog {
    fn on_missing_action(&mut self, task: &Task) {
        tracing::info!(summary = %task.summary, "task has no action");
        self.show(Notice::NoAction);
    }
}
