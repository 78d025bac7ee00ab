use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::model::task::Task;
use crate::ops::launch::ActionError;

use super::theme::Theme;

/// Width of the rule closing an expanded card
pub const HR_WIDTH: usize = 20;

/// Fallback for a confirmed task that has no action of its own
pub trait MissingActionHandler {
    fn on_missing_action(&mut self, task: &Task);
}

/// Renderable wrapper around one task. Whether it is expanded is decided by
/// the owning list at render time.
#[derive(Debug, Clone)]
pub struct TaskCard {
    task: Task,
}

impl TaskCard {
    pub fn new(task: Task) -> Self {
        TaskCard { task }
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    /// Styled lines for this card: one line when collapsed, the summary,
    /// description and a closing rule when selected.
    pub fn render(&self, selected: bool, theme: &Theme) -> Vec<Line<'static>> {
        let color = theme.task_color(&self.task.color);
        let bg = theme.background;

        if !selected {
            return vec![Line::from(Span::styled(
                format!("   {}", self.task.summary),
                Style::default().fg(color).bg(bg),
            ))];
        }

        let mut lines = Vec::new();
        lines.push(Line::from(Span::styled(
            format!(" \u{25B7} {}", self.task.summary),
            Style::default()
                .fg(color)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        let desc_style = Style::default().fg(theme.text).bg(bg);
        for desc_line in self.task.description.split('\n') {
            lines.push(Line::from(Span::styled(desc_line.to_string(), desc_style)));
        }
        lines.push(Line::from(Span::styled(
            "\u{2014}".repeat(HR_WIDTH),
            Style::default().fg(theme.dim).bg(bg),
        )));
        lines
    }

    /// Run the task's action, or hand the task to `fallback` when it has none.
    pub fn run_action(&self, fallback: &mut dyn MissingActionHandler) -> Result<(), ActionError> {
        match &self.task.action {
            Some(action) => action.run(&self.task),
            None => {
                fallback.on_missing_action(&self.task);
                Ok(())
            }
        }
    }
}
